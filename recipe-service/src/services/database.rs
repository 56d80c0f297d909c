use crate::models::{ActionLog, RatingLog, Recipe};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

pub const RECIPES_COLLECTION: &str = "recipes";
/// Receives both action logs and ratings.
pub const LOGS_COLLECTION: &str = "logs";

/// Process-wide MongoDB handle shared by every request.
///
/// The driver client is internally pooled and safe to clone across tasks.
#[derive(Clone)]
pub struct RecipeDb {
    client: MongoClient,
    db: Database,
}

impl RecipeDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn recipes(&self) -> Collection<Recipe> {
        self.db.collection(RECIPES_COLLECTION)
    }

    pub fn action_logs(&self) -> Collection<ActionLog> {
        self.db.collection(LOGS_COLLECTION)
    }

    pub fn rating_logs(&self) -> Collection<RatingLog> {
        self.db.collection(LOGS_COLLECTION)
    }

    /// Every recipe in natural scan order. A document that does not decode
    /// fails the whole listing.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        let cursor = self.recipes().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query recipes: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to read recipes cursor: {}", e);
            AppError::from(e)
        })
    }

    pub async fn insert_action_log(&self, entry: &ActionLog) -> Result<(), AppError> {
        self.action_logs()
            .insert_one(entry, None)
            .await
            .map_err(|e| {
                tracing::error!(recipe_id = %entry.recipe_id, "Failed to insert action log: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub async fn insert_rating_log(&self, entry: &RatingLog) -> Result<(), AppError> {
        self.rating_logs()
            .insert_one(entry, None)
            .await
            .map_err(|e| {
                tracing::error!(recipe_id = %entry.recipe_id, "Failed to insert rating: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
