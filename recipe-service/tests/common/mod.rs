#![allow(dead_code)]

use mongodb::bson::{doc, Document};
use mongodb::Collection;
use recipe_service::config::RecipeConfig;
use recipe_service::services::{RecipeDb, LOGS_COLLECTION, RECIPES_COLLECTION};
use recipe_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: RecipeDb,
    pub db_name: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        if std::env::var("MONGODB_URI").is_err() {
            std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }

        let db_name = format!("recipe_test_{}", Uuid::new_v4().simple());

        let mut config = RecipeConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
            client,
        }
    }

    /// Untyped view of `recipes`, for seeding documents directly.
    pub fn raw_recipes(&self) -> Collection<Document> {
        self.db.database().collection(RECIPES_COLLECTION)
    }

    /// Untyped view of `logs`, for inspecting what the API wrote.
    pub fn raw_logs(&self) -> Collection<Document> {
        self.db.database().collection(LOGS_COLLECTION)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn log_count(&self) -> u64 {
        self.raw_logs()
            .count_documents(doc! {}, None)
            .await
            .expect("Failed to count logs")
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
