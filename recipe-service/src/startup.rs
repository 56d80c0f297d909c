use crate::config::RecipeConfig;
use crate::handlers;
use crate::services::RecipeDb;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_cors,
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: RecipeConfig,
    pub db: RecipeDb,
}

/// Routes and middleware for the recipe API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/recipes", get(handlers::list_recipes))
        .route("/log", post(handlers::log_action))
        .route("/rating", post(handlers::log_rating))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

pub struct Application {
    port: u16,
    server: Box<dyn Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: RecipeConfig) -> Result<Self, AppError> {
        Self::build_with_shutdown(config, std::future::pending()).await
    }

    /// Like [`Application::build`], but the server drains and stops once
    /// `shutdown` resolves.
    pub async fn build_with_shutdown<F>(config: RecipeConfig, shutdown: F) -> Result<Self, AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let db = RecipeDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let state = AppState {
            config: config.clone(),
            db,
        };

        let app = router(state.clone());

        // Port 0 binds a random port (tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Recipe service listening on port {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &RecipeDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
