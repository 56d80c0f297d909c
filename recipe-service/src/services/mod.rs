pub mod database;
pub mod metrics;

pub use database::{RecipeDb, LOGS_COLLECTION, RECIPES_COLLECTION};
pub use metrics::{get_metrics, init_metrics, record_log_written, record_recipes_served, LogKind};
