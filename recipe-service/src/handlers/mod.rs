pub mod health;
pub mod logs;
pub mod recipes;

pub use health::{health_check, index, metrics_endpoint, readiness_check};
pub use logs::{log_action, log_rating};
pub use recipes::list_recipes;
