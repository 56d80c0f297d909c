pub mod logs;
pub mod recipes;

pub use logs::{AckResponse, LogEntryRequest, RatingRequest};
pub use recipes::RecipeResponse;
