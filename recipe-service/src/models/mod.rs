pub mod log_entry;
pub mod recipe;

pub use log_entry::{ActionLog, RatingLog};
pub use recipe::{stringify_id, IngredientGroup, IngredientItem, Recipe, Step};
