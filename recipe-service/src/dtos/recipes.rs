use crate::models::{stringify_id, IngredientGroup, Recipe, Step};
use serde::{Deserialize, Serialize};

/// Recipe as returned by `GET /recipes`. The identifier is always a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub servings: Option<String>,
    pub cook_time: Option<String>,
    pub difficulty: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<IngredientGroup>,
    pub steps: Vec<Step>,
    pub tips: Option<Vec<String>>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: stringify_id(&recipe.id),
            title: recipe.title,
            subtitle: recipe.subtitle,
            category: recipe.category,
            description: recipe.description,
            servings: recipe.servings,
            cook_time: recipe.cook_time,
            difficulty: recipe.difficulty,
            image: recipe.image,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            tips: recipe.tips,
        }
    }
}
