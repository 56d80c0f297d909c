use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A recipe document as stored in the `recipes` collection.
///
/// Recipes are populated outside this service; the API only reads them.
/// Fields not listed here are ignored when decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier, usually an `ObjectId`.
    #[serde(rename = "_id")]
    pub id: Bson,
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

/// A labelled block of ingredients, kept in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub group: String,
    pub items: Vec<IngredientItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientItem {
    pub amount: String,
    pub name: String,
    pub description: Option<String>,
}

/// One cooking step. `number` is taken as stored, with no uniqueness or
/// ordering check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub number: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// Renders a native identifier as the plain string exposed by the API.
pub fn stringify_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
