use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user action record in the `logs` collection.
///
/// Absent optional fields are written as explicit `null`s so that every
/// record in the unified log stream carries the same keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub user_id: Option<String>,
    pub recipe_id: String,
    pub action: String,
    pub step_index: Option<i64>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub entry_datetime: DateTime<Utc>,
}

/// Rating/feedback record. Shares the `logs` collection with [`ActionLog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingLog {
    pub user_id: Option<String>,
    pub recipe_id: String,
    pub feedback: String,
    pub rating: Option<i64>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub entry_datetime: DateTime<Utc>,
}
