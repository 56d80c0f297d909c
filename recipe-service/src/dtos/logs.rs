use crate::models::{ActionLog, RatingLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /log`.
#[derive(Debug, Deserialize)]
pub struct LogEntryRequest {
    pub user_id: Option<String>,
    pub recipe_id: String,
    pub action: String,
    pub step_index: Option<i64>,
    /// Filled with the current UTC time when the client omits it.
    #[serde(default = "Utc::now", deserialize_with = "entry_datetime::deserialize")]
    pub entry_datetime: DateTime<Utc>,
}

/// Body of `POST /rating`. `rating` is not range-checked.
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub user_id: Option<String>,
    pub recipe_id: String,
    pub feedback: String,
    pub rating: Option<i64>,
    #[serde(default = "Utc::now", deserialize_with = "entry_datetime::deserialize")]
    pub entry_datetime: DateTime<Utc>,
}

impl From<LogEntryRequest> for ActionLog {
    fn from(req: LogEntryRequest) -> Self {
        Self {
            user_id: req.user_id,
            recipe_id: req.recipe_id,
            action: req.action,
            step_index: req.step_index,
            entry_datetime: req.entry_datetime,
        }
    }
}

impl From<RatingRequest> for RatingLog {
    fn from(req: RatingRequest) -> Self {
        Self {
            user_id: req.user_id,
            recipe_id: req.recipe_id,
            feedback: req.feedback,
            rating: req.rating,
            entry_datetime: req.entry_datetime,
        }
    }
}

/// Fixed acknowledgement returned by the logging endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AckResponse {
    pub status: String,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Accepts RFC 3339 timestamps, ISO-8601 timestamps or dates without an
/// offset (read as UTC), and Unix seconds or milliseconds.
mod entry_datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Numbers above this magnitude are Unix milliseconds (`Date.now()`),
    /// anything smaller is seconds.
    pub(super) const MILLIS_THRESHOLD: i64 = 20_000_000_000;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryDatetimeVisitor)
    }

    struct EntryDatetimeVisitor;

    impl<'de> Visitor<'de> for EntryDatetimeVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an ISO-8601 datetime string or a Unix timestamp")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            parse(v).ok_or_else(|| E::custom(format!("invalid datetime: {}", v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            let parsed = if v.unsigned_abs() > MILLIS_THRESHOLD as u64 {
                Utc.timestamp_millis_opt(v).single()
            } else {
                Utc.timestamp_opt(v, 0).single()
            };
            parsed.ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            let v = i64::try_from(v)
                .map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
            self.visit_i64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            let millis = if v.abs() > MILLIS_THRESHOLD as f64 {
                v.round()
            } else {
                (v * 1000.0).round()
            };
            if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
                return Err(E::custom(format!("timestamp out of range: {}", v)));
            }
            Utc.timestamp_millis_opt(millis as i64)
                .single()
                .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
        }
    }

    pub(super) fn parse(v: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
            return Some(dt.with_timezone(&Utc));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(v, fmt) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
