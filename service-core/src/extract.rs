use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type";

/// JSON body extractor that reports rejections as [`AppError`].
///
/// Missing fields and type mismatches become `422` with the offending field
/// path in `details`; malformed JSON becomes `400`. A body sent without any
/// `Content-Type` is still read as JSON; only a non-JSON content type is
/// refused with `415`.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            let bytes = Bytes::from_request(req, state).await.map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Failed to read request body");
                AppError::BadRequest(anyhow::anyhow!(e.body_text()))
            })?;
            return decode_json(&bytes).map(JsonBody);
        }

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e.body_text(), "Rejected request body");
            AppError::from(e)
        })?;

        Ok(JsonBody(value))
    }
}

/// Decodes a JSON body, classifying failures the same way as axum's `Json`.
fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        let category = err.inner().classify();
        match category {
            Category::Data => AppError::ValidationError(format!("{}: {}", DATA_ERROR_PREFIX, err)),
            Category::Syntax | Category::Eof | Category::Io => AppError::BadRequest(
                anyhow::anyhow!("Failed to parse the request body as JSON: {}", err.into_inner()),
            ),
        }
    })?;

    deserializer.end().map_err(|err| {
        AppError::BadRequest(anyhow::anyhow!(
            "Failed to parse the request body as JSON: {}",
            err
        ))
    })?;

    Ok(value)
}
