//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Body extractor accepting JSON or form-encoded payloads, selected by
/// Content-Type. Requests without a Content-Type are treated as JSON.
///
/// Device clients submit `application/x-www-form-urlencoded` bodies while
/// admin tooling sends JSON; both decode into the same request types.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("x-www-form-urlencoded"));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest("unable to read request body".into()))?;

        let value = if is_form {
            serde_urlencoded::from_bytes(&bytes)
                .map_err(|e| ApiError::BadRequest(format!("form: {e}")))?
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::BadRequest(format!("json: {e}")))?
        };

        Ok(Payload(value))
    }
}
