//! Request extractors shared by all controllers.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::AppError;

/// JSON body extractor whose rejection is the application error type.
///
/// Axum's stock `Json` extractor rejects malformed bodies with a plain-text
/// response. Wrapping it routes bind failures through `AppError::BadRequest`
/// instead, so they share the `{"error": ...}` wire shape of every other
/// client error and carry the underlying deserialization message.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
