//! Request extractors
//!
//! Wrappers around axum's extractors whose rejections render as [`ApiError`]
//! so every failure shares the `{"error", "status"}` body.

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::backend::error::ApiError;

/// JSON body whose rejection is a 400 `ApiError`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "rejected JSON body");
            ApiError::validation(rejection.body_text())
        })?;
        Ok(Self(value))
    }
}

/// Body accepted either as JSON or as `multipart/form-data`
///
/// Multipart text fields are collected into a JSON object under their field
/// names and deserialized into `T`; file parts are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        let mut fields = Map::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if field.file_name().is_some() {
                tracing::debug!(field = %name, "skipping file part");
                continue;
            }
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::validation(e.body_text()))?;
            fields.entry(name).or_insert(Value::String(text));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|e| ApiError::validation(format!("Invalid form data: {e}")))
    }
}

/// UUID path parameter; anything else is a 400 "Invalid id"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub Uuid);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::validation("Invalid id"))?;
        Ok(Self(id))
    }
}
