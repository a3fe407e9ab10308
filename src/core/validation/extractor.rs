//! Axum extractors for validated input
//!
//! [`ValidId`] checks the `{id}` route parameter and [`ValidatedJson`] checks
//! the request body. Both reject with [`ApiError::Validation`], so a handler
//! that receives them never sees malformed input.

use super::config::ValidationConfig;
use super::validators::is_object_id;
use crate::core::error::ApiError;
use crate::core::resource::Resource;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Payload types that declare their own rule table
///
/// The type itself is the field whitelist: only its named fields survive
/// deserialization.
pub trait ValidatedPayload: DeserializeOwned {
    /// Rules applied before deserialization
    fn rules() -> ValidationConfig;

    /// Validate a raw JSON value and build the payload
    fn from_json(payload: Value) -> Result<Self, ApiError> {
        let filtered = Self::rules()
            .validate_and_filter(payload)
            .map_err(ApiError::Validation)?;
        serde_json::from_value(filtered).map_err(|e| ApiError::field("body", e.to_string()))
    }
}

/// Route identifier validated as an object id for resource `R`
pub struct ValidId<R>(pub ObjectId, PhantomData<R>);

impl<R> ValidId<R> {
    pub fn new(id: ObjectId) -> Self {
        Self(id, PhantomData)
    }

    pub fn into_inner(self) -> ObjectId {
        self.0
    }
}

/// Parse a raw path segment, reporting `message` on failure
pub fn parse_id(raw: &str, message: &'static str) -> Result<ObjectId, ApiError> {
    if !is_object_id(raw) {
        return Err(ApiError::field("id", message));
    }
    ObjectId::parse_str(raw).map_err(|_| ApiError::field("id", message))
}

impl<S, R> FromRequestParts<S> for ValidId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let message = R::MESSAGES.invalid_id;
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::field("id", message))?;
        parse_id(&raw, message).map(ValidId::new)
    }
}

/// Request body validated against `T::rules()` and deserialized into `T`
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: ValidatedPayload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::field("body", e.body_text()))?;
        T::from_json(payload).map(ValidatedJson)
    }
}
