//! Generic HTTP handlers, instantiated once per resource
//!
//! Validation happens in the extractors; by the time a handler body runs the
//! identifier and payload are known to be well formed.

use crate::core::error::ApiError;
use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use crate::core::validation::{ValidId, ValidatedJson};
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Body returned by a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: String,
}

/// GET /{resource}
pub async fn list_documents<R: Resource>(
    State(service): State<ResourceService<R>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    service.list().await.map(Json)
}

/// GET /{resource}/{id}
pub async fn get_document<R: Resource>(
    State(service): State<ResourceService<R>>,
    id: ValidId<R>,
) -> Result<Json<Value>, ApiError> {
    service.get(&id.into_inner()).await.map(Json)
}

/// POST /{resource}
pub async fn create_document<R: Resource>(
    State(service): State<ResourceService<R>>,
    ValidatedJson(payload): ValidatedJson<R::New>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: R::MESSAGES.created,
            id: id.to_hex(),
        }),
    ))
}

/// PUT /{resource}/{id}
pub async fn replace_document<R: Resource>(
    State(service): State<ResourceService<R>>,
    id: ValidId<R>,
    ValidatedJson(changes): ValidatedJson<R::Changes>,
) -> Result<StatusCode, ApiError> {
    service.replace(&id.into_inner(), changes).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{resource}/{id}
pub async fn delete_document<R: Resource>(
    State(service): State<ResourceService<R>>,
    id: ValidId<R>,
) -> Result<StatusCode, ApiError> {
    service.delete(&id.into_inner()).await?;
    Ok(StatusCode::NO_CONTENT)
}
