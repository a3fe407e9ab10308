//! Router assembly
//!
//! Each resource gets its own sub-router whose state is a
//! [`ResourceService`] bound to the shared store:
//! - GET    /{resource}        - List documents
//! - POST   /{resource}        - Create a document
//! - GET    /{resource}/{id}   - Get a document
//! - PUT    /{resource}/{id}   - Replace supplied fields
//! - DELETE /{resource}/{id}   - Delete a document

use super::handlers::{
    create_document, delete_document, get_document, list_documents, replace_document,
};
use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use crate::core::store::DocumentStore;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the CRUD routes for resource `R`
pub fn resource_routes<R: Resource>(store: &dyn DocumentStore) -> Router {
    let item_path = format!("{}/{{id}}", R::PATH);

    Router::new()
        .route(
            R::PATH,
            get(list_documents::<R>).post(create_document::<R>),
        )
        .route(
            &item_path,
            get(get_document::<R>)
                .put(replace_document::<R>)
                .delete(delete_document::<R>),
        )
        .with_state(ResourceService::<R>::new(store))
}

/// Build root and health check routes
pub fn service_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Wrap a router with request tracing
pub fn with_tracing(router: Router) -> Router {
    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn root() -> &'static str {
    "Hello World"
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "temples-api"
    }))
}
