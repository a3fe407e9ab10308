//! # Temples API
//!
//! A small REST service exposing CRUD endpoints for two document
//! collections: temples and per-country church statistics.
//!
//! ## Features
//!
//! - **Declarative Validation**: Per-field rules with filters, evaluated before any handler runs
//! - **Generic Resource Handler**: One set of handlers, instantiated per resource
//! - **Pluggable Storage**: MongoDB in production, an in-memory store for tests
//! - **Consistent Errors**: Every failure maps to a fixed status and JSON body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use temples::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, FieldError},
        resource::{Resource, ResourceMessages},
        service::ResourceService,
        store::{DocumentCollection, DocumentStore, StoreError, StoreResult},
        validation::{Presence, ValidId, ValidatedJson, ValidatedPayload, ValidationConfig},
    };

    // === Resources ===
    pub use crate::entities::{ChurchStats, Temples};

    // === Storage ===
    pub use crate::storage::{InMemoryStore, MongoStore};

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
