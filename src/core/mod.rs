//! Core module containing the store contract, errors, validation and the
//! generic resource handler

pub mod error;
pub mod resource;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ApiError, FieldError};
pub use resource::{Resource, ResourceMessages};
pub use service::{ResourceService, document_to_json};
pub use store::{
    DeleteOutcome, DocumentCollection, DocumentStore, InsertOutcome, ReplaceOutcome, StoreError,
    StoreResult,
};
