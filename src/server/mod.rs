//! Server module for building the HTTP surface
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for temples and church statistics
//! - Root and health check routes
//! - Any custom routes supplied by the caller

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::CreatedResponse;
pub use router::resource_routes;
