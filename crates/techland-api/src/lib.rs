//! # techland-api
//!
//! HTTP API layer for Techland: the Axum router, shared application
//! state, the authentication extractor, middleware, handlers, and DTOs.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
