//! # techland-core
//!
//! Core crate for the Techland backend. Contains configuration schemas,
//! the unified error system, and the shared result alias.
//!
//! This crate has **no** internal dependencies on other Techland crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
