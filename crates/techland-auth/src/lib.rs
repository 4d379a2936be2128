//! # techland-auth
//!
//! The authentication and authorization guard for Techland: signed
//! session-token issuance and verification, self-access authorization,
//! and the admin-role check.
//!
//! All components are constructed from [`techland_core::config::AuthConfig`]
//! at startup; there is no process-global state.

pub mod guard;
pub mod jwt;

pub use guard::{UserDirectory, authorize_self, check_admin};
pub use jwt::claims::Claims;
pub use jwt::decoder::TokenVerifier;
pub use jwt::encoder::{IssuedToken, TokenIssuer};
