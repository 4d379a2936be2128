//! Integration tests for the Techland HTTP API.
//!
//! These tests drive the real router through `tower::ServiceExt::oneshot`.
//! The connection pool is created lazily and no test reaches the database:
//! everything exercised here (token issuance, guard rejections, payment
//! intents via the mock provider, health) completes before any query runs.

mod helpers;

mod auth_test;
mod health_test;
mod payment_test;
