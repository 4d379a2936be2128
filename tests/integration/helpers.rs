//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use techland_api::state::AppState;
use techland_core::config::AppConfig;

/// Secret used to sign tokens in every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with a lazily-connected pool.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let db_pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("Failed to create lazy pool");

        let state = AppState {
            config: Arc::new(config.clone()),
            token_issuer: Arc::new(techland_auth::TokenIssuer::new(&config.auth)),
            token_verifier: Arc::new(techland_auth::TokenVerifier::new(&config.auth)),
            payment_provider: techland_billing::from_config(&config.billing)
                .expect("Failed to build mock payment provider"),
            user_repo: Arc::new(techland_database::repositories::user::UserRepository::new(
                db_pool.clone(),
            )),
            part_repo: Arc::new(techland_database::repositories::part::PartRepository::new(
                db_pool.clone(),
            )),
            review_repo: Arc::new(
                techland_database::repositories::review::ReviewRepository::new(db_pool.clone()),
            ),
            order_repo: Arc::new(
                techland_database::repositories::order::OrderRepository::new(db_pool.clone()),
            ),
            item_repo: Arc::new(techland_database::repositories::item::ItemRepository::new(
                db_pool,
            )),
            started_at: chrono::Utc::now(),
        };

        Self {
            router: techland_api::router::build_router(state),
            config,
        }
    }

    /// Issue a valid login token for the given email.
    pub fn issue_token(&self, email: &str) -> String {
        let issuer = techland_auth::TokenIssuer::new(&self.config.auth);
        issuer
            .issue_login_token(email, Default::default())
            .expect("Failed to issue token")
            .token
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Make a request with a raw `Authorization` header value.
    pub async fn request_with_raw_auth(
        &self,
        method: &str,
        path: &str,
        auth_header: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", auth_header)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
