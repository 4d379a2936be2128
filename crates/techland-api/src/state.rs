//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use techland_auth::{TokenIssuer, TokenVerifier};
use techland_billing::PaymentProvider;
use techland_core::config::AppConfig;
use techland_database::repositories::item::ItemRepository;
use techland_database::repositories::order::OrderRepository;
use techland_database::repositories::part::PartRepository;
use techland_database::repositories::review::ReviewRepository;
use techland_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Session token issuer.
    pub token_issuer: Arc<TokenIssuer>,
    /// Session token verifier.
    pub token_verifier: Arc<TokenVerifier>,

    /// Payment provider gateway.
    pub payment_provider: Arc<dyn PaymentProvider>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Part repository.
    pub part_repo: Arc<PartRepository>,
    /// Review repository.
    pub review_repo: Arc<ReviewRepository>,
    /// Order repository.
    pub order_repo: Arc<OrderRepository>,
    /// Item repository.
    pub item_repo: Arc<ItemRepository>,

    /// Server start time, for uptime reporting.
    pub started_at: DateTime<Utc>,
}
