//! Route definitions for the Techland HTTP API.
//!
//! All routes are organized by collection and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(part_routes())
        .merge(review_routes())
        .merge(order_routes())
        .merge(item_routes())
        .merge(payment_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Token issuance
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/token", post(handlers::auth::issue_token))
}

/// User upsert-and-login, listing, and admin management
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{email}", put(handlers::user::upsert_user))
        .route("/users", get(handlers::user::list_users))
        .route("/users/admin/{email}", get(handlers::user::admin_status))
        .route("/users/admin/{email}", put(handlers::user::grant_admin))
}

/// Parts catalog CRUD
fn part_routes() -> Router<AppState> {
    Router::new()
        .route("/parts", get(handlers::part::list_parts))
        .route("/parts", post(handlers::part::create_part))
        .route("/parts/{id}", get(handlers::part::get_part))
        .route("/parts/{id}", put(handlers::part::update_part_quantity))
        .route("/parts/{id}", delete(handlers::part::delete_part))
}

/// Reviews
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(handlers::review::list_reviews))
        .route("/reviews", post(handlers::review::create_review))
}

/// Customer orders
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::order::list_orders))
        .route("/orders", post(handlers::order::create_order))
        .route("/orders/{id}", get(handlers::order::get_order))
        .route("/orders/{id}", patch(handlers::order::pay_order))
        .route("/orders/{id}", delete(handlers::order::delete_order))
}

/// Generic items CRUD
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::item::list_items))
        .route("/items", post(handlers::item::create_item))
        .route("/items/{id}", get(handlers::item::get_item))
        .route("/items/{id}", put(handlers::item::update_item))
        .route("/items/{id}", delete(handlers::item::delete_item))
}

/// Payment intent creation
fn payment_routes() -> Router<AppState> {
    Router::new().route(
        "/payments/intent",
        post(handlers::payment::create_payment_intent),
    )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
