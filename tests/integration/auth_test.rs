//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_issue_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/token",
            Some(serde_json::json!({
                "email": "a@x.com",
                "name": "Ada",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body.get("accessToken").unwrap().as_str().unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_issue_token_requires_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/token",
            Some(serde_json::json!({"name": "Ada"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "UNAUTHORIZED"
    );
}

#[tokio::test]
async fn test_malformed_header_is_forbidden() {
    let app = TestApp::new();

    let response = app
        .request_with_raw_auth("GET", "/api/users", "token-without-scheme")
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/users", None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "FORBIDDEN"
    );
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = TestApp::new();

    let issuer = techland_auth::TokenIssuer::new(&app.config.auth);
    let expired = issuer
        .issue("a@x.com", Default::default(), chrono::Duration::seconds(-600))
        .unwrap();

    let response = app
        .request("GET", "/api/users", None, Some(&expired.token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_wrong_secret_token_is_forbidden() {
    let app = TestApp::new();

    let mut other_auth = app.config.auth.clone();
    other_auth.jwt_secret = "a-different-secret".to_string();
    let foreign = techland_auth::TokenIssuer::new(&other_auth)
        .issue_login_token("a@x.com", Default::default())
        .unwrap();

    let response = app
        .request("GET", "/api/users", None, Some(&foreign.token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_orders_email_mismatch_is_forbidden() {
    let app = TestApp::new();
    let token = app.issue_token("a@x.com");

    let response = app
        .request("GET", "/api/orders?email=b@x.com", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_order_email_mismatch_is_forbidden() {
    let app = TestApp::new();
    let token = app.issue_token("a@x.com");

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(serde_json::json!({
                "email": "b@x.com",
                "part_id": null,
                "part_name": "GTX Motherboard",
                "quantity": 2,
                "unit_price_cents": 19900,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
