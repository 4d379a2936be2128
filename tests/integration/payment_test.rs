//! Integration tests for payment intent creation (mock provider).

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_payment_intent() {
    let app = TestApp::new();
    let token = app.issue_token("a@x.com");

    let response = app
        .request(
            "POST",
            "/api/payments/intent",
            Some(serde_json::json!({"amount": 4200})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let secret = response.body.get("clientSecret").unwrap().as_str().unwrap();
    assert!(secret.contains("_secret_"));
}

#[tokio::test]
async fn test_payment_intent_requires_auth() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/payments/intent",
            Some(serde_json::json!({"amount": 4200})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_payment_intent_rejects_nonpositive_amount() {
    let app = TestApp::new();
    let token = app.issue_token("a@x.com");

    let response = app
        .request(
            "POST",
            "/api/payments/intent",
            Some(serde_json::json!({"amount": 0})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
