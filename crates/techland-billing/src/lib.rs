//! # techland-billing
//!
//! Payment-provider integration for Techland. The API layer depends only
//! on the [`PaymentProvider`] trait; concrete gateways are selected from
//! configuration at startup:
//!
//! - `stripe` — the Stripe payment-intents HTTP API
//! - `mock` — synthetic intents for development and tests

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use techland_core::config::BillingConfig;
use techland_core::error::AppError;

/// Payment provider errors.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Payment provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Provider(msg) => AppError::external_service(msg),
            BillingError::Config(msg) => AppError::configuration(msg),
        }
    }
}

/// A created payment intent.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Provider-side intent identifier.
    pub intent_id: String,
    /// Client secret handed to the browser to confirm the payment.
    pub client_secret: String,
}

/// Payment provider seam for dependency injection.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent for the given amount in minor currency
    /// units (e.g. cents).
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, BillingError>;
}

/// Build the configured payment provider.
pub fn from_config(config: &BillingConfig) -> Result<Arc<dyn PaymentProvider>, BillingError> {
    match config.provider.as_str() {
        "stripe" => {
            if config.secret_key.is_empty() {
                return Err(BillingError::Config(
                    "billing.secret_key is required for the stripe provider".into(),
                ));
            }
            Ok(Arc::new(StripeGateway::new(config.secret_key.clone())))
        }
        "mock" => Ok(Arc::new(MockGateway)),
        other => Err(BillingError::Config(format!(
            "Unknown billing provider '{other}'. Expected one of: stripe, mock"
        ))),
    }
}

/// Stripe payment-intents gateway.
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
}

/// The subset of Stripe's payment-intent response we consume.
#[derive(Debug, Deserialize)]
struct StripeIntentResponse {
    id: String,
    client_secret: String,
}

impl StripeGateway {
    const ENDPOINT: &'static str = "https://api.stripe.com/v1/payment_intents";

    /// Create a new gateway with the given API secret key.
    pub fn new(secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, BillingError> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(Self::ENDPOINT)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| BillingError::Provider(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Payment intent creation failed");
            return Err(BillingError::Provider(format!(
                "Payment provider returned status {status}"
            )));
        }

        let intent: StripeIntentResponse = response
            .json()
            .await
            .map_err(|e| BillingError::Provider(format!("Malformed provider response: {e}")))?;

        tracing::info!(intent_id = %intent.id, amount_minor, currency, "Payment intent created");

        Ok(PaymentIntent {
            intent_id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

/// Mock payment gateway for development and testing.
pub struct MockGateway;

#[async_trait]
impl PaymentProvider for MockGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, BillingError> {
        let intent_id = format!("pi_mock_{}", uuid::Uuid::new_v4().simple());
        let client_secret = format!("{intent_id}_secret_{}", uuid::Uuid::new_v4().simple());

        tracing::info!(intent_id = %intent_id, amount_minor, currency, "Mock payment intent created");

        Ok(PaymentIntent {
            intent_id,
            client_secret,
        })
    }
}
