//! Payment intent handler.

use axum::Json;
use axum::extract::State;

use techland_core::error::AppError;

use crate::dto::request::CreatePaymentIntentRequest;
use crate::dto::response::PaymentIntentResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/payments/intent
///
/// Creates a payment intent with the configured provider and returns the
/// client secret the browser needs to confirm the payment.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    if req.amount <= 0 {
        return Err(AppError::validation("Amount must be positive"));
    }

    let currency = req
        .currency
        .unwrap_or_else(|| state.config.billing.currency.clone());

    let intent = state
        .payment_provider
        .create_payment_intent(req.amount, &currency)
        .await?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
