//! # Request Handlers
//!
//! Axum request handlers for the webhook gateway.
//! The handshake endpoint is the only one that ever signals failure; the
//! intake endpoint acknowledges every delivery with 200 so the provider
//! never enters its retry/backoff storm.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gateway_core::{EventPayload, GatewayError};
use gateway_whatsapp::{dispatch_event, verify_subscription, LoggingEventHandler, VerifyParams};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

fn gateway_error_to_status(err: &GatewayError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness probe at the root path
pub async fn liveness() -> impl IntoResponse {
    "WhatsApp webhook gateway is alive"
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "whatsapp-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Webhook handshake endpoint (GET /webhook)
///
/// Responds 200 with the challenge echoed verbatim when `hub.mode` is
/// `subscribe` and `hub.verify_token` matches the configured secret.
/// Error responses carry empty bodies, per the provider's contract:
/// 404 when parameters are missing, 403 on a mismatch.
#[instrument(skip(state, params))]
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<String, StatusCode> {
    match verify_subscription(&params, state.whatsapp.verify_token()) {
        Ok(challenge) => {
            info!("Webhook verified, echoing challenge");
            Ok(challenge)
        }
        Err(e) => {
            warn!("Webhook verification rejected: {}", e);
            Err(gateway_error_to_status(&e))
        }
    }
}

/// Webhook intake endpoint (POST /webhook)
///
/// Always acknowledges with 200 and an empty body, whatever the payload
/// shape. The whole delivery is logged pretty-printed, and WhatsApp text
/// messages are extracted and dispatched to the logging handler. A payload
/// the extraction cannot make sense of is not an error, just a delivery
/// with nothing to log.
#[instrument(skip(payload), fields(delivery_id = %Uuid::new_v4()))]
pub async fn receive_event(Json(payload): Json<serde_json::Value>) -> StatusCode {
    let pretty = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    info!("Incoming webhook event:\n{}", pretty);

    if let Some(event) = EventPayload::from_value(payload) {
        let handler = LoggingEventHandler;
        if let Err(e) = dispatch_event(&handler, &event) {
            // The provider only cares that we acknowledged; handler
            // failures stay on our side of the fence.
            error!("Failed to process webhook event: {}", e);
        }
    }

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            gateway_error_to_status(&GatewayError::MissingParameters),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            gateway_error_to_status(&GatewayError::TokenMismatch),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            gateway_error_to_status(&GatewayError::Configuration("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
