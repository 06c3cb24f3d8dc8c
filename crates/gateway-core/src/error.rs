//! # Gateway Error Types
//!
//! Typed error handling for the webhook gateway.
//! The taxonomy is deliberately small: the verification handshake is the
//! only surface that ever signals failure to a caller.

use thiserror::Error;

/// Core error type for gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Handshake request missing `hub.mode` or `hub.verify_token`
    #[error("Missing verification parameters")]
    MissingParameters,

    /// Handshake mode/token present but did not match the configured secret
    #[error("Verification token mismatch")]
    TokenMismatch,
}

impl GatewayError {
    /// Returns the HTTP status code appropriate for this error
    ///
    /// Meta's handshake protocol expects 404 for missing parameters and
    /// 403 for a rejected subscription attempt.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::MissingParameters => 404,
            GatewayError::TokenMismatch => 403,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::MissingParameters.status_code(), 404);
        assert_eq!(GatewayError::TokenMismatch.status_code(), 403);
        assert_eq!(
            GatewayError::Configuration("VERIFY_TOKEN not set".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GatewayError::MissingParameters.to_string(),
            "Missing verification parameters"
        );
        assert_eq!(
            GatewayError::TokenMismatch.to_string(),
            "Verification token mismatch"
        );
    }
}
