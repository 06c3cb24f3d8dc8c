//! # WhatsApp Configuration
//!
//! Configuration management for the WhatsApp webhook integration.
//! The verify token is loaded from the environment once at startup and
//! injected into the handlers; it is never read ad hoc per request.

use gateway_core::GatewayError;
use std::env;

/// WhatsApp webhook configuration
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Shared secret compared against `hub.verify_token` during the handshake
    verify_token: String,
}

impl WhatsAppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `VERIFY_TOKEN`
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let verify_token = env::var("VERIFY_TOKEN")
            .map_err(|_| GatewayError::Configuration("VERIFY_TOKEN not set".to_string()))?;

        if verify_token.is_empty() {
            return Err(GatewayError::Configuration(
                "VERIFY_TOKEN must not be empty".to_string(),
            ));
        }

        Ok(Self { verify_token })
    }

    /// Create config with an explicit token (for testing)
    pub fn new(verify_token: impl Into<String>) -> Self {
        Self {
            verify_token: verify_token.into(),
        }
    }

    /// The configured handshake secret
    pub fn verify_token(&self) -> &str {
        &self.verify_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token() {
        let config = WhatsAppConfig::new("s3cret");
        assert_eq!(config.verify_token(), "s3cret");
    }

    #[test]
    fn test_from_env_missing_token() {
        env::remove_var("VERIFY_TOKEN");

        let result = WhatsAppConfig::from_env();
        assert!(result.is_err());
    }
}
