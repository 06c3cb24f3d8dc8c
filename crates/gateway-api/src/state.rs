//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the listener configuration, the WhatsApp verify token and the
//! GraphQL schema. Everything here is read-only once the server starts.

use crate::graphql::{self, GatewaySchema};
use gateway_whatsapp::WhatsAppConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Listener configuration
    pub config: AppConfig,
    /// WhatsApp webhook configuration (verify token)
    pub whatsapp: WhatsAppConfig,
    /// GraphQL schema
    pub schema: GatewaySchema,
}

impl AppState {
    /// Create a new AppState from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let whatsapp = WhatsAppConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load WhatsApp config: {}", e))?;

        Ok(Self {
            config,
            whatsapp,
            schema: graphql::create_schema(),
        })
    }

    /// Create an AppState with explicit configs (for testing)
    pub fn with_config(config: AppConfig, whatsapp: WhatsAppConfig) -> Self {
        Self {
            config,
            whatsapp,
            schema: graphql::create_schema(),
        }
    }
}
