//! # gateway-api
//!
//! HTTP API layer for whatsapp-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - WhatsApp webhook handshake and event intake endpoints
//! - Placeholder GraphQL endpoint with a static `hello` field
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness probe |
//! | GET | `/health` | Health check |
//! | GET | `/webhook` | Webhook handshake |
//! | POST | `/webhook` | Webhook event intake |
//! | POST | `/graphql` | GraphQL query execution |

pub mod graphql;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
