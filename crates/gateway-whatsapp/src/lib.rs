//! # gateway-whatsapp
//!
//! WhatsApp webhook handshake and event dispatch for whatsapp-gateway-rs.
//!
//! This crate provides:
//! - `verify_subscription` implementing Meta's handshake contract
//! - `WhatsAppConfig` for the environment-provided verify token
//! - `EventHandler` trait and `dispatch_event` for consuming deliveries

pub mod config;
pub mod handler;
pub mod verify;

// Re-exports for convenience
pub use config::WhatsAppConfig;
pub use handler::{dispatch_event, EventHandler, LoggingEventHandler};
pub use verify::{verify_subscription, VerifyParams, SUBSCRIBE_MODE};
