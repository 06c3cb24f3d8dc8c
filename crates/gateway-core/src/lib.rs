//! # gateway-core
//!
//! Core types for the whatsapp-gateway-rs webhook gateway.
//!
//! This crate provides:
//! - `EventPayload` and friends for the WhatsApp webhook delivery shape
//! - `IncomingText` for extracted text messages
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gateway_core::EventPayload;
//!
//! // Parse whatever JSON the provider delivered
//! let payload = EventPayload::from_value(body)?;
//!
//! // Pull out the first text message, if the delivery carries one
//! if let Some(msg) = payload.first_text_message() {
//!     println!("Message from {}: {}", msg.from, msg.body);
//! }
//! ```

pub mod error;
pub mod event;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use event::{
    Change, ChangeValue, Contact, Entry, EventPayload, IncomingText, Message, PhoneMetadata,
    Profile, TextContent, WHATSAPP_BUSINESS_OBJECT,
};
