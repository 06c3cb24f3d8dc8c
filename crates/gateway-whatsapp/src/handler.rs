//! # Event Dispatch
//!
//! Seam between the HTTP intake endpoint and whatever consumes deliveries.
//! The gateway only logs today, but the trait lets alternate sinks plug in
//! without touching the HTTP layer. Handler errors are reported by the
//! caller and never change the 200 acknowledgement the provider expects.

use gateway_core::{EventPayload, GatewayResult, IncomingText};
use tracing::{debug, info};

/// Webhook delivery handler trait
///
/// Implement this trait to consume WhatsApp deliveries.
#[allow(unused_variables)]
pub trait EventHandler: Send + Sync {
    /// Called for the first text message in a WhatsApp delivery
    fn on_text_message(&self, message: &IncomingText) -> GatewayResult<()> {
        info!("Message from {}: {}", message.from, message.body);
        Ok(())
    }

    /// Called for WhatsApp deliveries carrying no extractable text message
    /// (status updates, media, empty entries)
    fn on_empty_delivery(&self, payload: &EventPayload) -> GatewayResult<()> {
        debug!("WhatsApp delivery with no text message, skipping");
        Ok(())
    }

    /// Called for deliveries whose `object` is not a WhatsApp Business
    /// Account
    fn on_unknown_object(&self, payload: &EventPayload) -> GatewayResult<()> {
        debug!(object = ?payload.object, "Ignoring non-WhatsApp delivery");
        Ok(())
    }
}

/// Default handler that just logs deliveries
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {}

/// Dispatch a parsed delivery to the appropriate handler method
pub fn dispatch_event(handler: &dyn EventHandler, payload: &EventPayload) -> GatewayResult<()> {
    if !payload.is_whatsapp_business() {
        return handler.on_unknown_object(payload);
    }

    match payload.first_text_message() {
        Some(message) => handler.on_text_message(&message),
        None => handler.on_empty_delivery(payload),
    }
}
