//! # WhatsApp Event Payloads
//!
//! Lenient serde model of the WhatsApp Business webhook delivery and the
//! traversal that digs the first text message out of it.
//!
//! Every level of the payload is optional or defaulted: Meta sends many
//! delivery shapes (messages, statuses, account updates) through the same
//! endpoint, and an unexpected shape is never an error — it is simply a
//! delivery with no message to extract.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The `object` value Meta sends for WhatsApp Business Account deliveries
pub const WHATSAPP_BUSINESS_OBJECT: &str = "whatsapp_business_account";

/// Root webhook delivery payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Object type, `"whatsapp_business_account"` for WhatsApp deliveries
    #[serde(default)]
    pub object: Option<String>,
    /// Entries carried by this delivery
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One entry in a delivery, scoped to a business account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    /// Business Account ID
    #[serde(default)]
    pub id: Option<String>,
    /// Changes that occurred on the account
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// A single change notification
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    /// The field that changed (e.g. `"messages"`)
    #[serde(default)]
    pub field: Option<String>,
    /// The data attached to the change
    #[serde(default)]
    pub value: ChangeValue,
}

/// Value object carrying messages and sender metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeValue {
    /// Messaging product, `"whatsapp"` on real deliveries
    #[serde(default)]
    pub messaging_product: Option<String>,
    /// Metadata about the receiving business phone number
    #[serde(default)]
    pub metadata: Option<PhoneMetadata>,
    /// Sender contact cards
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Messages received
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Metadata about the WhatsApp Business phone number
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneMetadata {
    #[serde(default)]
    pub display_phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

/// Contact information for the message sender
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub profile: Option<Profile>,
    /// WhatsApp ID (phone number) of the contact
    #[serde(default)]
    pub wa_id: Option<String>,
}

/// Sender profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
}

/// An inbound message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    /// Sender's WhatsApp ID (phone number)
    #[serde(default)]
    pub from: Option<String>,
    /// Message ID
    #[serde(default)]
    pub id: Option<String>,
    /// Unix-epoch timestamp, as a string
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Message type (text, image, audio, ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Text content, present when the message is a text message
    #[serde(default)]
    pub text: Option<TextContent>,
}

/// Text message content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextContent {
    /// The text body of the message
    #[serde(default)]
    pub body: Option<String>,
}

/// A text message extracted from a delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingText {
    /// Sender's WhatsApp ID
    pub from: String,
    /// Message body
    pub body: String,
    /// When the sender sent the message, if the timestamp parsed
    pub sent_at: Option<DateTime<Utc>>,
}

impl EventPayload {
    /// Parse a delivery from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not even object-shaped (arrays,
    /// scalars). The intake contract treats that as "nothing to extract",
    /// never as an error.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// Whether this delivery belongs to a WhatsApp Business Account
    pub fn is_whatsapp_business(&self) -> bool {
        self.object.as_deref() == Some(WHATSAPP_BUSINESS_OBJECT)
    }

    /// Walk `entry[0].changes[0].value.messages[0]` and return the first
    /// text message, if the full path resolves.
    ///
    /// Each step is a fallible lookup that short-circuits to `None`; a
    /// partially-absent path is a normal delivery shape, not an error.
    pub fn first_text_message(&self) -> Option<IncomingText> {
        let message = self
            .entry
            .first()?
            .changes
            .first()?
            .value
            .messages
            .first()?;
        let from = message.from.clone()?;
        let body = message.text.as_ref()?.body.clone()?;

        Some(IncomingText {
            from,
            body,
            sent_at: message.sent_at(),
        })
    }
}

impl Message {
    /// Parse the epoch-seconds timestamp string, if present and well-formed
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.as_deref()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}
