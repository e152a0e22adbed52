//! Message content parts

use serde::{Deserialize, Serialize};

/// Discriminator carried by every [`TextPart`]
///
/// A single-value enum so that serde rejects any `type` other than `"text"`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TextKind {
    #[default]
    #[serde(rename = "text")]
    Text,
}

/// Plain text content
///
/// Serializes as `{"type": "text", "text": "..."}`. The `type` field may be
/// omitted on input and defaults to `"text"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TextPart {
    #[serde(rename = "type", default)]
    kind: TextKind,

    /// The text content
    pub text: String,
}

impl TextPart {
    /// Discriminator value of text parts on the wire
    pub const KIND: &'static str = "text";

    /// Create a text part
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Text,
            text: text.into(),
        }
    }

    /// The fixed discriminator, always `"text"`
    pub fn kind(&self) -> &'static str {
        match self.kind {
            TextKind::Text => Self::KIND,
        }
    }
}

/// A content unit within a message
///
/// Only text is defined today. New kinds are added as variants, each carrying
/// its own `type` discriminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    /// Discriminator of the wrapped part
    pub fn kind(&self) -> &'static str {
        match self {
            Part::Text(part) => part.kind(),
        }
    }

    /// Text payload, if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(part) => Some(&part.text),
        }
    }
}

impl From<TextPart> for Part {
    fn from(part: TextPart) -> Self {
        Part::Text(part)
    }
}
