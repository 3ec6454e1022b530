//! Chat message types
//!
//! A [`Message`] is what the user and mentat say to each other. Its body is an
//! ordered list of [`MessageContent`] fragments, each carrying a piece of text
//! and an optional display color. Fragment order is rendering order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Author role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSource {
    /// Typed by the user
    User,
    /// Produced by mentat
    Mentat,
}

impl MessageSource {
    /// Every accepted wire literal, in declaration order
    pub const ALL: [&'static str; 2] = ["user", "mentat"];

    /// Wire literal for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSource::User => "user",
            MessageSource::Mentat => "mentat",
        }
    }
}

impl fmt::Display for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageSource::User),
            "mentat" => Ok(MessageSource::Mentat),
            other => Err(ValidationError::invalid_value(
                "source",
                Self::ALL.join(" | "),
                other,
            )),
        }
    }
}

/// One styled text fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Literal text of the fragment
    pub text: String,

    /// Display color; `None` means the renderer's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A complete chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Fragments in rendering order
    pub content: Vec<MessageContent>,

    /// Who wrote the message
    pub source: MessageSource,
}

impl MessageContent {
    /// Create an uncolored fragment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Create a colored fragment
    pub fn colored(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(text).with_color(color)
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::new(text)
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::new(text)
    }
}

// ============================================================================
// Builder and convenience traits
// ============================================================================

/// Trait for converting types into messages
pub trait IntoMessage {
    /// Convert self into a Message
    fn into_message(self) -> Message;
}

impl IntoMessage for Message {
    fn into_message(self) -> Message {
        self
    }
}

impl IntoMessage for String {
    fn into_message(self) -> Message {
        Message::user(self)
    }
}

impl IntoMessage for &str {
    fn into_message(self) -> Message {
        Message::user(self)
    }
}

/// Builder for multi-fragment messages
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    source: MessageSource,
    content: Vec<MessageContent>,
}

impl MessageBuilder {
    /// Start an empty message from the given source
    pub fn new(source: MessageSource) -> Self {
        Self {
            source,
            content: Vec::new(),
        }
    }

    /// Append a fragment
    pub fn fragment(mut self, fragment: impl Into<MessageContent>) -> Self {
        self.content.push(fragment.into());
        self
    }

    /// Append an uncolored fragment
    pub fn text(self, text: impl Into<String>) -> Self {
        self.fragment(MessageContent::new(text))
    }

    /// Append a colored fragment
    pub fn colored(self, text: impl Into<String>, color: impl Into<String>) -> Self {
        self.fragment(MessageContent::colored(text, color))
    }

    /// Build the message
    pub fn build(self) -> Message {
        Message {
            content: self.content,
            source: self.source,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl Message {
    pub fn new(source: MessageSource, content: Vec<MessageContent>) -> Self {
        Self { content, source }
    }

    /// Create a single-fragment user message
    pub fn user(text: impl Into<String>) -> Self {
        MessageBuilder::new(MessageSource::User).text(text).build()
    }

    /// Create a single-fragment mentat message
    pub fn mentat(text: impl Into<String>) -> Self {
        MessageBuilder::new(MessageSource::Mentat).text(text).build()
    }

    /// Plain text of all fragments, concatenated in order
    pub fn text(&self) -> String {
        self.content.iter().map(|c| c.text.as_str()).collect()
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// True when the message has no fragments
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
