//! Stream message envelope
//!
//! [`StreamMessage`] is the envelope the engine and its clients push through a
//! named channel. The payload in `data` is untyped, and `extra` is an open bag
//! for per-message hints such as a display color or line ending.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::error::ValidationError;

/// Channel used when the caller does not name one
pub const DEFAULT_CHANNEL: &str = "default";

/// Side of the stream that emitted a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamSource {
    Server,
    Client,
}

impl StreamSource {
    /// Every accepted wire literal, in declaration order
    pub const ALL: [&'static str; 2] = ["server", "client"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSource::Server => "server",
            StreamSource::Client => "client",
        }
    }
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server" => Ok(StreamSource::Server),
            "client" => Ok(StreamSource::Client),
            other => Err(ValidationError::invalid_value(
                "source",
                Self::ALL.join(" | "),
                other,
            )),
        }
    }
}

/// One message on a stream channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamMessage {
    /// Message identifier
    pub id: String,

    /// Channel the message belongs to
    pub channel: String,

    /// Emitting side
    pub source: StreamSource,

    /// Untyped payload
    pub data: serde_json::Value,

    /// Open metadata bag
    pub extra: HashMap<String, serde_json::Value>,
}

impl StreamMessage {
    /// Create a message with a fresh UUID v4 identifier and no extras
    pub fn new(
        channel: impl Into<String>,
        source: StreamSource,
        data: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            channel: channel.into(),
            source,
            data: data.into(),
            extra: HashMap::new(),
        }
    }

    /// Server-side message on the default channel
    pub fn server(data: impl Into<serde_json::Value>) -> Self {
        Self::new(DEFAULT_CHANNEL, StreamSource::Server, data)
    }

    /// Client-side message on the default channel
    pub fn client(data: impl Into<serde_json::Value>) -> Self {
        Self::new(DEFAULT_CHANNEL, StreamSource::Client, data)
    }

    /// Replace the generated identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Move the message to another channel
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Insert an extra entry, replacing any previous value under `key`
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn extra_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Extra entry as a string; `None` if missing or not a string
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }

    pub fn is_default_channel(&self) -> bool {
        self.channel == DEFAULT_CHANNEL
    }
}

/// Builder for stream messages with several extras
#[derive(Debug, Clone)]
pub struct StreamMessageBuilder {
    id: Option<String>,
    channel: String,
    source: StreamSource,
    data: serde_json::Value,
    extra: HashMap<String, serde_json::Value>,
}

impl StreamMessageBuilder {
    /// Start a message on the default channel with a null payload
    pub fn new(source: StreamSource) -> Self {
        Self {
            id: None,
            channel: DEFAULT_CHANNEL.to_string(),
            source,
            data: serde_json::Value::Null,
            extra: HashMap::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn data(mut self, data: impl Into<serde_json::Value>) -> Self {
        self.data = data.into();
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the message, generating an identifier if none was set
    pub fn build(self) -> StreamMessage {
        StreamMessage {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            channel: self.channel,
            source: self.source,
            data: self.data,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = StreamMessage::server("a");
        let b = StreamMessage::server("a");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_default_channel() {
        let msg = StreamMessage::client(json!({"text": "hi"}));
        assert!(msg.is_default_channel());
        assert_eq!(msg.source, StreamSource::Client);
        assert!(msg.extra.is_empty());
    }

    #[test]
    fn test_extra_accessors() {
        let msg = StreamMessage::server("What can I do for you?")
            .with_extra("color", "light_blue")
            .with_extra("flush", true);

        assert_eq!(msg.extra_str("color"), Some("light_blue"));
        assert_eq!(msg.extra_str("flush"), None);
        assert_eq!(msg.extra_value("flush"), Some(&json!(true)));
        assert_eq!(msg.extra_value("end"), None);
    }

    #[test]
    fn test_builder() {
        let msg = StreamMessageBuilder::new(StreamSource::Server)
            .id("m1")
            .channel("input_request")
            .data(json!(null))
            .extra("end", "")
            .build();

        assert_eq!(msg.id, "m1");
        assert_eq!(msg.channel, "input_request");
        assert!(msg.data.is_null());
        assert_eq!(msg.extra_str("end"), Some(""));
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!("server".parse::<StreamSource>().unwrap(), StreamSource::Server);
        let err = "peer".parse::<StreamSource>().unwrap_err();
        assert_eq!(err.field_path, "source");
    }
}
