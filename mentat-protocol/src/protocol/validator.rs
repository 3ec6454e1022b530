//! Shape conformance checks
//!
//! These run over an untyped [`serde_json::Value`] before it is turned into a
//! typed shape, so a rejection can name the offending field instead of
//! surfacing a bare serde message. Only the first violation is reported.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::stream::{StreamMessage, StreamSource};
use super::types::{Message, MessageContent, MessageSource};

/// Path used for the document root
pub const ROOT_PATH: &str = "$";

/// A protocol shape that can be checked against an untyped value
pub trait Conformance: Serialize + DeserializeOwned {
    /// Shape name used in logs and error context
    const NAME: &'static str;

    /// Check that `value` has every field of this shape with the right type
    fn check_shape(value: &Value) -> Result<(), ValidationError>;
}

impl Conformance for StreamMessage {
    const NAME: &'static str = "StreamMessage";

    fn check_shape(value: &Value) -> Result<(), ValidationError> {
        check_stream_message(value)
    }
}

impl Conformance for MessageContent {
    const NAME: &'static str = "MessageContent";

    fn check_shape(value: &Value) -> Result<(), ValidationError> {
        check_message_content_at(value, "")
    }
}

impl Conformance for Message {
    const NAME: &'static str = "Message";

    fn check_shape(value: &Value) -> Result<(), ValidationError> {
        check_message(value)
    }
}

/// Check a `StreamMessage` shape
pub fn check_stream_message(value: &Value) -> Result<(), ValidationError> {
    let obj = expect_object(value, "")?;

    expect_string(require(obj, "", "id")?, "id")?;
    expect_string(require(obj, "", "channel")?, "channel")?;
    expect_literal(require(obj, "", "source")?, "source", &StreamSource::ALL)?;
    // any value is a valid payload, null included
    require(obj, "", "data")?;
    expect_object(require(obj, "", "extra")?, "extra")?;

    Ok(())
}

/// Check a `Message` shape, including every fragment
pub fn check_message(value: &Value) -> Result<(), ValidationError> {
    let obj = expect_object(value, "")?;

    let content = require(obj, "", "content")?;
    let fragments = content
        .as_array()
        .ok_or_else(|| ValidationError::invalid_type("content", "array", type_name(content)))?;
    for (i, fragment) in fragments.iter().enumerate() {
        check_message_content_at(fragment, &format!("content[{}]", i))?;
    }

    expect_literal(require(obj, "", "source")?, "source", &MessageSource::ALL)?;

    Ok(())
}

/// Check a `MessageContent` shape whose own path is `prefix`
fn check_message_content_at(value: &Value, prefix: &str) -> Result<(), ValidationError> {
    let obj = expect_object(value, prefix)?;

    expect_string(require(obj, prefix, "text")?, &join(prefix, "text"))?;

    match obj.get("color") {
        None | Some(Value::Null) => {}
        Some(color) => {
            expect_string(color, &join(prefix, "color"))?;
        }
    }

    Ok(())
}

/// JSON type name of a value, for error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        ROOT_PATH
    } else {
        path
    }
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    obj.get(key)
        .ok_or_else(|| ValidationError::required(join(prefix, key)))
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::invalid_type(display_path(path), "object", type_name(value))
    })
}

fn expect_string<'a>(value: &'a Value, path: &str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::invalid_type(path, "string", type_name(value)))
}

fn expect_literal(value: &Value, path: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    let literal = expect_string(value, path)?;
    if allowed.contains(&literal) {
        Ok(())
    } else {
        Err(ValidationError::invalid_value(
            path,
            allowed.join(" | "),
            literal,
        ))
    }
}
