//! JSON and YAML encoding for protocol shapes
//!
//! Every decode path goes through [`Conformance::check_shape`] first, so input
//! that serde would coerce or reject with a generic message is reported with
//! the failing field path instead.

use serde_json::Value;
use tracing::{debug, warn};

use super::error::{ProtocolError, ProtocolResult};
use super::validator::Conformance;

/// Check an untyped value and convert it into `T`
pub fn from_value<T: Conformance>(value: Value) -> ProtocolResult<T> {
    if let Err(e) = T::check_shape(&value) {
        warn!(shape = T::NAME, field = %e.field_path, "rejected non-conforming input: {}", e);
        return Err(ProtocolError::Validation(e.with_context(T::NAME)));
    }

    let decoded = serde_json::from_value(value)?;
    debug!(shape = T::NAME, "decoded");
    Ok(decoded)
}

/// Decode `T` from a JSON string
pub fn from_json_str<T: Conformance>(input: &str) -> ProtocolResult<T> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Decode `T` from JSON bytes
pub fn from_json_slice<T: Conformance>(input: &[u8]) -> ProtocolResult<T> {
    let value: Value = serde_json::from_slice(input)?;
    from_value(value)
}

/// Decode `T` from a YAML document
pub fn from_yaml_str<T: Conformance>(input: &str) -> ProtocolResult<T> {
    let value: Value = serde_yaml::from_str(input)?;
    from_value(value)
}

/// Run the conformance check on a JSON string without building `T`
pub fn check_json_str<T: Conformance>(input: &str) -> ProtocolResult<()> {
    let value: Value = serde_json::from_str(input)?;
    T::check_shape(&value).map_err(|e| ProtocolError::Validation(e.with_context(T::NAME)))
}

pub fn to_json_value<T: Conformance>(shape: &T) -> ProtocolResult<Value> {
    Ok(serde_json::to_value(shape)?)
}

pub fn to_json_string<T: Conformance>(shape: &T) -> ProtocolResult<String> {
    let json = serde_json::to_string(shape)?;
    debug!(shape = T::NAME, bytes = json.len(), "encoded");
    Ok(json)
}

pub fn to_yaml_string<T: Conformance>(shape: &T) -> ProtocolResult<String> {
    Ok(serde_yaml::to_string(shape)?)
}
