//! Tests for the stream envelope

use std::collections::HashSet;

use mentat_protocol::protocol::codec::{
    check_json_str, from_json_slice, from_json_str, to_json_string, to_json_value,
};
use mentat_protocol::protocol::*;
use serde_json::json;

#[test]
fn test_accepts_client_message() {
    let input = r#"{ "id": "m1", "channel": "chat", "source": "client", "data": {"text": "hi"}, "extra": {} }"#;
    let msg: StreamMessage = from_json_str(input).unwrap();

    assert_eq!(msg.id, "m1");
    assert_eq!(msg.channel, "chat");
    assert_eq!(msg.source, StreamSource::Client);
    assert_eq!(msg.data, json!({"text": "hi"}));
    assert!(msg.extra.is_empty());
}

#[test]
fn test_rejects_unknown_source() {
    let input = r#"{ "id": "m1", "channel": "chat", "source": "peer", "data": null, "extra": {} }"#;
    let err = from_json_str::<StreamMessage>(input).unwrap_err();

    let validation = err.as_validation().unwrap();
    assert_eq!(validation.field_path, "source");
    assert!(check_json_str::<StreamMessage>(input).is_err());
}

#[test]
fn test_null_data_is_valid() {
    let input = r#"{"id":"m2","channel":"default","source":"server","data":null,"extra":{}}"#;
    let msg: StreamMessage = from_json_slice(input.as_bytes()).unwrap();
    assert!(msg.data.is_null());
}

#[test]
fn test_field_names_on_the_wire() {
    let msg = StreamMessage::server("Loading...")
        .with_id("m3")
        .with_extra("color", "cyan");

    let value = to_json_value(&msg).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "m3",
            "channel": "default",
            "source": "server",
            "data": "Loading...",
            "extra": {"color": "cyan"}
        })
    );
}

#[test]
fn test_empty_extra_is_serialized() {
    let msg = StreamMessage::client(json!(null)).with_id("m4");
    let json = to_json_string(&msg).unwrap();
    assert!(json.contains("\"extra\":{}"));
}

#[test]
fn test_extra_preserves_unknown_keys() {
    let msg = StreamMessage::server(json!([1, 2, 3]))
        .with_extra("end", "")
        .with_extra("flush", true)
        .with_extra("nested", json!({"a": [null, {"b": 1.5}]}))
        .with_extra("", "empty key");

    let json = to_json_string(&msg).unwrap();
    let parsed: StreamMessage = from_json_str(&json).unwrap();

    assert_eq!(parsed, msg);
    assert_eq!(parsed.extra_value("nested"), Some(&json!({"a": [null, {"b": 1.5}]})));
    assert_eq!(parsed.extra_str(""), Some("empty key"));
}

#[test]
fn test_ids_are_distinct() {
    let ids: HashSet<String> = (0..100).map(|_| StreamMessage::server("x").id).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_unknown_top_level_keys_are_dropped() {
    let input = r#"{"id":"m5","channel":"c","source":"client","data":1,"extra":{},"ts":42}"#;
    let msg: StreamMessage = from_json_str(input).unwrap();
    let value = to_json_value(&msg).unwrap();
    assert!(value.get("ts").is_none());
}
