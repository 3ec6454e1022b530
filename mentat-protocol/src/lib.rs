//! Mentat Protocol
//!
//! Message shapes shared by the mentat engine and the clients that talk to it.

pub mod protocol;

pub use protocol::{
    IntoMessage, Message, MessageBuilder, MessageContent, MessageSource, ProtocolError,
    ProtocolResult, StreamMessage, StreamMessageBuilder, StreamSource, ValidationError,
};

/// Returns the version of the protocol crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
