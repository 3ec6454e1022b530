//! Shared message schema
//!
//! This module defines the data shapes exchanged between the mentat engine and
//! its clients:
//! - [`StreamMessage`]: envelope for anything sent over a stream channel
//! - [`Message`] and [`MessageContent`]: chat messages made of styled fragments
//!
//! The shapes carry no transport. [`codec`] handles JSON/YAML and runs the
//! conformance checks from [`validator`] on every decode.

pub mod codec;
pub mod error;
pub mod stream;
pub mod types;
pub mod validator;

pub use error::{ProtocolError, ProtocolResult, ValidationError, ValidationErrorKind};
pub use stream::{StreamMessage, StreamMessageBuilder, StreamSource, DEFAULT_CHANNEL};
pub use types::{Message, MessageContent, MessageSource};
pub use validator::Conformance;

// Re-export common traits for convenience
pub use types::{IntoMessage, MessageBuilder};
