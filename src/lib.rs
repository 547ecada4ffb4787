//! Typed Rust client for the SMSC (smsc.com.ar) HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! query-string and JSON wire-format quirks, and a small client layer running one
//! HTTP POST per command.
//!
//! ```rust,no_run
//! use smsc::SmscClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsc::SmscError> {
//!     let mut client = SmscClient::new("my-alias", "my-api-key");
//!     client.add_recipient("2627", Some("530000"));
//!     client.set_message("hola");
//!     client.set_priority(5)?;
//!     let _resp = client.send().await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SmscClient, SmscClientBuilder, SmscError, decode_payload};
pub use domain::{
    Balance, Command, Credentials, GatewayResponse, LineId, MessageDraft, NumberValidity,
    Payload, Priority, QueuePriority, QueuedMessages, ReceivedMessage, Recipient, SendResponse,
    StatusCode, SystemStatus, ValidationError,
};
