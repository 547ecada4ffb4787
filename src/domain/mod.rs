//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Command, MESSAGE_FIELD, MessageDraft};
pub use response::{
    Balance, GatewayResponse, NumberValidity, Payload, QueuedMessages, ReceivedMessage,
    SendResponse, SystemStatus,
};
pub use validation::ValidationError;
pub use value::{Credentials, LineId, Priority, QueuePriority, Recipient, StatusCode};
