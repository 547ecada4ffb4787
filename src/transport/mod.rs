//! Transport layer: query-string and wire-format details (serialization/deserialization).

mod account;
mod envelope;
mod received;
mod scalar;
mod send;

pub use account::{
    decode_balance, decode_number_validity, decode_queued, decode_system_status,
    encode_evaluate_number_query, encode_queued_query,
};
pub use envelope::decode_envelope;
pub use received::{decode_received, encode_received_query};
pub use send::{decode_send_response, encode_send_query};

use crate::domain::{Command, Payload};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object: {raw}")]
    NotAnObject { raw: String },

    #[error("field {field} holds an invalid count: {value}")]
    InvalidCount { field: &'static str, value: i64 },
}

/// Decode a success payload into the shape `command` returns.
pub fn decode_payload(
    command: Command,
    data: &serde_json::Value,
) -> Result<Payload, TransportError> {
    Ok(match command {
        Command::Status => Payload::Status(decode_system_status(data)?),
        Command::EvaluateNumber => Payload::EvaluateNumber(decode_number_validity(data)?),
        Command::Balance => Payload::Balance(decode_balance(data)?),
        Command::Queued => Payload::Queued(decode_queued(data)?),
        Command::Send => Payload::Send(decode_send_response(data)?),
        Command::Received => Payload::Received(decode_received(data)?),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{Balance, SystemStatus};

    #[test]
    fn decode_payload_dispatches_on_command() {
        assert_eq!(
            decode_payload(Command::Status, &json!({ "estado": true })).unwrap(),
            Payload::Status(SystemStatus {
                estado: true,
                mensaje: None
            })
        );
        assert_eq!(
            decode_payload(Command::Balance, &json!({ "mensajes": 10 })).unwrap(),
            Payload::Balance(Balance { mensajes: 10 })
        );
        assert!(matches!(
            decode_payload(Command::Received, &json!([])).unwrap(),
            Payload::Received(messages) if messages.is_empty()
        ));
    }

    #[test]
    fn decode_payload_validates_shape() {
        assert!(decode_payload(Command::Balance, &json!({ "estado": true })).is_err());
        assert!(decode_payload(Command::EvaluateNumber, &json!({ "mensajes": 1 })).is_err());
    }
}
