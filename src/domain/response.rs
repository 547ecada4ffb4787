use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq)]
/// Envelope SMSC wraps around every reply.
pub struct GatewayResponse {
    pub code: StatusCode,
    pub message: String,
    pub data: serde_json::Value,
}

impl GatewayResponse {
    /// Command payload, opaque until decoded for a specific command.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStatus {
    /// `true` when messages are delivered without delay.
    pub estado: bool,
    pub mensaje: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberValidity {
    pub estado: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// Remaining message credits.
    pub mensajes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedMessages {
    pub mensajes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendResponse {
    pub id: Option<String>,
    pub sms: Option<u64>,
    /// Full payload as returned by SMSC.
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub id: String,
    pub fecha: Option<String>,
    pub celular: Option<String>,
    pub mensaje: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
/// Decoded payload, one shape per [`Command`](crate::domain::Command).
pub enum Payload {
    Status(SystemStatus),
    EvaluateNumber(NumberValidity),
    Balance(Balance),
    Queued(QueuedMessages),
    Send(SendResponse),
    Received(Vec<ReceivedMessage>),
}
