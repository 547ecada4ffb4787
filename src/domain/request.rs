use crate::domain::validation::ValidationError;
use crate::domain::value::{LineId, Priority, Recipient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Gateway operation selector (`cmd`).
pub enum Command {
    /// `estado`: system status, whether deliveries are delayed.
    Status,
    /// `evalnumero`: ask the gateway whether a number is valid.
    EvaluateNumber,
    /// `saldo`: remaining message credits.
    Balance,
    /// `encolados`: messages waiting in the outbound queue.
    Queued,
    /// `enviar`: send a message.
    Send,
    /// `recibidos`: latest inbound messages.
    Received,
}

impl Command {
    /// Query parameter name used by SMSC (`cmd`).
    pub const FIELD: &'static str = "cmd";

    /// Wire name of the command.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "estado",
            Self::EvaluateNumber => "evalnumero",
            Self::Balance => "saldo",
            Self::Queued => "encolados",
            Self::Send => "enviar",
            Self::Received => "recibidos",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameter name for the message body (`msj`).
pub const MESSAGE_FIELD: &str = "msj";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outbound message being assembled before an `enviar` call.
///
/// Nothing is validated here: an empty draft is still sent (with empty `num` and
/// `msj` parameters) and the gateway reports what it thinks of it. Sending does not
/// clear the draft; call [`MessageDraft::clear`] to start over.
pub struct MessageDraft {
    recipients: Vec<Recipient>,
    message: String,
    line: Option<LineId>,
    priority: Option<Priority>,
}

impl MessageDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipient: `area` alone, or `area-local` when `local` is given.
    pub fn add_recipient(&mut self, area: impl Into<String>, local: Option<&str>) {
        self.recipients.push(Recipient::new(area, local));
    }

    /// Append an already built recipient.
    pub fn push_recipient(&mut self, recipient: Recipient) {
        self.recipients.push(recipient);
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    /// Set the dedicated line; `0` removes it.
    pub fn set_line(&mut self, line: u32) {
        self.line = LineId::new(line);
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Set the delivery priority (`1..=7`); `0` removes it.
    pub fn set_priority(&mut self, priority: u8) -> Result<(), ValidationError> {
        self.priority = match priority {
            0 => None,
            value => Some(Priority::new(value)?),
        };
        Ok(())
    }

    /// Reset recipients, message, line and priority.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
