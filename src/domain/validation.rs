use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    PriorityOutOfRange { min: u8, max: u8, actual: u8 },
    QueuePriorityOutOfRange { actual: u8 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorityOutOfRange { min, max, actual } => {
                write!(f, "priority out of range: {actual} (expected {min}..={max})")
            }
            Self::QueuePriorityOutOfRange { actual } => {
                write!(f, "queue priority out of range: {actual} (expected 0..=3)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::PriorityOutOfRange {
            min: 1,
            max: 7,
            actual: 9,
        };
        assert_eq!(err.to_string(), "priority out of range: 9 (expected 1..=7)");

        let err = ValidationError::QueuePriorityOutOfRange { actual: 5 };
        assert_eq!(
            err.to_string(),
            "queue priority out of range: 5 (expected 0..=3)"
        );
    }
}
