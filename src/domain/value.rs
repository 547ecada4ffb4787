use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq)]
/// SMSC credential pair, sent verbatim as the `alias` and `apikey` query parameters.
///
/// No validation is performed. `Debug` output hides the API key.
pub struct Credentials {
    alias: String,
    api_key: String,
}

impl Credentials {
    /// Query parameter name for the alias (`alias`).
    pub const ALIAS_FIELD: &'static str = "alias";
    /// Query parameter name for the API key (`apikey`).
    pub const API_KEY_FIELD: &'static str = "apikey";

    /// Create a credential pair.
    pub fn new(alias: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            api_key: api_key.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub(crate) fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Self::ALIAS_FIELD.to_owned(), self.alias.clone()));
        params.push((Self::API_KEY_FIELD.to_owned(), self.api_key.clone()));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("alias", &self.alias)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to SMSC (`num`).
///
/// SMSC accepts either a combined number (`2627530000`) or an area code and a local
/// number joined with a dash (`2627-530000`). No validation or normalization is
/// performed; use [`SmscClient::evaluate_number`](crate::SmscClient::evaluate_number)
/// to ask the gateway whether a number is valid.
pub struct Recipient(String);

impl Recipient {
    /// Query parameter name used by SMSC (`num`).
    pub const FIELD: &'static str = "num";

    /// Build a recipient from an area code and an optional local number.
    ///
    /// Without `local`, `area` is taken as the whole number.
    pub fn new(area: impl Into<String>, local: Option<&str>) -> Self {
        let area = area.into();
        match local {
            Some(local) => Self(format!("{area}-{local}")),
            None => Self(area),
        }
    }

    /// Value as sent to SMSC.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Dedicated line identifier (`line`), only meaningful for accounts with reserved
/// origination numbers.
///
/// Invariant: positive.
pub struct LineId(u32);

impl LineId {
    /// Query parameter name used by SMSC (`line`).
    pub const FIELD: &'static str = "line";

    /// Wrap a line id. Zero means "no dedicated line" and yields `None`.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Delivery priority for an outbound message (`priority`).
///
/// Invariant: `1..=7`, 1 being the lowest.
pub struct Priority(u8);

impl Priority {
    /// Query parameter name used by SMSC (`priority`).
    pub const FIELD: &'static str = "priority";

    /// Lowest priority.
    pub const MIN: u8 = 1;
    /// Highest priority.
    pub const MAX: u8 = 7;

    /// Create a validated priority.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::PriorityOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying level.
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Priority filter for the `encolados` (queued messages) command.
pub enum QueuePriority {
    /// Every queued message regardless of priority.
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl QueuePriority {
    /// Query parameter name used by SMSC (`prioridad`).
    pub const FIELD: &'static str = "prioridad";

    /// Convert the wire value (`0..=3`) into a filter.
    pub fn from_level(level: u8) -> Result<Self, ValidationError> {
        Ok(match level {
            0 => Self::All,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            actual => return Err(ValidationError::QueuePriorityOutOfRange { actual }),
        })
    }

    /// Wire value sent to SMSC.
    pub fn level(self) -> u8 {
        match self {
            Self::All => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMSC status code (`code`) embedded in every response.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i64);

impl StatusCode {
    /// Code SMSC reports for a successful command.
    pub const SUCCESS: StatusCode = StatusCode(200);

    /// Construct a status code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMSC.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns `true` for [`StatusCode::SUCCESS`].
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_push_alias_then_api_key() {
        let mut credentials = Credentials::new("myalias", "abc123");
        credentials.set_api_key("KEY42");

        let mut params = Vec::new();
        credentials.push_query_params(&mut params);
        assert_eq!(
            params,
            vec![
                ("alias".to_owned(), "myalias".to_owned()),
                ("apikey".to_owned(), "KEY42".to_owned()),
            ]
        );
    }

    #[test]
    fn credentials_debug_redacts_api_key() {
        let credentials = Credentials::new("myalias", "supersecret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("myalias"));
        assert!(!debug.contains("supersecret"));
    }

    #[test]
    fn recipient_joins_area_and_local_with_dash() {
        assert_eq!(Recipient::new("2627", None).raw(), "2627");
        assert_eq!(Recipient::new("2627", Some("530000")).raw(), "2627-530000");
        assert_eq!(Recipient::from("2627530000").raw(), "2627530000");
    }

    #[test]
    fn recipient_is_not_validated() {
        assert_eq!(Recipient::new("", None).raw(), "");
        assert_eq!(Recipient::new(" 11 ", Some("x")).raw(), " 11 -x");
    }

    #[test]
    fn line_id_zero_means_none() {
        assert_eq!(LineId::new(0), None);
        assert_eq!(LineId::new(12).map(LineId::value), Some(12));
    }

    #[test]
    fn priority_enforces_range() {
        assert!(Priority::new(0).is_err());
        assert!(Priority::new(Priority::MIN).is_ok());
        assert!(Priority::new(Priority::MAX).is_ok());
        assert!(matches!(
            Priority::new(8),
            Err(ValidationError::PriorityOutOfRange { actual: 8, .. })
        ));
    }

    #[test]
    fn queue_priority_maps_levels() {
        for level in 0..=3 {
            assert_eq!(QueuePriority::from_level(level).unwrap().level(), level);
        }
        assert_eq!(QueuePriority::default(), QueuePriority::All);
        assert!(QueuePriority::from_level(4).is_err());
    }

    #[test]
    fn status_code_success() {
        assert!(StatusCode::new(200).is_success());
        assert!(!StatusCode::new(500).is_success());
        assert_eq!(StatusCode::new(401).to_string(), "401");
    }
}
