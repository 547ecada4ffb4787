use serde::Deserialize;
use serde::de::Error as DeError;

/// Integer returned by SMSC as either a JSON number or a numeric JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportInt(i64);

impl TransportInt {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            String(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(value) => Ok(Self(value)),
            Repr::String(value) => value
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected integer, got {value:?}"))),
        }
    }
}

/// Flag returned by SMSC as a JSON bool, `0`/`1`, or their string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportBool(bool);

impl TransportBool {
    pub fn value(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Int(i64),
            String(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(value) => Ok(Self(value)),
            Repr::Int(value) => Ok(Self(value != 0)),
            Repr::String(value) => match value.trim() {
                "1" | "true" => Ok(Self(true)),
                "0" | "false" | "" => Ok(Self(false)),
                other => Err(D::Error::custom(format!("expected flag, got {other:?}"))),
            },
        }
    }
}

/// Identifier returned by SMSC as either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportId {
    String(String),
    Number(serde_json::Number),
}

impl TransportId {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accepts_number_or_numeric_string() {
        let parsed: TransportInt = serde_json::from_str("42").unwrap();
        assert_eq!(parsed.value(), 42);

        let parsed: TransportInt = serde_json::from_str(r#"" 17 ""#).unwrap();
        assert_eq!(parsed.value(), 17);

        assert!(serde_json::from_str::<TransportInt>(r#""many""#).is_err());
        assert!(serde_json::from_str::<TransportInt>("true").is_err());
    }

    #[test]
    fn bool_accepts_flags() {
        for (json, expected) in [
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            (r#""1""#, true),
            (r#""false""#, false),
        ] {
            let parsed: TransportBool = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.value(), expected, "input {json}");
        }
        assert!(serde_json::from_str::<TransportBool>(r#""maybe""#).is_err());
    }

    #[test]
    fn id_keeps_numeric_token() {
        let parsed: TransportId = serde_json::from_str("123456").unwrap();
        assert_eq!(parsed.into_string(), "123456");

        let parsed: TransportId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(parsed.into_string(), "abc");
    }
}
