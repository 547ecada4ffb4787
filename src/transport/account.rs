use serde::Deserialize;

use super::TransportError;
use super::scalar::{TransportBool, TransportInt};
use crate::domain::{
    Balance, NumberValidity, QueuePriority, QueuedMessages, Recipient, SystemStatus,
};

#[derive(Debug, Clone, Deserialize)]
struct StatusJson {
    estado: TransportBool,
    #[serde(default)]
    mensaje: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct EvaluateNumberJson {
    estado: TransportBool,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    mensajes: TransportInt,
}

#[derive(Debug, Clone, Deserialize)]
struct QueuedJson {
    mensajes: TransportQueued,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportQueued {
    Count(TransportInt),
    List(Vec<serde_json::Value>),
}

pub fn encode_evaluate_number_query(area: &str, local: Option<&str>) -> Vec<(String, String)> {
    vec![(
        Recipient::FIELD.to_owned(),
        Recipient::new(area, local).raw().to_owned(),
    )]
}

pub fn encode_queued_query(priority: QueuePriority) -> Vec<(String, String)> {
    vec![(QueuePriority::FIELD.to_owned(), priority.level().to_string())]
}

pub fn decode_system_status(data: &serde_json::Value) -> Result<SystemStatus, TransportError> {
    let parsed = StatusJson::deserialize(data)?;
    Ok(SystemStatus {
        estado: parsed.estado.value(),
        mensaje: parsed.mensaje,
    })
}

pub fn decode_number_validity(data: &serde_json::Value) -> Result<NumberValidity, TransportError> {
    let parsed = EvaluateNumberJson::deserialize(data)?;
    Ok(NumberValidity {
        estado: parsed.estado.value(),
    })
}

pub fn decode_balance(data: &serde_json::Value) -> Result<Balance, TransportError> {
    let parsed = BalanceJson::deserialize(data)?;
    Ok(Balance {
        mensajes: parsed.mensajes.value(),
    })
}

pub fn decode_queued(data: &serde_json::Value) -> Result<QueuedMessages, TransportError> {
    let parsed = QueuedJson::deserialize(data)?;
    let mensajes = match parsed.mensajes {
        TransportQueued::Count(count) => {
            u64::try_from(count.value()).map_err(|_| TransportError::InvalidCount {
                field: "mensajes",
                value: count.value(),
            })?
        }
        TransportQueued::List(items) => items.len() as u64,
    };
    Ok(QueuedMessages { mensajes })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_evaluate_number_joins_local_part() {
        assert_eq!(
            encode_evaluate_number_query("2627", Some("530000")),
            vec![("num".to_owned(), "2627-530000".to_owned())]
        );
        assert_eq!(
            encode_evaluate_number_query("2627530000", None),
            vec![("num".to_owned(), "2627530000".to_owned())]
        );
    }

    #[test]
    fn encode_queued_uses_priority_level() {
        assert_eq!(
            encode_queued_query(QueuePriority::All),
            vec![("prioridad".to_owned(), "0".to_owned())]
        );
        assert_eq!(
            encode_queued_query(QueuePriority::High),
            vec![("prioridad".to_owned(), "3".to_owned())]
        );
    }

    #[test]
    fn decode_system_status_maps_flag_and_message() {
        let parsed =
            decode_system_status(&json!({ "estado": true, "mensaje": "Sin demoras" })).unwrap();
        assert!(parsed.estado);
        assert_eq!(parsed.mensaje.as_deref(), Some("Sin demoras"));

        let parsed = decode_system_status(&json!({ "estado": 0 })).unwrap();
        assert!(!parsed.estado);
        assert_eq!(parsed.mensaje, None);
    }

    #[test]
    fn decode_system_status_requires_flag() {
        assert!(matches!(
            decode_system_status(&json!({})),
            Err(TransportError::Json(_))
        ));
        assert!(decode_system_status(&serde_json::Value::Null).is_err());
    }

    #[test]
    fn decode_number_validity_maps_flag() {
        assert!(decode_number_validity(&json!({ "estado": "1" })).unwrap().estado);
        assert!(!decode_number_validity(&json!({ "estado": false })).unwrap().estado);
    }

    #[test]
    fn decode_balance_supports_numeric_or_string_counts() {
        assert_eq!(decode_balance(&json!({ "mensajes": 1500 })).unwrap().mensajes, 1500);
        assert_eq!(decode_balance(&json!({ "mensajes": "-3" })).unwrap().mensajes, -3);
    }

    #[test]
    fn decode_queued_accepts_count_or_list() {
        assert_eq!(decode_queued(&json!({ "mensajes": "4" })).unwrap().mensajes, 4);
        assert_eq!(
            decode_queued(&json!({ "mensajes": [{ "id": 1 }, { "id": 2 }] }))
                .unwrap()
                .mensajes,
            2
        );
    }

    #[test]
    fn decode_queued_rejects_negative_count() {
        let err = decode_queued(&json!({ "mensajes": -1 })).unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidCount {
                field: "mensajes",
                value: -1
            }
        ));
    }
}
