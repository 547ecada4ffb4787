use serde::Deserialize;

use super::TransportError;
use super::scalar::{TransportId, TransportInt};
use crate::domain::{LineId, MESSAGE_FIELD, MessageDraft, Priority, Recipient, SendResponse};

#[derive(Debug, Clone, Deserialize)]
struct SendJson {
    #[serde(default)]
    id: Option<TransportId>,
    #[serde(default)]
    sms: Option<TransportInt>,
}

/// Query parameters for `enviar`.
///
/// `num` and `msj` are always present, even when empty. `line` and `priority` are
/// only added when set.
pub fn encode_send_query(draft: &MessageDraft) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    let num = draft
        .recipients()
        .iter()
        .map(Recipient::raw)
        .collect::<Vec<_>>()
        .join(",");
    params.push((Recipient::FIELD.to_owned(), num));
    params.push((MESSAGE_FIELD.to_owned(), draft.message().to_owned()));

    if let Some(line) = draft.line() {
        params.push((LineId::FIELD.to_owned(), line.value().to_string()));
    }
    if let Some(priority) = draft.priority() {
        params.push((Priority::FIELD.to_owned(), priority.value().to_string()));
    }

    params
}

pub fn decode_send_response(data: &serde_json::Value) -> Result<SendResponse, TransportError> {
    let parsed = match data {
        serde_json::Value::Object(_) => SendJson::deserialize(data)?,
        _ => SendJson {
            id: None,
            sms: None,
        },
    };

    let sms = parsed
        .sms
        .map(|count| {
            u64::try_from(count.value()).map_err(|_| TransportError::InvalidCount {
                field: "sms",
                value: count.value(),
            })
        })
        .transpose()?;

    Ok(SendResponse {
        id: parsed.id.map(TransportId::into_string),
        sms,
        raw: data.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_joins_recipients_and_keeps_message() {
        let mut draft = MessageDraft::new();
        draft.add_recipient("2627", Some("530000"));
        draft.add_recipient("1155554444", None);
        draft.set_message("hola mundo & más");

        assert_eq!(
            encode_send_query(&draft),
            vec![
                ("num".to_owned(), "2627-530000,1155554444".to_owned()),
                ("msj".to_owned(), "hola mundo & más".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_empty_draft_still_has_num_and_msj() {
        assert_eq!(
            encode_send_query(&MessageDraft::new()),
            vec![
                ("num".to_owned(), String::new()),
                ("msj".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn encode_adds_line_and_priority_without_artifacts() {
        let mut draft = MessageDraft::new();
        draft.add_recipient("11", Some("44445555"));
        draft.set_message("hi");
        draft.set_line(12);
        draft.set_priority(5).unwrap();

        let params = encode_send_query(&draft);
        assert_eq!(
            &params[2..],
            &[
                ("line".to_owned(), "12".to_owned()),
                ("priority".to_owned(), "5".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_omits_zero_priority() {
        let mut draft = MessageDraft::new();
        draft.set_priority(0).unwrap();
        let params = encode_send_query(&draft);
        assert!(!params.iter().any(|(k, _)| k == "priority" || k == "line"));
    }

    #[test]
    fn decode_keeps_known_fields_and_raw_payload() {
        let data = json!({ "id": 98765, "sms": "2", "extra": "x" });
        let parsed = decode_send_response(&data).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("98765"));
        assert_eq!(parsed.sms, Some(2));
        assert_eq!(parsed.raw, data);
    }

    #[test]
    fn decode_tolerates_non_object_payload() {
        let parsed = decode_send_response(&json!(true)).unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.sms, None);
        assert_eq!(parsed.raw, json!(true));
    }
}
