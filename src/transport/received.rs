use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportId;
use crate::domain::ReceivedMessage;

/// Query parameter name used by SMSC (`ultimoid`).
const LAST_ID_FIELD: &str = "ultimoid";

#[derive(Debug, Clone, Deserialize)]
struct ReceivedJson {
    id: TransportId,
    #[serde(default)]
    fecha: Option<String>,
    #[serde(default)]
    celular: Option<TransportId>,
    #[serde(default)]
    mensaje: Option<String>,
}

pub fn encode_received_query(last_id: u64) -> Vec<(String, String)> {
    vec![(LAST_ID_FIELD.to_owned(), last_id.to_string())]
}

/// Decode the `recibidos` payload. A missing payload means no new messages.
pub fn decode_received(
    data: &serde_json::Value,
) -> Result<Vec<ReceivedMessage>, TransportError> {
    if data.is_null() {
        return Ok(Vec::new());
    }

    let parsed = Vec::<ReceivedJson>::deserialize(data)?;
    Ok(parsed
        .into_iter()
        .map(|item| ReceivedMessage {
            id: item.id.into_string(),
            fecha: item.fecha,
            celular: item.celular.map(TransportId::into_string),
            mensaje: item.mensaje,
        })
        .collect())
}
