use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportInt;
use crate::domain::{GatewayResponse, StatusCode};

#[derive(Debug, Clone, Deserialize)]
struct EnvelopeJson {
    code: TransportInt,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode the `{code, message, data}` envelope.
///
/// A blank body or a JSON `null` yields `Ok(None)`: the gateway answered without a
/// response. Any JSON value other than an object is rejected with
/// [`TransportError::NotAnObject`].
pub fn decode_envelope(body: &str) -> Result<Option<GatewayResponse>, TransportError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(_) => {
            let parsed = EnvelopeJson::deserialize(&value)?;
            Ok(Some(GatewayResponse {
                code: StatusCode::new(parsed.code.value()),
                message: parsed.message.unwrap_or_default(),
                data: parsed.data,
            }))
        }
        _ => Err(TransportError::NotAnObject {
            raw: body.trim().to_owned(),
        }),
    }
}
