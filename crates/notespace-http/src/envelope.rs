//! Response envelope handling.
//!
//! Every API response carries the same wrapper:
//! `{"status":"success","data":<payload>}` or
//! `{"status":"error","code":"...","message":"..."}`. Callers of
//! [`crate::ApiClient`] only ever see the unwrapped payload.

use serde::Deserialize;

/// The uniform response envelope.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success {
        #[serde(default)]
        data: Option<serde_json::Value>,
    },
    Error {
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    },
}

/// Error-body fields as they appear on non-2xx responses. Tolerant of
/// partial bodies: proxies and load balancers do not always speak the
/// envelope format.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn code_or_unknown(&self) -> String {
        self.code.clone().unwrap_or_else(|| "UNKNOWN_ERROR".into())
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.into())
    }
}

/// Parse a non-2xx body, falling back to an empty [`ErrorBody`] when the
/// body is not JSON or not in envelope form.
pub fn parse_error_body(body: &[u8]) -> ErrorBody {
    serde_json::from_slice(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_success_payload() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"status":"success","data":{"workspaceId":7}}"#).unwrap();
        match envelope {
            Envelope::Success { data } => {
                assert_eq!(data.unwrap()["workspaceId"], 7);
            }
            Envelope::Error { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn success_without_data_is_valid() {
        let envelope: Envelope = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        match envelope {
            Envelope::Success { data } => assert!(data.is_none()),
            Envelope::Error { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn parses_error_envelope() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"status":"error","code":"WORKSPACE_LIMIT","message":"limit reached"}"#,
        )
        .unwrap();
        match envelope {
            Envelope::Error { code, message } => {
                assert_eq!(code, "WORKSPACE_LIMIT");
                assert_eq!(message, "limit reached");
            }
            Envelope::Success { .. } => panic!("expected error"),
        }
    }

    #[test]
    fn malformed_error_body_falls_back() {
        let body = parse_error_body(b"<html>502 Bad Gateway</html>");
        assert_eq!(body.code_or_unknown(), "UNKNOWN_ERROR");
        assert_eq!(body.message_or("server error"), "server error");
    }
}
