use serde_json::Value;
use thiserror::Error;

/// Failure talking to the FitTrack backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A response arrived but its status was not 2xx.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Build an HTTP error from a raw response body.
    ///
    /// A string `detail` is kept verbatim. An array `detail` (validation
    /// errors) keeps its `msg` entries joined with `; `. Anything else leaves
    /// the detail empty so callers fall back to their own message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(detail_text));
        ApiError::Http { status, detail }
    }

    /// Text for a blocking alert after a failed create or delete.
    pub fn alert_text(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { detail, .. } => {
                format!("Error: {}", detail.as_deref().unwrap_or(fallback))
            }
            ApiError::Transport(msg) | ApiError::Decode(msg) => {
                format!("Error de conexión: {}", msg)
            }
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' cannot carry paths")]
    OpaqueBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_kept_verbatim() {
        let err = ApiError::from_response_body(409, r#"{"detail":"tiene sesiones asociadas"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                detail: Some("tiene sesiones asociadas".to_string())
            }
        );
        assert_eq!(
            err.alert_text("No se pudo eliminar el usuario"),
            "Error: tiene sesiones asociadas"
        );
    }

    #[test]
    fn test_validation_detail_joins_messages() {
        let body = r#"{"detail":[
            {"loc":["body","name"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","difficulty"],"msg":"value is not a valid enumeration member","type":"type_error.enum"}
        ]}"#;
        let err = ApiError::from_response_body(422, body);
        match err {
            ApiError::Http { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(
                    detail.as_deref(),
                    Some("field required; value is not a valid enumeration member")
                );
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_detail_falls_back() {
        for body in ["", "not json", r#"{"error":"boom"}"#, r#"{"detail":""}"#, r#"{"detail":42}"#] {
            let err = ApiError::from_response_body(500, body);
            assert_eq!(
                err.alert_text("No se pudo crear el ejercicio"),
                "Error: No se pudo crear el ejercicio",
                "body {:?} should use the fallback",
                body
            );
        }
    }

    #[test]
    fn test_transport_and_decode_use_connection_prefix() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(err.alert_text("ignored"), "Error de conexión: Failed to fetch");

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.alert_text("ignored"), "Error de conexión: expected value at line 1");
    }

    #[test]
    fn test_display_includes_status_and_detail() {
        let err = ApiError::Http { status: 404, detail: Some("Exercise not found".to_string()) };
        assert_eq!(err.to_string(), "HTTP 404: Exercise not found");

        let err = ApiError::Http { status: 500, detail: None };
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
