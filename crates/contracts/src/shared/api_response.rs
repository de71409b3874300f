use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic `{success, message}` envelope returned by mutations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// `Ok(message)` on success, the server message (or `fallback`) otherwise
    pub fn into_result(self, fallback: &str) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// Pull a user-facing message out of an error response body.
///
/// Uses `message`, then `error`, then the fallback. Non-JSON bodies fall
/// back as well.
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"].iter().find_map(|key| {
                v.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Message shown for an HTTP status without a usable body
pub fn status_fallback(status: u16, fallback: &str) -> String {
    match status {
        401 => "Admin key may be required or invalid.".to_string(),
        429 => "Too many requests. Please wait a moment and try again.".to_string(),
        _ => format!("{} ({})", fallback, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Email already exists","error":"x"}"#, "Failed"),
            "Email already exists"
        );
        assert_eq!(error_message_from_body(r#"{"error":"Bad token"}"#, "Failed"), "Bad token");
        assert_eq!(error_message_from_body(r#"{"message":""}"#, "Failed"), "Failed");
        assert_eq!(error_message_from_body("<html>502</html>", "Failed"), "Failed");
    }

    #[test]
    fn test_into_result() {
        let ok = ApiMessage {
            success: true,
            message: Some("Deleted".into()),
        };
        assert_eq!(ok.into_result("x"), Ok(Some("Deleted".to_string())));
        assert_eq!(ApiMessage::default().into_result("Failed"), Err("Failed".to_string()));
    }

    #[test]
    fn test_status_fallback() {
        assert!(status_fallback(429, "x").starts_with("Too many requests"));
        assert_eq!(status_fallback(500, "Failed to load"), "Failed to load (500)");
    }
}
