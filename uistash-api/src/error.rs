use http::StatusCode;

/// A non-success response from the backend. The optional `{message}` body
/// is surfaced verbatim to the user; anything else degrades to the bare
/// status code.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("request failed with HTTP {status}")]
    Status { status: u16 },
}

impl ApiError {
    /// Builds the error from response parts. A malformed or message-less
    /// body is not itself an error condition.
    pub fn from_parts(status: u16, body: &[u8]) -> ApiError {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            });
        match message {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Status { status },
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiError::Rejected { status, .. } => *status,
            ApiError::Status { status } => *status,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == StatusCode::UNAUTHORIZED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_body_is_surfaced_verbatim() {
        let e = ApiError::from_parts(404, br#"{"message":"Component introuvable."}"#);
        assert_eq!(e.to_string(), "Component introuvable.");
        assert_eq!(e.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_body_degrades_to_status() {
        let e = ApiError::from_parts(500, b"<html>oops</html>");
        assert_eq!(e, ApiError::Status { status: 500 });
        assert_eq!(e.to_string(), "request failed with HTTP 500");
    }

    #[test]
    fn body_without_message_degrades_to_status() {
        let e = ApiError::from_parts(403, br#"{"error":"forbidden"}"#);
        assert_eq!(e, ApiError::Status { status: 403 });
        assert!(!e.is_unauthorized());
        assert!(ApiError::from_parts(401, b"").is_unauthorized());
    }
}
