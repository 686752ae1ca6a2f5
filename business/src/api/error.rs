use crate::http::HttpError;

/// Failure of a single API round trip.
///
/// `Transport` means no response arrived. `Status` and `Rejected` mean the
/// server answered but refused the request; their message is what the server
/// said, or a status-derived fallback.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Transport(HttpError),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{message}")]
    Rejected { message: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,
}

impl RequestError {
    /// HTTP status for application failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Picks the human-readable reason out of an error envelope.
///
/// `error` wins over `message`; with neither the status code is reported.
pub(crate) fn envelope_message(body: Option<&serde_json::Value>, status: u16) -> String {
    let field = |name: &str| {
        body.and_then(|body| body.get(name))
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    };

    field("error")
        .or_else(|| field("message"))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_is_preferred() {
        let body = json!({ "success": false, "error": "Not found", "message": "ignored" });
        assert_eq!(envelope_message(Some(&body), 404), "Not found");
    }

    #[test]
    fn message_field_is_second_choice() {
        let body = json!({ "success": false, "message": "Validation failed" });
        assert_eq!(envelope_message(Some(&body), 400), "Validation failed");
    }

    #[test]
    fn status_fallback_without_body() {
        assert_eq!(envelope_message(None, 502), "HTTP error! status: 502");
    }

    #[test]
    fn status_accessor_only_for_application_failures() {
        let err = RequestError::Status {
            status: 500,
            message: "boom".to_owned(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "boom");
        assert_eq!(RequestError::Cancelled.status(), None);
        assert!(RequestError::Transport(HttpError::new("refused")).is_transport());
    }
}
