//! Normalized failures of the backend wrapper.

use serde_json::Value;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong talking to the backend. Carries only strings
/// so results can be cloned into UI events.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned status {status}: {}", .detail.as_deref().unwrap_or("unknown error"))]
    Status { status: u16, detail: Option<String> },
    #[error("backend rejected request: {}", .0.as_deref().unwrap_or("unknown error"))]
    Rejected(Option<String>),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not read {path}: {reason}")]
    LocalFile { path: String, reason: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Server-provided explanation, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } | ApiError::Rejected(detail) => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Unreachable(err.to_string())
        }
    }
}

/// Pulls the `detail` / `error` / `message` field out of an error body.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "error", "message"].iter().find_map(|key| {
        match value.get(key)? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::String(_) | Value::Null => None,
            // FastAPI validation errors put a list under `detail`
            other => Some(other.to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_priority() {
        assert_eq!(
            extract_detail(r#"{"detail": "d", "error": "e"}"#).as_deref(),
            Some("d")
        );
        assert_eq!(
            extract_detail(r#"{"error": "e", "message": "m"}"#).as_deref(),
            Some("e")
        );
        assert_eq!(extract_detail(r#"{"message": "m"}"#).as_deref(), Some("m"));
    }

    #[test]
    fn empty_detail_falls_through_to_next_field() {
        assert_eq!(
            extract_detail(r#"{"detail": "", "error": "real reason"}"#).as_deref(),
            Some("real reason")
        );
        assert_eq!(extract_detail(r#"{"detail": "", "message": ""}"#), None);
    }

    #[test]
    fn missing_or_non_json_detail_is_unknown() {
        assert_eq!(extract_detail(r#"{"status": "bad"}"#), None);
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn structured_detail_is_kept_as_json() {
        let detail = extract_detail(r#"{"detail": [{"loc": ["body"]}]}"#).unwrap();
        assert!(detail.contains("loc"));
    }

    #[test]
    fn display_falls_back_to_unknown_error() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "backend returned status 500: unknown error");

        let err = ApiError::Rejected(Some("مكرر".into()));
        assert_eq!(err.to_string(), "backend rejected request: مكرر");
        assert_eq!(err.detail(), Some("مكرر"));
    }

    #[test]
    fn only_unreachable_counts_as_connectivity() {
        assert!(ApiError::Unreachable("refused".into()).is_connectivity());
        assert!(!ApiError::Decode("eof".into()).is_connectivity());
        assert!(
            !ApiError::Status {
                status: 502,
                detail: None
            }
            .is_connectivity()
        );
    }
}
