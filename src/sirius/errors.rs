use serde::Serialize;
use thiserror::Error;

/// Unexpected HTTP status returned by Sirius.
///
/// `code`, `url`, `method` and `body` are diagnostics for logs; only
/// [`StatusError::title`] is meant to be shown to users.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[error("{method} {url} returned {code}")]
pub struct StatusError {
    pub code: u16,
    pub url: String,
    pub method: String,
    pub body: String,
}

impl StatusError {
    pub fn title(&self) -> &'static str {
        "unexpected response from Sirius"
    }

    pub fn data(&self) -> &Self {
        self
    }
}

/// Everything a Sirius call can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session cookies were rejected; the user has to sign in again.
    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Validation message reported by Sirius for a submitted payload.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn teapot() -> StatusError {
        StatusError {
            code: 418,
            url: "/some/url".to_string(),
            method: "POST".to_string(),
            body: "a body".to_string(),
        }
    }

    #[test]
    fn status_error_display_and_accessors() {
        let err = teapot();

        assert_eq!(err.to_string(), "POST /some/url returned 418");
        assert_eq!(err.title(), "unexpected response from Sirius");
        assert_eq!(err.data(), &err);
        assert_eq!(err.body, "a body");
    }

    #[test]
    fn api_error_keeps_status_message() {
        let err = ApiError::from(teapot());
        assert_eq!(err.to_string(), "POST /some/url returned 418");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_sentinel() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
        assert_eq!(ApiError::Rejected("message".into()).to_string(), "message");
    }
}
