//! Error types returned by the API client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a single lookup
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL or the assembled endpoint URL is unusable
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP transport could not be set up
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// DNS, connect, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any status other than 200; the body is kept verbatim
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// A 200 response whose body does not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status code for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the underlying transport gave up because of a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_embeds_code_and_body() {
        let err = Error::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "500: boom");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_timeout());
    }

    #[test]
    fn setup_failure_is_not_a_transport_error() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = Error::Build(source);

        assert!(!matches!(err, Error::Transport(_)));
        assert!(err.to_string().starts_with("failed to build HTTP client"));
        assert_eq!(err.status(), None);
        assert!(!err.is_timeout());
    }

    #[test]
    fn decode_error_has_no_status() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
