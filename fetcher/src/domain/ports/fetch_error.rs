//! Failure taxonomy shared by every remote source.

/// Errors surfaced while fetching a remote resource.
///
/// Every variant keeps the underlying cause as text so callers can log it
/// even when they choose to render nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network transport failed before a complete response arrived.
    #[error("transport failed: {message}")]
    Transport { message: String },
    /// The request exceeded the configured timeout.
    #[error("request timed out: {message}")]
    Timeout { message: String },
    /// The body was not valid JSON for the expected shape.
    #[error("response decode failed: {message}")]
    Decode { message: String },
    /// The server answered with a non-success status and an error message.
    #[error("server returned status {status}: {message}")]
    Application { status: u16, message: String },
    /// The request could not be built.
    #[error("request invalid: {message}")]
    InvalidRequest { message: String },
}

impl FetchError {
    /// Build a [`FetchError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`FetchError::Application`].
    pub fn application(status: impl Into<u16>, message: impl Into<String>) -> Self {
        Self::Application {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Build a [`FetchError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Server-reported message, present only for [`FetchError::Application`].
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Application { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn application_errors_expose_the_server_message() {
        let error = FetchError::application(404_u16, "Not Found");
        assert_eq!(error.server_message(), Some("Not Found"));
        assert_eq!(error.to_string(), "server returned status 404: Not Found");
    }

    #[rstest]
    #[case::transport(FetchError::transport("connection refused"))]
    #[case::timeout(FetchError::timeout("operation timed out"))]
    #[case::decode(FetchError::decode("expected value at line 1 column 1"))]
    #[case::invalid(FetchError::invalid_request("relative URL without a base"))]
    fn other_errors_have_no_server_message(#[case] error: FetchError) {
        assert_eq!(error.server_message(), None);
    }
}
