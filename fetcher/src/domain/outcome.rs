//! Success-or-error union decoded at the fetch boundary.

use serde::{Deserialize, Serialize};

use crate::domain::ports::FetchError;

/// Error body returned by the sample APIs on non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Server-provided explanation, surfaced to callers verbatim.
    pub message: String,
}

/// Decoded response body: either the endpoint's success shape or its error
/// body, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Body decoded as the expected success shape.
    Success(T),
    /// Non-success status carrying an [`ErrorResponse`].
    Failure {
        /// HTTP status code that accompanied the body.
        status: u16,
        /// Decoded error body.
        error: ErrorResponse,
    },
}

impl<T> FetchOutcome<T> {
    /// Flatten the union into a `Result`, mapping the error branch onto
    /// [`FetchError::Application`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fetcher::domain::{ErrorResponse, FetchOutcome};
    ///
    /// let outcome: FetchOutcome<()> = FetchOutcome::Failure {
    ///     status: 404,
    ///     error: ErrorResponse { message: "Not Found".to_owned() },
    /// };
    /// let error = outcome.into_result().expect_err("failure branch");
    /// assert_eq!(error.server_message(), Some("Not Found"));
    /// ```
    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { status, error } => Err(FetchError::application(status, error.message)),
        }
    }
}
