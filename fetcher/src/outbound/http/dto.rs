//! Boundary decoding from raw response bodies into [`FetchOutcome`].
//!
//! The status decides which shape is tried first: a non-success status with a
//! `message` field is the error branch; every other body is decoded as the
//! success shape without further validation.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ports::FetchError;
use crate::domain::{ErrorResponse, FetchOutcome};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    message: String,
}

impl From<ErrorResponseDto> for ErrorResponse {
    fn from(dto: ErrorResponseDto) -> Self {
        Self {
            message: dto.message,
        }
    }
}

pub(super) fn decode_outcome<T>(
    status: StatusCode,
    body: &[u8],
) -> Result<FetchOutcome<T>, FetchError>
where
    T: DeserializeOwned,
{
    if !status.is_success() {
        if let Ok(error) = serde_json::from_slice::<ErrorResponseDto>(body) {
            return Ok(FetchOutcome::Failure {
                status: status.as_u16(),
                error: error.into(),
            });
        }
    }

    serde_json::from_slice::<T>(body)
        .map(FetchOutcome::Success)
        .map_err(|error| decode_error(status, &error, body))
}

fn decode_error(status: StatusCode, error: &serde_json::Error, body: &[u8]) -> FetchError {
    let preview = body_preview(body);
    if preview.is_empty() {
        FetchError::decode(format!("status {}: {error}", status.as_u16()))
    } else {
        FetchError::decode(format!("status {}: {error}; body: {preview}", status.as_u16()))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
