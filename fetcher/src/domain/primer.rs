//! Warm-up helpers printed before the remote fetches.
//!
//! These mirror the walkthrough's opening examples: plain arithmetic, string
//! handling, a callback, and a deferred computation.

use std::future::{Future, ready};

/// Operands used by the warm-up section.
pub const FIRST_NUMBER: i64 = 100;
/// Second numeric operand.
pub const SECOND_NUMBER: i64 = 200;
/// First string operand.
pub const FIRST_STRING: &str = "Hello";
/// Second string operand.
pub const SECOND_STRING: &str = "World";

/// Sum two numbers.
#[must_use]
pub const fn additional(first: i64, second: i64) -> i64 {
    first + second
}

/// Join two strings with a single space.
#[must_use]
pub fn concatenate_string(first: &str, second: &str) -> String {
    format!("{first} {second}")
}

/// Count the characters in `value`.
#[must_use]
pub fn count_length(value: &str) -> usize {
    value.chars().count()
}

/// Subtract `second` from `first` and hand the result to `callback`.
pub fn with_callback<F>(first: i64, second: i64, callback: F)
where
    F: FnOnce(i64),
{
    callback(first - second);
}

/// Multiply two numbers once the returned future is awaited.
pub fn multiply(first: i64, second: i64) -> impl Future<Output = i64> {
    ready(first * second)
}

/// Results of the warm-up helpers, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerReport {
    /// `additional(first, second)`.
    pub sum: i64,
    /// `concatenate_string(first, second)`.
    pub combined: String,
    /// Character count of `combined`.
    pub combined_length: usize,
    /// Value passed to the subtraction callback.
    pub difference: i64,
    /// Awaited product.
    pub product: i64,
}

impl PrimerReport {
    /// Run every helper over the given operands.
    pub async fn compute(numbers: (i64, i64), strings: (&str, &str)) -> Self {
        let (first, second) = numbers;
        let combined = concatenate_string(strings.0, strings.1);
        let mut difference = 0;
        with_callback(first, second, |result| difference = result);

        Self {
            sum: additional(first, second),
            combined_length: count_length(&combined),
            combined,
            difference,
            product: multiply(first, second).await,
        }
    }

    /// Run every helper over the walkthrough's default operands.
    pub async fn with_defaults() -> Self {
        Self::compute(
            (FIRST_NUMBER, SECOND_NUMBER),
            (FIRST_STRING, SECOND_STRING),
        )
        .await
    }
}
