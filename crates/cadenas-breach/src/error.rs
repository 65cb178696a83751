//! Breach lookup error types for `cadenas-breach`.

use thiserror::Error;

use crate::client::MIN_CANDIDATE_LENGTH;

/// Errors produced by breach lookups.
///
/// [`BreachClient::check_password`](crate::BreachClient::check_password)
/// folds these into an indeterminate report; they stay observable through
/// the lower-level [`lookup`](crate::BreachClient::lookup) path.
#[derive(Debug, Error)]
pub enum BreachError {
    /// HTTP transport failure (connect, TLS, timeout, or body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The range endpoint answered with a non-success status.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),

    /// The matching range record carried a count that is not a decimal
    /// integer. The record itself is hash material and never appears in
    /// error text.
    #[error("malformed count in range response")]
    MalformedCount,

    /// Candidate password is empty.
    #[error("password must not be empty")]
    EmptyCandidate,

    /// Candidate password is shorter than the minimum checkable length.
    #[error("password must be at least {} characters long", MIN_CANDIDATE_LENGTH)]
    CandidateTooShort,
}
