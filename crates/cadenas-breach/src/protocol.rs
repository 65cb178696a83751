//! Wire-level pieces of the k-anonymity range protocol.
//!
//! A candidate password is hashed with SHA-1 locally. The 40-character
//! uppercase hex digest splits into a 5-character prefix, the only
//! secret-derived data ever transmitted, and a 35-character suffix matched
//! locally against the response. Response bodies are newline-separated
//! `SUFFIX:COUNT` records covering every known digest under the prefix.

use ring::digest;

use crate::error::BreachError;

/// Hex length of a full SHA-1 digest.
pub const DIGEST_HEX_LENGTH: usize = 40;

/// Digest characters sent to the range endpoint.
pub const PREFIX_LENGTH: usize = 5;

/// Digest characters matched locally against response records.
pub const SUFFIX_LENGTH: usize = DIGEST_HEX_LENGTH - PREFIX_LENGTH;

/// Uppercase SHA-1 hex digest of `secret`.
///
/// SHA-1 is mandated by the range protocol; the digest addresses the breach
/// corpus and protects nothing.
#[must_use]
pub fn sha1_hex_upper(secret: &str) -> String {
    let digest = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, secret.as_bytes());
    let mut hex_digest = hex::encode(digest.as_ref());
    hex_digest.make_ascii_uppercase();
    hex_digest
}

/// Split a hex digest into its transmitted prefix and local suffix.
///
/// # Panics
/// Panics if `digest_hex` is shorter than [`PREFIX_LENGTH`]. Digests from
/// [`sha1_hex_upper`] are always [`DIGEST_HEX_LENGTH`] characters.
#[must_use]
pub fn split_digest(digest_hex: &str) -> (&str, &str) {
    digest_hex.split_at(PREFIX_LENGTH)
}

/// Scan a range response body for `suffix` and parse its count.
///
/// Records are `SUFFIX:COUNT`, one per line; CRLF line endings are
/// accepted. Lines without a separator are skipped. A record matching
/// `suffix` (case-insensitively) whose count does not parse is an error
/// rather than a silent miss.
///
/// # Errors
/// Returns [`BreachError::MalformedCount`] if the matching record's count
/// is not a decimal integer.
pub fn find_suffix_count(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    for line in body.lines() {
        if let Some((candidate_suffix, count)) = line.split_once(':') {
            if candidate_suffix.trim().eq_ignore_ascii_case(suffix) {
                let count = count
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| BreachError::MalformedCount)?;
                return Ok(Some(count));
            }
        }
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
