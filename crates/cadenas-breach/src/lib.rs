//! k-anonymity breach lookups for CADENAS.
//!
//! The only crate in the workspace that touches the network. A candidate
//! password is hashed with SHA-1 locally and only the first five hex
//! characters of the digest ever leave the process; the rest of the match
//! happens against the returned record list. Lookup outcomes are tri-state
//! (breached / clear / indeterminate) so a network failure degrades to
//! "don't know" instead of an error.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{
    validate_candidate, BreachClient, BreachConfig, BreachReport, MIN_CANDIDATE_LENGTH,
};
pub use error::BreachError;
pub use protocol::{
    find_suffix_count, sha1_hex_upper, split_digest, DIGEST_HEX_LENGTH, PREFIX_LENGTH,
    SUFFIX_LENGTH,
};
