//! Asynchronous client for the k-anonymity range endpoint.
//!
//! One lookup is one GET: the digest prefix goes out, the shared-prefix
//! record list comes back, and the suffix match happens locally. Outcomes
//! are tri-state — breached, clear, or indeterminate when the service is
//! unreachable — so a flaky network can never block the caller.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BreachError;
use crate::protocol::{find_suffix_count, sha1_hex_upper, split_digest};

/// Minimum candidate length accepted by [`validate_candidate`].
pub const MIN_CANDIDATE_LENGTH: usize = 4;

/// Breach client configuration.
///
/// Defaults target the public Have I Been Pwned range API; tests point
/// `api_base_url` at a local mock server instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreachConfig {
    /// Base URL of the range service, without a trailing slash.
    pub api_base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Request timeout in seconds; `None` keeps the transport default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.pwnedpasswords.com".to_string(),
            user_agent: concat!("cadenas-breach/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Outcome of one breach lookup.
///
/// `breached` is `Some(true)` for a corpus hit, `Some(false)` for a clean
/// result, and `None` when the lookup could not complete. The message is
/// user-facing and never contains the candidate or its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachReport {
    /// Whether the password appears in the breach corpus; `None` = unknown.
    pub breached: Option<bool>,
    /// Corpus appearance count, present only on a hit.
    pub count: Option<u64>,
    /// User-facing outcome sentence.
    pub message: String,
}

impl BreachReport {
    /// Report for a password found `count` times in the corpus.
    #[must_use]
    pub fn breached(count: u64) -> Self {
        Self {
            breached: Some(true),
            count: Some(count),
            message: format!(
                "This password has appeared {count} time(s) in data breaches. Change it immediately!"
            ),
        }
    }

    /// Report for a password absent from the corpus.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            breached: Some(false),
            count: None,
            message: "Great! This password has not been found in any known data breaches."
                .to_string(),
        }
    }

    /// Report for a lookup that could not complete.
    #[must_use]
    pub fn indeterminate() -> Self {
        Self {
            breached: None,
            count: None,
            message: "Unable to check password at this time.".to_string(),
        }
    }
}

/// Validate a candidate password ahead of a lookup.
///
/// [`BreachClient::check_password`] does not call this itself; callers
/// reject invalid candidates with a user-facing validation error before a
/// query ever starts.
///
/// # Errors
/// Returns [`BreachError::EmptyCandidate`] or
/// [`BreachError::CandidateTooShort`].
pub fn validate_candidate(candidate: &str) -> Result<(), BreachError> {
    if candidate.is_empty() {
        return Err(BreachError::EmptyCandidate);
    }
    if candidate.chars().count() < MIN_CANDIDATE_LENGTH {
        return Err(BreachError::CandidateTooShort);
    }
    Ok(())
}

/// Client for the range endpoint. Cheap to clone; the underlying HTTP
/// connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct BreachClient {
    config: BreachConfig,
    http: Client,
}

impl BreachClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    /// Returns [`BreachError::Http`] if the HTTP client cannot be built.
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// Build a client with the default configuration.
    ///
    /// # Errors
    /// Returns [`BreachError::Http`] if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, BreachError> {
        Self::new(BreachConfig::default())
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &BreachConfig {
        &self.config
    }

    /// Check whether `candidate` appears in the breach corpus.
    ///
    /// Never fails: transport and parse errors collapse into an
    /// indeterminate report, so the caller always receives a displayable
    /// outcome. Expects an already-validated candidate (see
    /// [`validate_candidate`]).
    pub async fn check_password(&self, candidate: &str) -> BreachReport {
        match self.lookup(candidate).await {
            Ok(Some(count)) => BreachReport::breached(count),
            Ok(None) => BreachReport::clear(),
            Err(err) => {
                warn!("breach lookup failed: {err}");
                BreachReport::indeterminate()
            }
        }
    }

    /// Perform one range query and match the suffix locally.
    ///
    /// `Ok(Some(count))` is a corpus hit, `Ok(None)` a clean miss.
    ///
    /// # Errors
    /// Returns [`BreachError::Http`] on transport failure,
    /// [`BreachError::UnexpectedStatus`] for a non-success response, and
    /// [`BreachError::MalformedCount`] if the matching record's count does
    /// not parse.
    pub async fn lookup(&self, candidate: &str) -> Result<Option<u64>, BreachError> {
        let digest_hex = sha1_hex_upper(candidate);
        let (prefix, suffix) = split_digest(&digest_hex);

        let body = self.fetch_range(prefix).await?;
        find_suffix_count(&body, suffix)
    }

    /// Fetch the raw record list for a digest prefix.
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        // Logs carry the prefix only, never the suffix or the candidate.
        debug!("querying breach range for prefix {prefix}");

        let url = format!("{}/range/{prefix}", self.config.api_base_url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
