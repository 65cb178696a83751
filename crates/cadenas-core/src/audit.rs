//! Vault-wide password audit.
//!
//! Aggregates per-entry strength evaluation and duplicate detection into
//! dashboard statistics: total/strong/weak counts, reused-password groups,
//! and an overall security score. Runs over caller-supplied entries; the
//! report carries identifiers and names only, never password material.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::strength::{evaluate_password, StrengthLevel};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One vault entry submitted for audit.
///
/// `Debug` is manually implemented to mask the password and prevent
/// accidental logging of secret material.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Stable entry identifier.
    pub id: String,
    /// Display name (site or account).
    pub name: String,
    /// The stored password, analyzed locally and never echoed back.
    pub password: String,
}

impl fmt::Debug for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

/// A secret-free reference to an entry (ID + name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRef {
    pub id: String,
    pub name: String,
}

/// A group of entries sharing the same password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReusedGroup {
    pub entries: Vec<EntryRef>,
}

/// An entry whose password falls below the strong tiers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakEntry {
    pub id: String,
    pub name: String,
    pub level: StrengthLevel,
}

/// Aggregate audit result for a whole vault.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAuditReport {
    /// Overall security score (0-100).
    pub security_score: u32,
    /// Total entries analyzed.
    pub total_entries: u32,

    /// Entries whose password evaluates Strong or VeryStrong.
    pub strong_count: u32,

    /// Entries whose password evaluates Weak or Medium.
    pub weak_count: u32,
    pub weak_entries: Vec<WeakEntry>,

    /// Entries sharing a password with at least one other entry.
    pub reused_count: u32,
    pub reused_groups: Vec<ReusedGroup>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check whether `candidate` already appears in `existing` (exact string match).
#[must_use]
pub fn is_password_reused<S: AsRef<str>>(candidate: &str, existing: &[S]) -> bool {
    existing.iter().any(|p| p.as_ref() == candidate)
}

/// Audit `entries` and aggregate the dashboard statistics.
///
/// Two checks per entry: strength tier and password reuse. The score starts
/// at 100 and loses `issues * 100 / (total * 2)` points, where issues is the
/// number of weak entries plus the number of entries inside reused groups.
/// An empty vault scores 100.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn audit_vault(entries: &[AuditEntry]) -> VaultAuditReport {
    if entries.is_empty() {
        return VaultAuditReport {
            security_score: 100,
            total_entries: 0,
            strong_count: 0,
            weak_count: 0,
            weak_entries: Vec::new(),
            reused_count: 0,
            reused_groups: Vec::new(),
        };
    }

    let total_entries = entries.len() as u32;

    // BLAKE3 hash per password for reuse grouping; strength tier per entry.
    let mut password_hashes: Vec<([u8; 32], EntryRef)> = Vec::with_capacity(entries.len());
    let mut weak_entries: Vec<WeakEntry> = Vec::new();
    let mut strong_count: u32 = 0;

    for entry in entries {
        let hash: [u8; 32] = blake3::hash(entry.password.as_bytes()).into();
        password_hashes.push((
            hash,
            EntryRef {
                id: entry.id.clone(),
                name: entry.name.clone(),
            },
        ));

        let level = evaluate_password(&entry.password).level;
        if matches!(level, StrengthLevel::Strong | StrengthLevel::VeryStrong) {
            strong_count += 1;
        } else {
            weak_entries.push(WeakEntry {
                id: entry.id.clone(),
                name: entry.name.clone(),
                level,
            });
        }
    }

    let reused_groups = find_reused_groups(password_hashes);
    let reused_count: u32 = reused_groups.iter().map(|g| g.entries.len() as u32).sum();
    let weak_count = weak_entries.len() as u32;

    // Two checks per entry; the score drops with the share of failed checks.
    let issues = weak_count + reused_count;
    let total_checks = total_entries * 2;
    let penalty = (issues * 100) / total_checks;
    let security_score = 100u32.saturating_sub(penalty);

    VaultAuditReport {
        security_score,
        total_entries,
        strong_count,
        weak_count,
        weak_entries,
        reused_count,
        reused_groups,
    }
}

/// Group entries sharing a password (2+ members only).
///
/// Grouping compares BLAKE3 hashes, never the passwords themselves.
fn find_reused_groups(hashes: Vec<([u8; 32], EntryRef)>) -> Vec<ReusedGroup> {
    let mut groups: HashMap<[u8; 32], Vec<EntryRef>> = HashMap::new();
    for (hash, entry) in hashes {
        groups.entry(hash).or_default().push(entry);
    }

    groups
        .into_values()
        .filter(|g| g.len() >= 2)
        .map(|entries| ReusedGroup { entries })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
