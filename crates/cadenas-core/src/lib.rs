//! `cadenas-core` — Pure password analysis and generation primitives for CADENAS.
//!
//! This crate is the audit target: zero network, zero async, zero UI
//! dependencies. Every function is total over its documented input domain;
//! the only fallible operations in CADENAS live in `cadenas-breach`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod audit;

pub mod generator;

pub mod strength;

pub use audit::{
    audit_vault, is_password_reused, AuditEntry, EntryRef, ReusedGroup, VaultAuditReport,
    WeakEntry,
};
pub use generator::{
    generate_password, generate_password_with_rng, GeneratorOptions, DEFAULT_PASSWORD_LENGTH,
};
pub use strength::{evaluate_password, StrengthColor, StrengthLevel, StrengthReport};
