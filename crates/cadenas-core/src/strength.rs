//! Password strength evaluation.
//!
//! Scores a secret against a fixed additive rubric and maps the score to a
//! discrete strength tier with display metadata. Pure and total: no I/O, no
//! randomness, and every input (including the empty string) has a defined
//! result.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rubric data
// ---------------------------------------------------------------------------

/// Characters the rubric counts as special.
///
/// Wider than the generator's symbol class (this set also has `'`, `:`, `"`
/// and `\`); the two sets are independent and must stay that way.
const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Ascending three-character runs that trigger the sequential penalty.
/// Matched case-insensitively.
const SEQUENTIAL_RUNS: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl",
    "klm", "lmn", "mno", "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv",
    "uvw", "vwx", "wxy", "xyz", "012", "123", "234", "345", "456", "567",
    "678", "789",
];

/// One rubric rule: a predicate over the whole secret, the points awarded
/// when it holds, and the feedback message emitted when it does not.
type Rule = (fn(&str) -> bool, u8, &'static str);

/// Character-class and pattern rules, applied after the length tiers.
/// Evaluation order fixes the feedback message order.
const RULES: &[Rule] = &[
    (has_lowercase, 10, "Add lowercase letters"),
    (has_uppercase, 10, "Add uppercase letters"),
    (has_digit, 10, "Add numbers"),
    (has_special, 20, "Add special characters (!@#$%^&*)"),
    (no_repeated_run, 10, "Avoid repeated characters"),
    (no_sequential_run, 10, "Avoid sequential characters"),
];

/// Feedback when no rule failed.
const FEEDBACK_ALL_CLEAR: &str = "Password looks good!";

/// Feedback for the empty-input short circuit.
const FEEDBACK_EMPTY: &str = "Password is empty";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Discrete strength tier derived from the rubric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Map a rubric score to its tier (descending thresholds, first match wins).
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::VeryStrong
        } else if score >= 60 {
            Self::Strong
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    /// Machine-readable label, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Indicator color for this tier.
    #[must_use]
    pub const fn color(self) -> StrengthColor {
        match self {
            Self::Weak => StrengthColor::Red,
            Self::Medium => StrengthColor::Yellow,
            Self::Strong | Self::VeryStrong => StrengthColor::Green,
        }
    }

    /// Strength-bar fill percentage. A fixed value per tier, not the score.
    #[must_use]
    pub const fn percentage(self) -> u8 {
        match self {
            Self::Weak => 30,
            Self::Medium => 50,
            Self::Strong => 80,
            Self::VeryStrong => 100,
        }
    }
}

/// Indicator color, presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Red,
    Yellow,
    Green,
}

impl StrengthColor {
    /// Machine-readable label, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Result of a single strength evaluation.
///
/// Serializes with camelCase keys for direct frontend consumption. The two
/// display-only fields are omitted entirely (not defaulted) on the
/// empty-input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Additive rubric total, 0..=110. Unclamped: the tier thresholds
    /// saturate the effective range instead.
    pub score: u8,
    /// Strength tier derived from `score`.
    pub level: StrengthLevel,
    /// Indicator color derived from `level`.
    pub color: StrengthColor,
    /// Strength-bar fill value; `None` only for empty input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
    /// Human label for `level`; `None` only for empty input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<&'static str>,
    /// Deficiency messages joined with `", "`, or a single all-clear sentence.
    pub feedback: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate the strength of `password` against the additive rubric.
///
/// Length tiers come first (8/12/16 characters, cumulative), then each rule
/// in [`RULES`] order: character classes, repeated runs, sequential runs.
/// Deficiency messages accumulate in the same order.
///
/// Length is counted in Unicode scalar values; all class and pattern rules
/// operate on ASCII only.
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // rubric total caps at 110, far below u8::MAX
pub fn evaluate_password(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            level: StrengthLevel::Weak,
            color: StrengthColor::Red,
            percentage: None,
            display_text: None,
            feedback: FEEDBACK_EMPTY.to_string(),
        };
    }

    let mut score: u8 = 0;
    let mut feedback: Vec<&'static str> = Vec::new();

    // Length tiers stack: a 16+ char secret collects all three bonuses.
    let length = password.chars().count();
    if length >= 8 {
        score += 10;
    }
    if length >= 12 {
        score += 15;
    }
    if length >= 16 {
        score += 15;
    }
    if length < 8 {
        feedback.push("Use at least 8 characters");
    }

    for &(rule_holds, points, message) in RULES {
        if rule_holds(password) {
            score += points;
        } else {
            feedback.push(message);
        }
    }

    let level = StrengthLevel::from_score(score);
    let feedback = if feedback.is_empty() {
        FEEDBACK_ALL_CLEAR.to_string()
    } else {
        feedback.join(", ")
    };

    StrengthReport {
        score,
        level,
        color: level.color(),
        percentage: Some(level.percentage()),
        display_text: Some(level.display_text()),
        feedback,
    }
}

// ---------------------------------------------------------------------------
// Rubric predicates
// ---------------------------------------------------------------------------

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// A byte scan is exact here: UTF-8 continuation bytes are never in the
/// ASCII range, so a hit is always a real special character.
fn has_special(s: &str) -> bool {
    s.bytes().any(|b| SPECIAL_CHARS.contains(&b))
}

/// Holds when no character occurs 3+ times consecutively.
#[allow(clippy::arithmetic_side_effects)] // run length is bounded by the input length
fn no_repeated_run(s: &str) -> bool {
    let mut run = 0u32;
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return false;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    true
}

/// Holds when no entry of [`SEQUENTIAL_RUNS`] occurs in `s`, ignoring ASCII case.
fn no_sequential_run(s: &str) -> bool {
    let lowered = s.to_ascii_lowercase();
    !SEQUENTIAL_RUNS.iter().any(|run| lowered.contains(run))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
