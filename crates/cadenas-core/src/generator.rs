//! Random password generation.
//!
//! Character-based generation with configurable class inclusion. Guarantees
//! at least one character from each enabled class, then fills and
//! Fisher-Yates shuffles. Production callers go through
//! [`generate_password`], which draws from `OsRng` (OS-level CSPRNG); the
//! RNG-injected variant exists so tests can seed deterministically.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

// Character classes, in the fixed class order used everywhere below:
// lowercase, uppercase, numbers, symbols.
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character classes to include in a generated password.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub numbers: bool,
    /// Include symbols (!@#$%^&*...).
    pub symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// Number of enabled classes, 0..=4.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_lossless)] // four booleans sum to at most 4
    pub const fn enabled_count(&self) -> usize {
        self.lowercase as usize
            + self.uppercase as usize
            + self.numbers as usize
            + self.symbols as usize
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random password of `length` characters using `OsRng`.
///
/// See [`generate_password_with_rng`] for the algorithm and the two
/// documented edge cases. Total: every `length`/`options` combination
/// produces a password.
#[must_use]
pub fn generate_password(length: usize, options: &GeneratorOptions) -> String {
    let mut rng = rand::rngs::OsRng;
    generate_password_with_rng(length, options, &mut rng)
}

/// Generate a random password, drawing all randomness from `rng`.
///
/// Algorithm: build the active pool from the enabled classes in class order
/// (lowercase, uppercase, numbers, symbols); seed one character per enabled
/// class, in class order; fill the remaining positions uniformly from the
/// pool; Fisher-Yates shuffle the result so the seeded characters are not
/// predictably placed.
///
/// Edge cases, both deliberate:
/// - All classes disabled: the pool falls back to the union of all four
///   classes. No seeding happens in that case (seeding is per *enabled*
///   class), so the output is exactly `length` characters from the union.
/// - `length` below the enabled-class count: the seed step still inserts one
///   character per enabled class, so the output is longer than requested.
///
/// The returned string always has `max(length, enabled-class-count)` characters.
#[must_use]
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    length: usize,
    options: &GeneratorOptions,
    rng: &mut R,
) -> String {
    let mut pool: Vec<u8> = Vec::new();
    if options.lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if options.uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if options.numbers {
        pool.extend_from_slice(NUMBERS);
    }
    if options.symbols {
        pool.extend_from_slice(SYMBOLS);
    }

    // All classes disabled: fall back to the full union instead of failing.
    if pool.is_empty() {
        pool.extend_from_slice(LOWERCASE);
        pool.extend_from_slice(UPPERCASE);
        pool.extend_from_slice(NUMBERS);
        pool.extend_from_slice(SYMBOLS);
    }

    // One mandatory character per enabled class, in class order.
    let mut chars: Vec<u8> = Vec::with_capacity(length.max(4));
    if options.lowercase {
        chars.push(pick(LOWERCASE, rng));
    }
    if options.uppercase {
        chars.push(pick(UPPERCASE, rng));
    }
    if options.numbers {
        chars.push(pick(NUMBERS, rng));
    }
    if options.symbols {
        chars.push(pick(SYMBOLS, rng));
    }

    // Fill up to `length`; an empty range when the seeds already exceed it.
    for _ in chars.len()..length {
        chars.push(pick(&pool, rng));
    }

    // Fisher-Yates shuffle to eliminate positional bias.
    chars.shuffle(rng);

    // All classes are ASCII, so byte-to-char conversion is direct.
    chars.into_iter().map(char::from).collect()
}

/// One uniform draw from `set`.
fn pick<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.gen_range(0..set.len())]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn default_length_password() {
        let pw = generate_password(DEFAULT_PASSWORD_LENGTH, &GeneratorOptions::default());
        assert_eq!(pw.chars().count(), DEFAULT_PASSWORD_LENGTH);
    }

    #[test]
    fn contains_all_enabled_classes() {
        // Generate 50 passwords and verify each contains one of each class.
        for _ in 0..50 {
            let pw = generate_password(16, &GeneratorOptions::default());
            assert!(
                pw.chars().any(|c| c.is_ascii_lowercase()),
                "missing lowercase in: {pw}"
            );
            assert!(
                pw.chars().any(|c| c.is_ascii_uppercase()),
                "missing uppercase in: {pw}"
            );
            assert!(
                pw.chars().any(|c| c.is_ascii_digit()),
                "missing digit in: {pw}"
            );
            assert!(
                pw.chars().any(|c| !c.is_ascii_alphanumeric()),
                "missing symbol in: {pw}"
            );
        }
    }

    #[test]
    fn lowercase_only() {
        let options = GeneratorOptions {
            lowercase: true,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        let pw = generate_password(16, &options);
        assert!(
            pw.chars().all(|c| c.is_ascii_lowercase()),
            "not all lowercase: {pw}"
        );
    }

    #[test]
    fn uppercase_only() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: true,
            numbers: false,
            symbols: false,
        };
        let pw = generate_password(16, &options);
        assert!(
            pw.chars().all(|c| c.is_ascii_uppercase()),
            "not all uppercase: {pw}"
        );
    }

    #[test]
    fn numbers_only() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            numbers: true,
            symbols: false,
        };
        let pw = generate_password(16, &options);
        assert!(pw.chars().all(|c| c.is_ascii_digit()), "not all digits: {pw}");
    }

    #[test]
    fn symbols_only() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: true,
        };
        let pw = generate_password(16, &options);
        let symbol_set: HashSet<u8> = SYMBOLS.iter().copied().collect();
        assert!(
            pw.bytes().all(|b| symbol_set.contains(&b)),
            "not all symbols: {pw}"
        );
    }

    #[test]
    fn all_disabled_falls_back_to_union() {
        let options = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        let pw = generate_password(16, &options);
        // No seeding happens in the fallback, so the length is exact.
        assert_eq!(pw.chars().count(), 16);
        let union: HashSet<u8> = [LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS]
            .iter()
            .flat_map(|set| set.iter().copied())
            .collect();
        assert!(
            pw.bytes().all(|b| union.contains(&b)),
            "char outside the union in: {pw}"
        );
    }

    #[test]
    fn short_length_still_covers_enabled_classes() {
        // Four enabled classes and length 2: the seeds win, output has 4 chars.
        let pw = generate_password(2, &GeneratorOptions::default());
        assert_eq!(pw.chars().count(), 4);
        assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pw.chars().any(|c| c.is_ascii_digit()));
        assert!(pw.chars().any(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn zero_length_yields_only_seeds() {
        let pw = generate_password(0, &GeneratorOptions::default());
        assert_eq!(pw.chars().count(), 4);
    }

    #[test]
    fn uniqueness_over_many_draws() {
        let passwords: HashSet<String> = (0..1000)
            .map(|_| generate_password(16, &GeneratorOptions::default()))
            .collect();
        assert_eq!(passwords.len(), 1000, "generated duplicate passwords");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);
        let first = generate_password_with_rng(16, &GeneratorOptions::default(), &mut first_rng);
        let second = generate_password_with_rng(16, &GeneratorOptions::default(), &mut second_rng);
        assert_eq!(first, second, "same seed must reproduce the same password");
    }

    #[test]
    fn enabled_count_matches_flags() {
        assert_eq!(GeneratorOptions::default().enabled_count(), 4);
        let none = GeneratorOptions {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(none.enabled_count(), 0);
        let two = GeneratorOptions {
            lowercase: true,
            uppercase: false,
            numbers: true,
            symbols: false,
        };
        assert_eq!(two.enabled_count(), 2);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        // Missing keys default to true, matching the all-true default config.
        let options: GeneratorOptions = serde_json::from_str(r#"{"symbols": false}"#).unwrap();
        assert!(options.lowercase);
        assert!(options.uppercase);
        assert!(options.numbers);
        assert!(!options.symbols);
    }
}
