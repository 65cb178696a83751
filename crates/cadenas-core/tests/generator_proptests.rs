#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the password generator.

use cadenas_core::generator::{generate_password_with_rng, GeneratorOptions};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    /// Strategy over all sixteen class-flag combinations.
    fn options_strategy()(
        lowercase in any::<bool>(),
        uppercase in any::<bool>(),
        numbers in any::<bool>(),
        symbols in any::<bool>(),
    ) -> GeneratorOptions {
        GeneratorOptions { lowercase, uppercase, numbers, symbols }
    }
}

proptest! {
    /// Output length is exactly `max(length, enabled-class-count)`.
    #[test]
    fn output_length_law(
        length in 0usize..64,
        options in options_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pw = generate_password_with_rng(length, &options, &mut rng);
        let expected = length.max(options.enabled_count());
        prop_assert_eq!(
            pw.chars().count(),
            expected,
            "length {} with {:?} produced: {}",
            length,
            options,
            pw
        );
    }

    /// Every enabled class contributes at least one character.
    #[test]
    fn enabled_classes_are_covered(
        length in 0usize..64,
        options in options_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pw = generate_password_with_rng(length, &options, &mut rng);
        if options.lowercase {
            prop_assert!(pw.chars().any(|c| c.is_ascii_lowercase()), "missing lowercase in {}", pw);
        }
        if options.uppercase {
            prop_assert!(pw.chars().any(|c| c.is_ascii_uppercase()), "missing uppercase in {}", pw);
        }
        if options.numbers {
            prop_assert!(pw.chars().any(|c| c.is_ascii_digit()), "missing digit in {}", pw);
        }
        if options.symbols {
            prop_assert!(pw.chars().any(|c| !c.is_ascii_alphanumeric()), "missing symbol in {}", pw);
        }
    }

    /// Characters only come from the active pool; when nothing is enabled the
    /// pool is the union of all four classes.
    #[test]
    fn output_stays_inside_the_pool(
        length in 0usize..64,
        options in options_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pw = generate_password_with_rng(length, &options, &mut rng);

        let fallback = options.enabled_count() == 0;
        let mut allowed = String::new();
        if options.lowercase || fallback {
            allowed.push_str("abcdefghijklmnopqrstuvwxyz");
        }
        if options.uppercase || fallback {
            allowed.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        }
        if options.numbers || fallback {
            allowed.push_str("0123456789");
        }
        if options.symbols || fallback {
            allowed.push_str("!@#$%^&*()_+-=[]{}|;:,.<>?");
        }

        for c in pw.chars() {
            prop_assert!(allowed.contains(c), "char {:?} outside the active pool", c);
        }
    }

    /// The same seed reproduces the same password.
    #[test]
    fn seed_determinism(
        length in 0usize..64,
        options in options_strategy(),
        seed in any::<u64>(),
    ) {
        let mut first_rng = StdRng::seed_from_u64(seed);
        let mut second_rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            generate_password_with_rng(length, &options, &mut first_rng),
            generate_password_with_rng(length, &options, &mut second_rng)
        );
    }
}
