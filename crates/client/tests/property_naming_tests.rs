//! Property tests for identifier normalization.
//!
//! # Invariants
//! - Normalized identifiers carry no separator characters.
//! - The first character stays lower-case for snake_case input.
//! - Letters and digits keep their relative order.

use fms_client::camelize;
use proptest::prelude::*;

/// snake_case identifiers: lower-case words joined by single underscores.
const SNAKE_CASE: &str = "[a-z][a-z0-9]{0,8}(_[a-z0-9]{1,8}){0,4}";

proptest! {
    #[test]
    fn output_has_no_separators(ident in SNAKE_CASE) {
        let out = camelize(&ident);
        prop_assert!(!out.contains('_'));
    }

    #[test]
    fn first_character_stays_lower_case(ident in SNAKE_CASE) {
        let out = camelize(&ident);
        let first = out.chars().next().unwrap();
        prop_assert!(first.is_ascii_lowercase() || first.is_ascii_digit());
    }

    #[test]
    fn letters_and_digits_keep_their_order(ident in SNAKE_CASE) {
        let out = camelize(&ident);
        let expected: String = ident.chars().filter(|c| *c != '_').collect();
        prop_assert_eq!(out.to_ascii_lowercase(), expected);
    }

    #[test]
    fn normalization_is_idempotent(ident in SNAKE_CASE) {
        let once = camelize(&ident);
        prop_assert_eq!(camelize(&once), once);
    }
}
