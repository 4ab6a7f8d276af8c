//! Property-based tests for code classification and hierarchy validation.

use proptest::prelude::*;

use super::analyzer::{AccountType, classify, derive_parent_code};
use super::error::HierarchyError;
use super::hierarchy::validate_hierarchy;

/// Strategy to generate a digit-only code of exactly `len` digits.
fn digits(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy to generate a digit-only code with a canonical length.
fn canonical_code() -> impl Strategy<Value = String> {
    prop_oneof![digits(1), digits(2), digits(4), digits(6), (7usize..12).prop_flat_map(digits)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Canonical lengths always classify, with the level fixed by the length.
    #[test]
    fn prop_canonical_lengths_are_valid(code in canonical_code()) {
        let result = classify(&code);
        prop_assert!(result.is_valid());

        let expected = match code.len() {
            1 => 1,
            2 => 2,
            4 => 3,
            6 => 4,
            _ => 5,
        };
        prop_assert_eq!(result.level, expected);
        prop_assert_eq!(result.account_type.level(), expected);
    }

    /// Lengths 3 and 5 never classify.
    #[test]
    fn prop_in_between_lengths_are_invalid(code in prop_oneof![digits(3), digits(5)]) {
        let result = classify(&code);
        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.account_type, AccountType::Incomplete);
    }

    /// Any string with a non-digit character is rejected without panicking.
    #[test]
    fn prop_non_digit_strings_are_invalid(
        prefix in "[0-9]{0,4}",
        bad in "[^0-9]",
        suffix in "\\PC{0,6}",
    ) {
        let code = format!("{prefix}{bad}{suffix}");
        prop_assert!(!classify(&code).is_valid());
    }

    /// Two codes of the same length always share type and level.
    #[test]
    fn prop_classification_depends_only_on_length(
        len in 1usize..12,
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let a: String = (0..len).map(|i| char::from(b'0' + ((seed_a >> (i % 16)) % 10) as u8)).collect();
        let b: String = (0..len).map(|i| char::from(b'0' + ((seed_b >> (i % 16)) % 10) as u8)).collect();
        prop_assert_eq!(classify(&a), classify(&b));
    }

    /// A code extending a non-empty proper prefix validates against it.
    #[test]
    fn prop_proper_prefix_parent_is_valid(code in canonical_code(), cut in 1usize..12) {
        prop_assume!(cut < code.len());
        let parent = &code[..cut];
        prop_assert_eq!(validate_hierarchy(&code, Some(parent)), Ok(()));
    }

    /// A code never validates against itself.
    #[test]
    fn prop_self_parent_is_rejected(code in canonical_code()) {
        prop_assert_eq!(
            validate_hierarchy(&code, Some(code.as_str())),
            Err(HierarchyError::EqualsParent)
        );
    }

    /// The derived parent is a proper prefix that itself validates as the parent.
    #[test]
    fn prop_derived_parent_is_valid_parent(code in canonical_code()) {
        match derive_parent_code(&code) {
            Some(parent) => {
                prop_assert!(classify(&parent).is_valid());
                prop_assert!(code.starts_with(&parent));
                prop_assert_eq!(validate_hierarchy(&code, Some(parent.as_str())), Ok(()));
            }
            None => prop_assert_eq!(code.len(), 1),
        }
    }
}
