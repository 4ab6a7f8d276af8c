//! Property-based tests for import reconciliation.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use super::reconciler::reconcile_import;
use super::types::{Decision, ImportOptions, RawRow};

/// Strategy to generate a messy raw code: mostly digits, sometimes noise.
fn raw_code() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[1-3]{1,8}",
        1 => "[1-3 .-]{0,8}",
        1 => "[a-z1-3]{1,4}",
    ]
}

/// Strategy to generate a raw row with an optional declared parent.
fn raw_row() -> impl Strategy<Value = RawRow> {
    (raw_code(), proptest::option::of("[1-3]{1,6}")).prop_map(|(code, parent)| RawRow {
        parent_code: parent,
        ..RawRow::new(code)
    })
}

fn options() -> impl Strategy<Value = ImportOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(overwrite_existing, validate_hierarchy)| {
        ImportOptions {
            overwrite_existing,
            validate_hierarchy,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same input, same output.
    #[test]
    fn prop_reconcile_is_deterministic(
        rows in proptest::collection::vec(raw_row(), 0..30),
        existing in proptest::collection::hash_set("[1-3]{1,6}", 0..10),
        options in options(),
    ) {
        let first = reconcile_import(&rows, &existing, options);
        let second = reconcile_import(&rows, &existing, options);
        prop_assert_eq!(first, second);
    }

    /// Every row ends up accepted or rejected, and accepted codes are unique.
    #[test]
    fn prop_rows_are_partitioned(
        rows in proptest::collection::vec(raw_row(), 0..30),
        existing in proptest::collection::hash_set("[1-3]{1,6}", 0..10),
        options in options(),
    ) {
        let report = reconcile_import(&rows, &existing, options);
        prop_assert_eq!(report.accepted.len() + report.rejected.len(), rows.len());
        prop_assert_eq!(report.stats.total_rows, rows.len());

        let codes: BTreeSet<&str> = report.accepted.iter().map(|r| r.account.code.as_str()).collect();
        prop_assert_eq!(codes.len(), report.accepted.len());

        for row in &report.accepted {
            let exists = existing.contains(&row.account.code);
            prop_assert_eq!(row.decision == Decision::Update, exists);
            prop_assert!(!exists || options.overwrite_existing);
        }
    }

    /// Orphan warnings do not depend on row order when codes are unique.
    #[test]
    fn prop_orphans_ignore_row_order(
        codes in proptest::collection::btree_set("[1-3]{1,6}", 0..20),
        existing in proptest::collection::hash_set("[1-3]{1,2}", 0..4),
    ) {
        let rows: Vec<RawRow> = codes
            .iter()
            .map(|code| {
                let row = RawRow::new(code.clone());
                match crate::code::derive_parent_code(code) {
                    Some(parent) => row.with_parent(parent),
                    None => row,
                }
            })
            .collect();
        let mut reversed = rows.clone();
        reversed.reverse();

        let existing: HashSet<String> = existing;
        let options = ImportOptions { overwrite_existing: true, validate_hierarchy: true };
        let forward = reconcile_import(&rows, &existing, options);
        let backward = reconcile_import(&reversed, &existing, options);

        let orphan_codes = |warnings: &[super::types::RowIssue]| {
            warnings.iter().map(|w| w.code.clone()).collect::<BTreeSet<_>>()
        };
        prop_assert_eq!(forward.stats.orphans, backward.stats.orphans);
        prop_assert_eq!(orphan_codes(&forward.warnings), orphan_codes(&backward.warnings));
    }
}
