//! Property-based tests for tree building and prefix filtering.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::builder::{build_tree, count_descendants, flatten};
use super::filter::filter_by_prefix;
use super::types::TreeNode;
use crate::account::Account;

/// Strategy to generate a code over a narrow alphabet so prefixes collide often.
fn code() -> impl Strategy<Value = String> {
    prop_oneof![Just(1usize), Just(2), Just(4), Just(6), Just(8)].prop_flat_map(|len| {
        proptest::collection::vec(proptest::char::range('1', '3'), len)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    })
}

/// Strategy to generate a chart with unique codes and optional declared parents.
fn chart() -> impl Strategy<Value = Vec<Account>> {
    proptest::collection::btree_set(code(), 0..40).prop_flat_map(|codes: BTreeSet<String>| {
        let codes: Vec<String> = codes.into_iter().collect();
        let len = codes.len();
        (Just(codes), proptest::collection::vec(0usize..8, len)).prop_map(|(codes, cuts)| {
            codes
                .into_iter()
                .zip(cuts)
                .map(|(code, cut)| {
                    let account = Account::new(code.clone(), "cuenta");
                    if cut > 0 && cut < code.len() {
                        account.with_parent(&code[..cut])
                    } else {
                        account
                    }
                })
                .collect()
        })
    })
}

fn edges(forest: &[TreeNode]) -> BTreeSet<(Option<String>, String)> {
    fn walk(node: &TreeNode, parent: Option<&str>, out: &mut BTreeSet<(Option<String>, String)>) {
        out.insert((parent.map(str::to_string), node.code().to_string()));
        for child in &node.children {
            walk(child, Some(node.code()), out);
        }
    }

    let mut out = BTreeSet::new();
    for node in forest {
        walk(node, None, &mut out);
    }
    out
}

fn all_nodes(forest: &[TreeNode]) -> Vec<&TreeNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter());
    }
    out
}

fn has_match(node: &TreeNode, prefix: &str) -> bool {
    node.code().starts_with(prefix) || node.children.iter().any(|c| has_match(c, prefix))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rebuilding from a flattened forest reproduces every parent/child edge.
    #[test]
    fn prop_flatten_round_trip(accounts in chart()) {
        let forest = build_tree(&accounts);
        let rebuilt = build_tree(&flatten(&forest));
        prop_assert_eq!(edges(&forest), edges(&rebuilt));
    }

    /// Every input account appears exactly once in the forest.
    #[test]
    fn prop_every_account_is_placed(accounts in chart()) {
        let forest = build_tree(&accounts);
        let placed: usize = forest.iter().map(|root| 1 + count_descendants(root)).sum();
        prop_assert_eq!(placed, accounts.len());
    }

    /// Children are always in ascending code order.
    #[test]
    fn prop_children_sorted(accounts in chart()) {
        let forest = build_tree(&accounts);
        let roots: Vec<&str> = forest.iter().map(TreeNode::code).collect();
        prop_assert!(roots.windows(2).all(|w| w[0] <= w[1]));
        for node in all_nodes(&forest) {
            prop_assert!(node.children.windows(2).all(|w| w[0].code() <= w[1].code()));
        }
    }

    /// Filtering never keeps a node that neither matches nor leads to a match,
    /// and never drops a matching node.
    #[test]
    fn prop_filter_is_sound_and_complete(accounts in chart(), prefix in code()) {
        let forest = build_tree(&accounts);
        let filtered = filter_by_prefix(&forest, &prefix);

        for node in all_nodes(&filtered) {
            prop_assert!(has_match(node, &prefix));
        }

        let expected = all_nodes(&forest)
            .into_iter()
            .filter(|n| n.code().starts_with(&prefix))
            .count();
        let kept = all_nodes(&filtered)
            .into_iter()
            .filter(|n| n.match_tier.is_some())
            .count();
        prop_assert_eq!(kept, expected);
    }
}
