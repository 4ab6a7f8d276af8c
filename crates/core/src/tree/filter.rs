//! Prefix search over account trees.

use super::types::{MatchTier, TreeNode};

/// Keeps the nodes whose code starts with `prefix`, plus their ancestors.
///
/// Ancestors that do not match themselves are kept as connective nodes with
/// no match tier. Matching nodes are tagged [`MatchTier::Exact`] or
/// [`MatchTier::Descendant`]. The prefix is trimmed before matching.
#[must_use]
pub fn filter_by_prefix(forest: &[TreeNode], prefix: &str) -> Vec<TreeNode> {
    let prefix = prefix.trim();
    forest
        .iter()
        .filter_map(|node| filter_node(node, prefix))
        .collect()
}

fn filter_node(node: &TreeNode, prefix: &str) -> Option<TreeNode> {
    let children: Vec<TreeNode> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, prefix))
        .collect();
    let match_tier = MatchTier::of(node.code(), prefix);

    if match_tier.is_none() && children.is_empty() {
        return None;
    }

    Some(TreeNode {
        account: node.account.clone(),
        match_tier,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::tree::builder::build_tree;

    fn forest() -> Vec<TreeNode> {
        build_tree(&[
            Account::new("1", "Activo"),
            Account::new("11", "Disponible"),
            Account::new("1105", "Caja"),
            Account::new("110505", "Caja general"),
            Account::new("12", "Inversiones"),
            Account::new("2", "Pasivo"),
            Account::new("21", "Obligaciones financieras"),
        ])
    }

    #[test]
    fn test_keeps_matches_and_ancestors() {
        let filtered = filter_by_prefix(&forest(), "11");

        assert_eq!(filtered.len(), 1);
        let root = &filtered[0];
        assert_eq!(root.code(), "1");
        assert_eq!(root.match_tier, None);
        assert_eq!(root.child_count(), 1);

        let group = &root.children[0];
        assert_eq!(group.code(), "11");
        assert_eq!(group.match_tier, Some(MatchTier::Exact));
        assert_eq!(group.children[0].match_tier, Some(MatchTier::Descendant));
        assert_eq!(
            group.children[0].children[0].match_tier,
            Some(MatchTier::Descendant)
        );
    }

    #[test]
    fn test_no_matches() {
        assert!(filter_by_prefix(&forest(), "9").is_empty());
    }

    #[test]
    fn test_prefix_is_trimmed() {
        let filtered = filter_by_prefix(&forest(), " 2 ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].match_tier, Some(MatchTier::Exact));
        assert_eq!(filtered[0].children[0].code(), "21");
    }

    #[test]
    fn test_orphan_matches_surface_as_roots() {
        let forest = build_tree(&[
            Account::new("1", "Activo"),
            Account::new("1105", "Caja").with_parent("11"),
        ]);
        let filtered = filter_by_prefix(&forest, "1105");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].code(), "1105");
        assert_eq!(filtered[0].match_tier, Some(MatchTier::Exact));
    }
}
