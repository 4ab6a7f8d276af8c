//! Forest assembly from flat account lists.

use std::collections::HashMap;

use tracing::debug;

use super::types::TreeNode;
use crate::account::Account;
use crate::code::derive_parent_code;

/// Builds a forest from a flat list of accounts.
///
/// Accounts are ordered by code. Each one hangs under the node matching its
/// declared parent code; failing that, under its derived parent; failing
/// that, it becomes a root. Missing parents never cause an error, so a
/// partial chart still renders.
///
/// Parents must have strictly shorter codes, which rules out cycles even for
/// inconsistent input. When a code appears twice, children attach to the
/// first occurrence. The input is not modified.
#[must_use]
pub fn build_tree(accounts: &[Account]) -> Vec<TreeNode> {
    let mut order: Vec<usize> = (0..accounts.len()).collect();
    order.sort_by(|&a, &b| accounts[a].code.cmp(&accounts[b].code));

    let mut by_code: HashMap<&str, usize> = HashMap::with_capacity(accounts.len());
    for &index in &order {
        by_code.entry(accounts[index].code.as_str()).or_insert(index);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); accounts.len()];
    let mut roots = Vec::new();
    for &index in &order {
        match resolve_parent(&accounts[index], &by_code) {
            Some(parent) => children[parent].push(index),
            None => roots.push(index),
        }
    }

    debug!(
        accounts = accounts.len(),
        roots = roots.len(),
        "Built account tree"
    );

    roots
        .into_iter()
        .map(|index| materialize(index, accounts, &children))
        .collect()
}

fn resolve_parent(account: &Account, by_code: &HashMap<&str, usize>) -> Option<usize> {
    let code = account.code.as_str();
    let lookup = |candidate: &str| {
        if candidate.is_empty() || candidate.len() >= code.len() {
            return None;
        }
        by_code.get(candidate).copied()
    };

    account
        .parent_code
        .as_deref()
        .and_then(lookup)
        .or_else(|| derive_parent_code(code).and_then(|parent| lookup(&parent)))
}

fn materialize(index: usize, accounts: &[Account], children: &[Vec<usize>]) -> TreeNode {
    TreeNode {
        account: accounts[index].clone(),
        match_tier: None,
        children: children[index]
            .iter()
            .map(|&child| materialize(child, accounts, children))
            .collect(),
    }
}

/// Flattens a forest back into accounts, parents before children.
#[must_use]
pub fn flatten(forest: &[TreeNode]) -> Vec<Account> {
    fn walk(node: &TreeNode, out: &mut Vec<Account>) {
        out.push(node.account.clone());
        for child in &node.children {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    for node in forest {
        walk(node, &mut out);
    }
    out
}

/// Counts every node below `node`, excluding the node itself.
#[must_use]
pub fn count_descendants(node: &TreeNode) -> usize {
    node.children
        .iter()
        .map(|child| 1 + count_descendants(child))
        .sum()
}

/// Finds the node with the given code anywhere in the forest.
#[must_use]
pub fn find<'a>(forest: &'a [TreeNode], code: &str) -> Option<&'a TreeNode> {
    forest.iter().find_map(|node| {
        if node.code() == code {
            Some(node)
        } else {
            find(&node.children, code)
        }
    })
}

/// Returns the number of levels in the forest (0 when empty).
#[must_use]
pub fn depth(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + depth(&node.children))
        .max()
        .unwrap_or(0)
}
