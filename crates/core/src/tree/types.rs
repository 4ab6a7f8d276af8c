//! Tree node types.

use serde::Serialize;

use crate::account::Account;

/// How a node relates to a prefix search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// The node's code equals the prefix.
    Exact,
    /// The node's code extends the prefix.
    Descendant,
}

impl MatchTier {
    /// Classifies `code` against `prefix`; `None` means no match.
    #[must_use]
    pub fn of(code: &str, prefix: &str) -> Option<Self> {
        if code == prefix {
            Some(Self::Exact)
        } else if code.starts_with(prefix) {
            Some(Self::Descendant)
        } else {
            None
        }
    }
}

/// An account with its children, ordered by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// The wrapped account.
    #[serde(flatten)]
    pub account: Account,
    /// Set on filtered trees; `None` on connective ancestors and unfiltered trees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_tier: Option<MatchTier>,
    /// Child nodes in ascending code order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Wraps an account with no children.
    #[must_use]
    pub const fn leaf(account: Account) -> Self {
        Self {
            account,
            match_tier: None,
            children: Vec::new(),
        }
    }

    /// Returns the account code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.account.code
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
