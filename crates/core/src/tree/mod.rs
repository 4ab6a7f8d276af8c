//! Account tree materialization.
//!
//! Turns a flat set of coded accounts into an ordered forest for display and
//! export, with prefix search and subtree aggregation.

pub mod builder;
pub mod filter;
pub mod types;

#[cfg(test)]
mod tree_props;

pub use builder::{build_tree, count_descendants, depth, find, flatten};
pub use filter::filter_by_prefix;
pub use types::{MatchTier, TreeNode};
