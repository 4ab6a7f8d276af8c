//! Bulk account import.
//!
//! Reconciles a batch of raw candidate rows against the existing chart:
//! - Code sanitising, classification, and hierarchy checks per row
//! - Duplicate detection within the batch and against existing codes
//! - Orphan-parent warnings computed over the whole batch
//! - Insert / update / reject decisions with per-row reasons
//! - Batch statistics by level and class

pub mod reconciler;
pub mod types;

#[cfg(test)]
mod reconciler_props;

pub use reconciler::{ImportReconciler, reconcile_import};
pub use types::{
    Decision, ImportOptions, ImportRow, ImportStats, RawRow, ReconciliationReport, RowIssue,
};
