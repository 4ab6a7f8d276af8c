//! Import batch types.

use std::collections::BTreeMap;

use puc_shared::ImportSettings;
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountStatus};
use crate::code::{IssueKind, Nature, Severity};

/// A candidate account as supplied by a spreadsheet or API body.
///
/// Only `code` is required. Everything else is optional and defaulted during
/// reconciliation; explicit values are never overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Source row number; the 1-based batch position is used when absent.
    #[serde(default)]
    pub row: Option<usize>,
    /// Raw code, possibly with separators or whitespace.
    pub code: String,
    /// Raw declared parent code.
    #[serde(default)]
    pub parent_code: Option<String>,
    /// Account name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit nature.
    #[serde(default)]
    pub nature: Option<Nature>,
    /// Explicit status.
    #[serde(default)]
    pub status: Option<AccountStatus>,
    /// Explicit movements flag.
    #[serde(default)]
    pub accepts_movements: Option<bool>,
    /// Explicit third-party flag.
    #[serde(default)]
    pub requires_third_party: Option<bool>,
    /// Explicit cost-center flag.
    #[serde(default)]
    pub requires_cost_center: Option<bool>,
}

impl RawRow {
    /// Creates a row with only a code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Sets the declared parent code.
    #[must_use]
    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    /// Sets the source row number.
    #[must_use]
    pub const fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

/// Switches controlling a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Emit `Update` instead of rejecting codes that already exist.
    pub overwrite_existing: bool,
    /// Run containment checks on declared parent codes.
    pub validate_hierarchy: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportSettings::default().into()
    }
}

impl From<ImportSettings> for ImportOptions {
    fn from(settings: ImportSettings) -> Self {
        Self {
            overwrite_existing: settings.overwrite_existing,
            validate_hierarchy: settings.validate_hierarchy,
        }
    }
}

/// What the persistence sink should do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// New account.
    Insert,
    /// Replace an existing account with the same code.
    Update,
    /// Do not persist.
    Reject,
}

/// One reconciled row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRow {
    /// Source row number.
    pub row: usize,
    /// Sanitised and defaulted account.
    pub account: Account,
    /// Outcome for this row.
    pub decision: Decision,
    /// Rejection reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Rejection category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueKind>,
}

impl ImportRow {
    /// Returns true unless the row was rejected.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.decision != Decision::Reject
    }
}

/// A structured problem attached to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// Source row number.
    pub row: usize,
    /// Sanitised code of the row.
    pub code: String,
    /// Issue category.
    pub kind: IssueKind,
    /// Human-readable message.
    pub message: String,
}

impl RowIssue {
    /// Returns whether this issue blocked the row.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Batch statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Rows in the batch.
    pub total_rows: usize,
    /// Rows accepted as insert or update.
    pub accepted: usize,
    /// Rows accepted as insert.
    pub inserted: usize,
    /// Rows accepted as update.
    pub updated: usize,
    /// Rows rejected.
    pub rejected: usize,
    /// Rejections caused by duplicate codes.
    pub duplicates: usize,
    /// Accepted rows whose declared parent exists nowhere.
    pub orphans: usize,
    /// Accepted accounts per level.
    pub by_level: BTreeMap<u8, usize>,
    /// Accepted accounts per class digit.
    pub by_class: BTreeMap<String, usize>,
}

/// Full outcome of a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// Rows to persist, in batch order.
    pub accepted: Vec<ImportRow>,
    /// Rows not to persist, in batch order.
    pub rejected: Vec<ImportRow>,
    /// Non-blocking issues on accepted rows.
    pub warnings: Vec<RowIssue>,
    /// Batch statistics.
    pub stats: ImportStats,
}

impl ReconciliationReport {
    /// Returns the rejections as structured issues.
    #[must_use]
    pub fn errors(&self) -> Vec<RowIssue> {
        self.rejected
            .iter()
            .filter_map(|row| {
                Some(RowIssue {
                    row: row.row,
                    code: row.account.code.clone(),
                    kind: row.issue?,
                    message: row.reason.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Returns true if any row was rejected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.rejected.is_empty()
    }

    /// Returns the accepted accounts, ready for persistence.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accepted.iter().map(|row| &row.account)
    }
}
