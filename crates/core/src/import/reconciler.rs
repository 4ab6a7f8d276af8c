//! Bulk import reconciliation.
//!
//! Decides, row by row, whether a batch of candidate accounts should be
//! inserted, used to update existing accounts, or rejected. A bad row never
//! fails the batch; every row comes back with an outcome.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::types::{
    Decision, ImportOptions, ImportRow, ImportStats, RawRow, ReconciliationReport, RowIssue,
};
use crate::account::Account;
use crate::code::{
    AccountType, IssueKind, classify, default_nature_for_code, sanitize_code, validate_hierarchy,
};

/// Reconciles import batches against the existing chart of accounts.
///
/// Pure and synchronous: the caller supplies a snapshot of existing codes
/// and persists whatever comes back. Separate batches can run concurrently
/// as long as each gets its own snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportReconciler {
    options: ImportOptions,
}

impl ImportReconciler {
    /// Creates a reconciler with the given options.
    #[must_use]
    pub const fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Reconciles a batch.
    ///
    /// Per row, in order:
    /// 1. strip non-digits from the code; reject if nothing is left
    /// 2. classify the code; reject if it does not map to a level
    /// 3. if enabled and a parent is declared, check containment
    /// 4. reject repeats within the batch, and collisions with existing
    ///    codes unless overwriting (which yields `Update`)
    ///
    /// Once every row has a decision, accepted rows whose declared parent is
    /// neither existing nor accepted anywhere in the batch get an orphan
    /// warning. The check runs after the full pass, so row order does not
    /// matter.
    #[must_use]
    pub fn reconcile<S: BuildHasher>(
        &self,
        rows: &[RawRow],
        existing_codes: &HashSet<String, S>,
    ) -> ReconciliationReport {
        let started = Instant::now();
        let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(rows.len());
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (index, raw) in rows.iter().enumerate() {
            let row = raw.row.unwrap_or(index + 1);
            let outcome = self.evaluate(row, raw, existing_codes, &mut first_seen);
            if outcome.is_accepted() {
                accepted.push(outcome);
            } else {
                debug!(
                    row,
                    code = %outcome.account.code,
                    reason = outcome.reason.as_deref().unwrap_or_default(),
                    "Rejected import row"
                );
                rejected.push(outcome);
            }
        }

        let warnings = find_orphans(&accepted, existing_codes);
        let stats = collect_stats(rows.len(), &accepted, &rejected, warnings.len());

        info!(
            rows = stats.total_rows,
            accepted = stats.accepted,
            rejected = stats.rejected,
            duplicates = stats.duplicates,
            orphans = stats.orphans,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Reconciled account import"
        );

        ReconciliationReport {
            accepted,
            rejected,
            warnings,
            stats,
        }
    }

    fn evaluate<S: BuildHasher>(
        &self,
        row: usize,
        raw: &RawRow,
        existing_codes: &HashSet<String, S>,
        first_seen: &mut HashMap<String, usize>,
    ) -> ImportRow {
        let code = sanitize_code(&raw.code);
        let parent_code = raw
            .parent_code
            .as_deref()
            .map(sanitize_code)
            .filter(|p| !p.is_empty());
        let account = to_account(raw, code, parent_code);

        if account.code.is_empty() {
            return reject(
                row,
                account,
                IssueKind::MissingCode,
                "missing code".to_string(),
            );
        }

        if let Some(err) = classify(&account.code).error {
            return reject(row, account, err.kind(), err.to_string());
        }

        if self.options.validate_hierarchy
            && let Err(err) = validate_hierarchy(&account.code, account.parent_code.as_deref())
        {
            return reject(row, account, err.kind(), err.to_string());
        }

        if let Some(&first) = first_seen.get(&account.code) {
            return reject(
                row,
                account,
                IssueKind::DuplicateCode,
                format!("duplicate code in file (first seen at row {first})"),
            );
        }
        first_seen.insert(account.code.clone(), row);

        let decision = if existing_codes.contains(&account.code) {
            if !self.options.overwrite_existing {
                return reject(
                    row,
                    account,
                    IssueKind::DuplicateCode,
                    "code already exists".to_string(),
                );
            }
            Decision::Update
        } else {
            Decision::Insert
        };

        ImportRow {
            row,
            account,
            decision,
            reason: None,
            issue: None,
        }
    }
}

/// Reconciles a batch with the given options.
///
/// See [`ImportReconciler::reconcile`].
#[must_use]
pub fn reconcile_import<S: BuildHasher>(
    rows: &[RawRow],
    existing_codes: &HashSet<String, S>,
    options: ImportOptions,
) -> ReconciliationReport {
    ImportReconciler::new(options).reconcile(rows, existing_codes)
}

fn reject(row: usize, account: Account, issue: IssueKind, reason: String) -> ImportRow {
    ImportRow {
        row,
        account,
        decision: Decision::Reject,
        reason: Some(reason),
        issue: Some(issue),
    }
}

/// Builds the account for a row, filling unset fields with defaults.
fn to_account(raw: &RawRow, code: String, parent_code: Option<String>) -> Account {
    let nature = raw
        .nature
        .or_else(|| default_nature_for_code(&code).map(|s| s.nature));
    let posting_level = matches!(
        classify(&code).account_type,
        AccountType::Subaccount | AccountType::Auxiliary
    );

    Account {
        parent_code,
        name: raw.name.clone().unwrap_or_default(),
        description: raw.description.clone(),
        nature,
        status: raw.status.unwrap_or_default(),
        accepts_movements: raw.accepts_movements.unwrap_or(posting_level),
        requires_third_party: raw.requires_third_party.unwrap_or(false),
        requires_cost_center: raw.requires_cost_center.unwrap_or(false),
        ..Account::new(code, String::new())
    }
}

fn find_orphans<S: BuildHasher>(
    accepted: &[ImportRow],
    existing_codes: &HashSet<String, S>,
) -> Vec<RowIssue> {
    let batch_codes: HashSet<&str> = accepted.iter().map(|r| r.account.code.as_str()).collect();

    accepted
        .iter()
        .filter_map(|r| {
            let parent = r.account.parent_code.as_deref()?;
            if batch_codes.contains(parent) || existing_codes.contains(parent) {
                return None;
            }
            warn!(row = r.row, code = %r.account.code, parent, "Parent code not found");
            Some(RowIssue {
                row: r.row,
                code: r.account.code.clone(),
                kind: IssueKind::OrphanParent,
                message: format!("parent code {parent} not found"),
            })
        })
        .collect()
}

fn collect_stats(
    total_rows: usize,
    accepted: &[ImportRow],
    rejected: &[ImportRow],
    orphans: usize,
) -> ImportStats {
    let mut stats = ImportStats {
        total_rows,
        accepted: accepted.len(),
        rejected: rejected.len(),
        orphans,
        ..ImportStats::default()
    };

    for row in accepted {
        match row.decision {
            Decision::Insert => stats.inserted += 1,
            Decision::Update => stats.updated += 1,
            Decision::Reject => {}
        }
        *stats.by_level.entry(row.account.level()).or_default() += 1;
        if let Some(digit) = row.account.class_digit() {
            *stats.by_class.entry(digit.to_string()).or_default() += 1;
        }
    }

    stats.duplicates = rejected
        .iter()
        .filter(|r| r.issue == Some(IssueKind::DuplicateCode))
        .count();

    stats
}
