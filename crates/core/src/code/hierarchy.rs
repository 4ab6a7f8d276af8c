//! Parent/child containment rules.

use super::analyzer::classify;
use super::error::HierarchyError;

/// Validates a code against its declared parent.
///
/// Rules are checked in order and the first failure wins:
/// 1. the code must classify
/// 2. no parent (or an empty one) means a root account
/// 3. code and parent must differ
/// 4. code must be strictly longer than the parent
/// 5. code must start with the parent
///
/// Inputs are expected to be trimmed already.
///
/// # Errors
///
/// Returns the first `HierarchyError` rule that fails.
pub fn validate_hierarchy(code: &str, parent_code: Option<&str>) -> Result<(), HierarchyError> {
    if let Some(err) = classify(code).error {
        return Err(HierarchyError::InvalidCode(err));
    }

    let Some(parent) = parent_code.filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    if code == parent {
        return Err(HierarchyError::EqualsParent);
    }
    if code.len() <= parent.len() {
        return Err(HierarchyError::NotLongerThanParent);
    }
    if !code.starts_with(parent) {
        return Err(HierarchyError::NotUnderParent {
            parent: parent.to_string(),
        });
    }

    Ok(())
}
