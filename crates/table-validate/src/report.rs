//! Report types for validation runs

use serde::{Deserialize, Serialize};

/// Outcome reported to the host validation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The asset passed validation
    Valid,
    /// The asset failed validation
    Invalid,
    /// The validator did not apply to this asset
    NotValidated,
}

/// One row-rename decision, produced per row and kept only for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameDecision {
    /// Row name before the rename attempt
    pub old_name: String,
    /// Derived canonical name
    pub new_name: String,
    /// Whether the rename was actually applied (false on collision or
    /// invalid name)
    pub applied: bool,
}

/// Report from a full validation pass over one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Result reported to the host; source sync is best-effort, so this is
    /// always `Valid` for tables this validator runs on
    pub result: ValidationResult,
    /// Whether this pass changed anything (row renamed or source rewritten)
    pub changed: bool,
    /// Rename decisions for rows where the naming strategy was active
    pub renames: Vec<RenameDecision>,
}
