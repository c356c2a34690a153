//! The source-sync validator

use similar::TextDiff;
use table_data::{DataTable, SourceFormat};
use table_fs::io;
use table_vcs::SourceControl;
use tracing::{debug, info, warn};

use crate::descriptor::SourceDescriptor;
use crate::naming::NamingStrategy;
use crate::report::{RenameDecision, ValidationReport, ValidationResult};
use crate::{Error, Result};

/// Keeps data tables in sync with their external CSV/JSON source files.
///
/// Per validated table the validator runs two independent steps: row
/// auto-renaming through the injected [`NamingStrategy`], then a
/// divergence check that rewrites the source file (with version-control
/// checkout) when the table's serialized content no longer matches disk.
///
/// Every derived input is recomputed per pass; the validator holds no
/// state about tables between invocations.
pub struct SourceSyncValidator {
    targets: Vec<String>,
    naming: Box<dyn NamingStrategy>,
    vcs: Box<dyn SourceControl>,
}

impl SourceSyncValidator {
    /// Create a validator with the given naming strategy and
    /// source-control provider. No tables are targeted yet; add them with
    /// [`with_target`](Self::with_target).
    pub fn new(naming: Box<dyn NamingStrategy>, vcs: Box<dyn SourceControl>) -> Self {
        Self {
            targets: Vec::new(),
            naming,
            vcs,
        }
    }

    /// Register a table name this validator applies to.
    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.targets.push(name.into());
        self
    }

    /// Whether this validator applies to the given table.
    pub fn can_validate(&self, table: &DataTable) -> bool {
        self.targets.iter().any(|t| t == table.name())
    }

    /// Run a full validation pass: rename rows to derived names, then
    /// resave the source file if the table content diverged.
    ///
    /// Sync is best-effort, not a gating correctness check: the report's
    /// result is always [`ValidationResult::Valid`]; `changed` only decides
    /// the log message.
    pub fn validate(&self, table: &mut DataTable) -> ValidationReport {
        info!(table = %table.name(), "running source sync validation");

        let renames = self.apply_derived_names(table);
        let renamed = renames.iter().any(|d| d.applied);
        let resaved = self.resave_source_if_divergent(table);

        let changed = renamed || resaved;
        if changed {
            info!(table = %table.name(), "source file updated, resaving");
        } else {
            info!(table = %table.name(), "source file not updated, no re-save required");
        }

        ValidationReport {
            result: ValidationResult::Valid,
            changed,
            renames,
        }
    }

    /// Rename every row whose derived canonical name differs from its
    /// current name.
    ///
    /// Rows where the strategy is inactive are skipped. A failed rename
    /// (collision or invalid name) is logged and skipped; only successful
    /// renames count toward the returned flag.
    pub fn rename_rows_to_derived_names(&self, table: &mut DataTable) -> bool {
        self.apply_derived_names(table).iter().any(|d| d.applied)
    }

    fn apply_derived_names(&self, table: &mut DataTable) -> Vec<RenameDecision> {
        let mut decisions = Vec::new();

        // Snapshot the names: each row is visited once under its current
        // name, and earlier renames in this pass participate in collision
        // checks inside rename_row.
        let current_names: Vec<String> = table.row_names().map(str::to_string).collect();

        for old_name in current_names {
            let Some(new_name) = self.naming.derive_name(table, &old_name) else {
                continue;
            };
            if new_name == old_name {
                continue;
            }

            debug!(table = %table.name(), old = %old_name, new = %new_name, "matching row name");
            let applied = match table.rename_row(&old_name, &new_name) {
                Ok(()) => true,
                Err(err) => {
                    warn!(
                        table = %table.name(),
                        old = %old_name,
                        new = %new_name,
                        error = %err,
                        "row rename failed, please review: new name may be invalid or non-unique"
                    );
                    false
                }
            };
            decisions.push(RenameDecision {
                old_name,
                new_name,
                applied,
            });
        }

        decisions
    }

    /// Rewrite the table's source file if the serialized table content no
    /// longer matches what is on disk.
    ///
    /// Returns `true` only when the file was actually rewritten. A table
    /// without a syncable source is a no-op; read, checkout, and write
    /// failures are logged and absorbed, leaving the next validation pass
    /// to retry.
    pub fn resave_source_if_divergent(&self, table: &DataTable) -> bool {
        match self.try_resave_source(table) {
            Ok(written) => written,
            Err(err) => {
                warn!(table = %table.name(), error = %err, "source resave skipped");
                false
            }
        }
    }

    fn try_resave_source(&self, table: &DataTable) -> Result<bool> {
        let Some(descriptor) = SourceDescriptor::derive(table) else {
            return Ok(false);
        };

        let serialized = match descriptor.format {
            SourceFormat::Csv => table.to_csv(),
            SourceFormat::Json => table.to_json()?,
        };

        let on_disk = io::read_text(&descriptor.path).map_err(|e| Error::UnreadableSource {
            path: descriptor.path.to_native(),
            source: e,
        })?;

        if on_disk == serialized {
            debug!(table = %table.name(), "table and source content identical");
            return Ok(false);
        }

        // Empty content on either side gets no special handling; the write
        // below proceeds as for any other divergence.
        if on_disk.is_empty() || serialized.is_empty() {
            debug!(table = %table.name(), "table or source content is empty");
        }

        let similarity = TextDiff::from_lines(&on_disk, &serialized).ratio();
        debug!(
            table = %table.name(),
            path = %descriptor.path,
            similarity,
            "source file diverged from table content"
        );

        if self.vcs.is_enabled() {
            self.vcs
                .checkout(&descriptor.path)
                .map_err(|e| Error::CheckoutFailed {
                    path: descriptor.path.to_native(),
                    source: e,
                })?;
        }

        io::write_text(&descriptor.path, &serialized).map_err(|e| Error::WriteFailed {
            path: descriptor.path.to_native(),
            source: e,
        })?;

        info!(table = %table.name(), path = %descriptor.path, "source file rewritten");
        Ok(true)
    }
}
