//! End-to-end source synchronization tests
//!
//! These exercise the complete flow across crates: import metadata ->
//! descriptor derivation -> row renaming -> divergence check -> checkout ->
//! rewrite, with a real git repository backing the source-control provider.

use pretty_assertions::assert_eq;
use serde_json::json;
use table_data::{DataTable, ImportMetadata};
use table_fs::NormalizedPath;
use table_test_utils::git::real_git_repo;
use table_validate::{NamingStrategy, SourceSyncValidator, ValidationResult};
use table_vcs::{GitSourceControl, SourceControlDisabled};
use tempfile::TempDir;

/// Maps row `A` to `A2`; inactive for every other row.
struct RenameA;

impl NamingStrategy for RenameA {
    fn derive_name(&self, _table: &DataTable, old_name: &str) -> Option<String> {
        (old_name == "A").then(|| "A2".to_string())
    }
}

fn ab_table(source: &std::path::Path) -> DataTable {
    let mut table = DataTable::new("Gameplay", vec!["Value".into()]);
    table.insert_row("A", vec![json!(1)]).unwrap();
    table.insert_row("B", vec![json!(2)]).unwrap();
    table.set_import_metadata(ImportMetadata::from_file(source.to_string_lossy()));
    table
}

#[test]
fn rename_and_resave_through_git_checkout() {
    let temp = TempDir::new().unwrap();
    real_git_repo(temp.path());
    let source = temp.path().join("foo.json");
    std::fs::write(&source, "[]\n").unwrap();

    // Imported source files are commonly left read-only; checkout must
    // clear the bit before the rewrite.
    let mut perms = std::fs::metadata(&source).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(&source, perms).unwrap();

    let mut table = ab_table(&source);
    let vcs = GitSourceControl::discover(&NormalizedPath::new(&source)).unwrap();
    let validator =
        SourceSyncValidator::new(Box::new(RenameA), Box::new(vcs)).with_target("Gameplay");

    assert!(validator.can_validate(&table));
    let report = validator.validate(&mut table);

    assert_eq!(report.result, ValidationResult::Valid);
    assert!(report.changed);
    assert_eq!(report.renames.len(), 1);
    assert!(report.renames[0].applied);
    assert_eq!(report.renames[0].old_name, "A");
    assert_eq!(report.renames[0].new_name, "A2");

    // Row renamed in the table
    assert!(table.contains_row("A2"));
    assert!(!table.contains_row("A"));

    // File was made writable and overwritten with the renamed content
    assert!(!std::fs::metadata(&source).unwrap().permissions().readonly());
    let written: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&source).unwrap()).unwrap();
    let names: Vec<&str> = written.iter().map(|r| r["Name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["A2", "B"]);
}

#[test]
fn second_pass_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("foo.json");
    std::fs::write(&source, "[]\n").unwrap();

    let mut table = ab_table(&source);
    let validator = SourceSyncValidator::new(Box::new(RenameA), Box::new(SourceControlDisabled))
        .with_target("Gameplay");

    let first = validator.validate(&mut table);
    assert!(first.changed);

    let second = validator.validate(&mut table);
    assert_eq!(second.result, ValidationResult::Valid);
    assert!(!second.changed);
    // Naming already canonical, nothing left to rename
    assert!(second.renames.is_empty());
}

#[test]
fn csv_source_sync_without_version_control() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("items.csv");
    std::fs::write(&source, "Name,Value\nStale,0\n").unwrap();

    let mut table = ab_table(&source);
    let validator = SourceSyncValidator::new(
        Box::new(table_validate::PassthroughNaming),
        Box::new(SourceControlDisabled),
    )
    .with_target("Gameplay");

    let report = validator.validate(&mut table);
    assert!(report.changed);
    assert_eq!(std::fs::read_to_string(&source).unwrap(), table.to_csv());
}

#[test]
fn table_without_source_passes_untouched() {
    let mut table = DataTable::new("Gameplay", vec!["Value".into()]);
    table.insert_row("A", vec![json!(1)]).unwrap();

    let validator = SourceSyncValidator::new(
        Box::new(table_validate::PassthroughNaming),
        Box::new(SourceControlDisabled),
    )
    .with_target("Gameplay");

    let report = validator.validate(&mut table);
    assert_eq!(report.result, ValidationResult::Valid);
    assert!(!report.changed);
}
