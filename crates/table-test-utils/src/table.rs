//! Sample data-table builders.

use serde_json::json;
use table_data::{DataTable, ImportMetadata};

/// A two-row items table (`Sword`, `Shield`) with `Cost` and `Rarity`
/// columns and no import metadata.
pub fn items_table() -> DataTable {
    let mut table = DataTable::new("Items", vec!["Cost".into(), "Rarity".into()]);
    table
        .insert_row("Sword", vec![json!(10), json!("Common")])
        .unwrap_or_else(|e| panic!("items_table: failed to insert Sword: {e}"));
    table
        .insert_row("Shield", vec![json!(25), json!("Rare")])
        .unwrap_or_else(|e| panic!("items_table: failed to insert Shield: {e}"));
    table
}

/// [`items_table`] with the given path recorded as its imported source.
pub fn items_table_with_source(path: impl Into<String>) -> DataTable {
    let mut table = items_table();
    table.set_import_metadata(ImportMetadata::from_file(path));
    table
}
