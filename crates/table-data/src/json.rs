//! JSON serialization of table content

use serde_json::{Map, Value};

use crate::table::DataTable;
use crate::Result;

/// Key carrying the row name inside each exported row object.
const NAME_KEY: &str = "Name";

/// Serialize a table as pretty-printed JSON text.
///
/// Layout: an array with one object per row in table order, each object
/// holding the row name under `Name` plus one key per column. Keys within
/// an object are sorted by serde_json's map ordering, so the same table
/// content always produces byte-identical output.
pub fn to_json(table: &DataTable) -> Result<String> {
    let rows: Vec<Value> = table
        .rows()
        .iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert(NAME_KEY.to_string(), Value::String(row.name.clone()));
            for (column, value) in table.columns().iter().zip(&row.values) {
                object.insert(column.clone(), value.clone());
            }
            Value::Object(object)
        })
        .collect();

    let mut text = serde_json::to_string_pretty(&Value::Array(rows))?;
    text.push('\n');
    Ok(text)
}
