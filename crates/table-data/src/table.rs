//! The data-table asset model

use serde_json::Value;

use crate::csv;
use crate::import::ImportMetadata;
use crate::json;
use crate::{Error, Result};

/// A single named row: an identifier plus one cell value per table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub values: Vec<Value>,
}

/// A structured tabular asset with uniquely named rows.
///
/// Rows are kept in insertion order and serialized in that order, so the
/// same table content always produces byte-identical CSV/JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
    import: ImportMetadata,
}

impl DataTable {
    /// Create an empty table with the given asset name and column schema.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
            import: ImportMetadata::default(),
        }
    }

    /// The asset name of this table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column schema, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row names in table order.
    pub fn row_names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    /// All rows in table order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_row(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.name == name)
    }

    /// Look up a row by name.
    pub fn get_row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Append a row. Row names must be non-empty and unique within the
    /// table, and the value count must match the column schema.
    pub fn insert_row(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        Self::check_row_name(&name)?;
        if self.contains_row(&name) {
            return Err(Error::RowExists {
                table: self.name.clone(),
                name,
            });
        }
        if values.len() != self.columns.len() {
            return Err(Error::ColumnMismatch {
                table: self.name.clone(),
                name,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(Row { name, values });
        Ok(())
    }

    /// Rename a row in place, preserving its position and values.
    ///
    /// Fails if the old name is missing, the new name is invalid, or the
    /// new name collides with another row.
    pub fn rename_row(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        Self::check_row_name(new_name)?;
        if old_name != new_name && self.contains_row(new_name) {
            return Err(Error::RowExists {
                table: self.name.clone(),
                name: new_name.to_string(),
            });
        }
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.name == old_name)
            .ok_or_else(|| Error::RowNotFound {
                table: self.name.clone(),
                name: old_name.to_string(),
            })?;
        row.name = new_name.to_string();
        Ok(())
    }

    /// Import metadata recorded when this table was created from a source file.
    pub fn import_metadata(&self) -> &ImportMetadata {
        &self.import
    }

    /// Record the source file this table was imported from.
    pub fn set_import_metadata(&mut self, import: ImportMetadata) {
        self.import = import;
    }

    /// Serialize the table content as CSV text.
    pub fn to_csv(&self) -> String {
        csv::to_csv(self)
    }

    /// Serialize the table content as pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String> {
        json::to_json(self)
    }

    fn check_row_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::InvalidRowName {
                name: name.to_string(),
                reason: "row names must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
