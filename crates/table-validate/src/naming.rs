//! Row naming strategy seam

use table_data::DataTable;

/// Derives canonical row names for a table.
///
/// Returning `None` marks the strategy inactive for that row and leaves the
/// existing name alone; returning `Some(name)` requests a rename when the
/// derived name differs from the current one. Strategies typically derive
/// names from row content, e.g. a gameplay tag column.
pub trait NamingStrategy {
    fn derive_name(&self, table: &DataTable, old_name: &str) -> Option<String>;
}

/// Default strategy: inactive for every row, so no renames ever occur.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNaming;

impl NamingStrategy for PassthroughNaming {
    fn derive_name(&self, _table: &DataTable, _old_name: &str) -> Option<String> {
        None
    }
}
