//! Source descriptor derivation

use table_data::{DataTable, SourceFormat};
use table_fs::NormalizedPath;
use tracing::{debug, warn};

/// Where and in what format a table's external source file lives.
///
/// Derived fresh from import metadata on every validation pass; never
/// cached. The format is determined solely by the path's file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Absolute path to the source file
    pub path: NormalizedPath,
    /// Serialization format matching the file extension
    pub format: SourceFormat,
}

impl SourceDescriptor {
    /// Derive the descriptor for a table's source file.
    ///
    /// Returns `None` when the table has no recorded import path or the
    /// recorded path's extension is neither `.csv` nor `.json` — both mean
    /// "no source to sync", not an error.
    pub fn derive(table: &DataTable) -> Option<Self> {
        let Some(recorded) = table.import_metadata().first_filename() else {
            debug!(table = %table.name(), "no import path recorded, nothing to sync");
            return None;
        };

        let path = NormalizedPath::new(recorded);
        let Some(format) = path.extension().and_then(SourceFormat::from_extension) else {
            warn!(
                table = %table.name(),
                path = %path,
                "source info not found: unrecognized source file extension"
            );
            return None;
        };

        // Recorded paths may be relative to the project; resolve for I/O
        // and source-control checkout.
        let path = match path.absolutize() {
            Ok(path) => path,
            Err(err) => {
                warn!(table = %table.name(), path = %path, error = %err, "could not resolve source path");
                return None;
            }
        };

        Some(Self { path, format })
    }
}
