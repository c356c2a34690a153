//! Import metadata for table assets

use serde::{Deserialize, Serialize};

/// Records where a table asset was imported from.
///
/// The import pipeline can record several source filenames; synchronization
/// only ever targets the first one, matching the importer's behavior of
/// reimporting from the first recorded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMetadata {
    source_files: Vec<String>,
}

impl ImportMetadata {
    /// Metadata with a single recorded source file.
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            source_files: vec![path.into()],
        }
    }

    /// Record an additional source file.
    pub fn push_file(&mut self, path: impl Into<String>) {
        self.source_files.push(path.into());
    }

    /// The first recorded source filename, if any was recorded.
    ///
    /// An empty recorded string counts as "nothing recorded".
    pub fn first_filename(&self) -> Option<&str> {
        self.source_files
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}
