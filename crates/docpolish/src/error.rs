// ABOUTME: Error types for page post-processing.
// ABOUTME: Provides ProcessError; sort-binding failures carry their source.

use thiserror::Error;

/// Errors that can occur while applying page behaviors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The sort binding refused or failed to wire a table.
    #[error("sort binding failed for article table #{table}: {source}")]
    Sort {
        /// Zero-based index of the table within the scanned set.
        table: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl ProcessError {
    /// Creates a Sort error for the table at `index`.
    pub fn sort(index: usize, source: anyhow::Error) -> Self {
        ProcessError::Sort {
            table: index,
            source,
        }
    }

    /// Returns true if this error came from the sort binding.
    pub fn is_sort(&self) -> bool {
        matches!(self, ProcessError::Sort { .. })
    }
}
