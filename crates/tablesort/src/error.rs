// ABOUTME: Error types for table sort wiring.
// ABOUTME: Provides SortError with a NotATable variant for constructor misuse.

use thiserror::Error;

/// Errors that can occur while wiring a table for sorting.
#[derive(Debug, Error)]
pub enum SortError {
    /// The node handed to the constructor is not a `<table>` element.
    #[error("element must be a table, got <{0}>")]
    NotATable(String),
}

impl SortError {
    /// Creates a NotATable error from whatever node name was found.
    pub fn not_a_table(name: impl Into<String>) -> Self {
        SortError::NotATable(name.into())
    }
}
