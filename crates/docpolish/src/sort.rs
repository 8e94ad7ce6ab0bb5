// ABOUTME: Seam between the table-sorter handler and the sorting library.
// ABOUTME: TablesortBinding is the production binding; tests substitute spies.

//! Sort bindings.
//!
//! The table-sorter handler does not wire tables itself; it hands each
//! qualifying table to a [`SortBinding`]. The production binding constructs
//! a [`Tablesort`] and drops it, which leaves the table wired. Hosts with
//! their own sorting runtime implement the trait instead.

use anyhow::Result;
use docpolish_tablesort::Tablesort;
use dom_query::NodeRef;

/// Attaches sorting behavior to one table element.
pub trait SortBinding {
    /// Wires `table`. Errors propagate unchanged to the caller of the
    /// table-sorter handler.
    fn attach(&self, table: &NodeRef) -> Result<()>;
}

/// Default binding: the bundled tablesort wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct TablesortBinding;

impl SortBinding for TablesortBinding {
    fn attach(&self, table: &NodeRef) -> Result<()> {
        Tablesort::new(table)?;
        Ok(())
    }
}
