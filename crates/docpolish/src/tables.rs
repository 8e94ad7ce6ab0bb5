// ABOUTME: Table sorter handler: scans article tables and wires opted-in ones.
// ABOUTME: Structure checks fail closed; wired tables carry a marker class.

//! Click-to-sort wiring for article tables.
//!
//! A table opts in by carrying the `sortable` class on the last cell of the
//! first row of its first child, which is the rightmost header cell as
//! rendered.
//! Tables that do not match that shape are not sortable; the lookup fails
//! closed instead of faulting on short tables. Wired tables get the
//! [`BOUND_CLASS`] marker so a second pass over the same tree will not wire
//! them twice; a fresh parse of the same page is a new tree and wires again.

use dom_query::{Document, NodeRef};
use log::debug;

use crate::error::ProcessError;
use crate::report::TableStats;
use crate::selectors;
use crate::sort::SortBinding;

/// Marker class a table's rightmost header cell carries to opt in.
pub const SORTABLE_CLASS: &str = "sortable";

/// Marker class recording that a table has been wired in this tree.
pub const BOUND_CLASS: &str = "tablesort-bound";

pub(crate) const ARTICLE_TABLES_SELECTOR: &str = "article table";

/// Scans article content and wires every qualifying table through `binding`.
///
/// A binding failure aborts the scan and propagates; tables already wired in
/// this tree are skipped.
pub fn attach_sorting(
    doc: &Document,
    binding: &dyn SortBinding,
) -> Result<TableStats, ProcessError> {
    let mut stats = TableStats::default();
    let matcher = match selectors::cached(ARTICLE_TABLES_SELECTOR) {
        Some(m) => m,
        None => return Ok(stats),
    };

    for (index, table) in doc.select_matcher(&matcher).nodes().iter().enumerate() {
        stats.scanned += 1;

        if table.has_class(BOUND_CLASS) {
            debug!("article table #{} already wired, skipping", index);
            stats.skipped += 1;
            continue;
        }

        let opted_in = marker_cell(table).is_some_and(|cell| cell.has_class(SORTABLE_CLASS));
        if !opted_in {
            stats.skipped += 1;
            continue;
        }

        binding
            .attach(table)
            .map_err(|source| ProcessError::sort(index, source))?;
        table.add_class(BOUND_CLASS);
        stats.attached += 1;
    }

    debug!(
        "wired {} of {} article table(s), {} skipped",
        stats.attached, stats.scanned, stats.skipped
    );
    Ok(stats)
}

/// Resolves the cell that carries a table's opt-in marker: the last child of
/// the first child of the table's first child.
///
/// `None` when the table is too short for that shape, which reads as "not
/// sortable". A leading `<caption>` or `<colgroup>` shifts the first child
/// and defeats the lookup; the marker convention requires the header section
/// to come first.
fn marker_cell<'a>(table: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let section = table.first_element_child()?;
    let row = section.first_element_child()?;
    row.children_it(true).find(|cell| cell.is_element())
}
