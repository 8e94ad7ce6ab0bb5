// ABOUTME: Attach-time wiring for click-to-sort tables.
// ABOUTME: Validates the target element, resolves its header row, and marks sortable header cells.

//! Column-sort wiring for HTML tables.
//!
//! Given a `<table>` node, [`Tablesort::new`] resolves the header row and
//! marks each sortable header cell with `role="columnheader"` so sort
//! controls (and assistive tech) can pick them up. The markup conventions
//! follow the common `tablesort` ones: a cell opts out with
//! `data-sort-method="none"`, and a `thead` row marked
//! `data-sort-method="thead"` overrides the default header-row choice.
//!
//! # Example
//!
//! ```
//! use docpolish_tablesort::Tablesort;
//! use dom_query::Document;
//!
//! let doc = Document::from("<table><thead><tr><th>Size</th></tr></thead></table>");
//! let table = doc.select("table").nodes().first().cloned().expect("table");
//! let sort = Tablesort::new(&table).unwrap();
//! assert_eq!(sort.column_count(), 1);
//! ```

pub mod error;

pub use crate::error::SortError;

use dom_query::NodeRef;

/// Attribute carrying per-cell and per-row sort hints.
pub const SORT_METHOD_ATTR: &str = "data-sort-method";

/// Role value applied to each sortable header cell.
pub const COLUMN_HEADER_ROLE: &str = "columnheader";

/// A table wired for column sorting.
///
/// Construction performs the wiring; the value itself only reports what was
/// wired. Dropping it does not undo anything.
#[derive(Debug)]
pub struct Tablesort {
    columns: usize,
}

impl Tablesort {
    /// Wires `table` for sorting.
    ///
    /// Fails if the node is not a `<table>` element. A table without rows is
    /// wired as a no-op and reports zero columns.
    pub fn new(table: &NodeRef) -> Result<Self, SortError> {
        let name = table
            .node_name()
            .map(|n| n.to_string())
            .unwrap_or_default();
        if name != "table" {
            return Err(SortError::not_a_table(name));
        }

        let header = match header_row(table) {
            Some(row) => row,
            None => return Ok(Self { columns: 0 }),
        };

        let mut columns = 0;
        let mut cell = header.first_element_child();
        while let Some(c) = cell {
            if c.attr(SORT_METHOD_ATTR).as_deref() != Some("none") {
                c.set_attr("role", COLUMN_HEADER_ROLE);
                columns += 1;
            }
            cell = c.next_element_sibling();
        }

        Ok(Self { columns })
    }

    /// Number of header cells wired for sorting.
    pub fn column_count(&self) -> usize {
        self.columns
    }
}

/// Resolves the row whose cells act as column headers.
///
/// A `thead` with rows wins: the row marked `data-sort-method="thead"` if
/// present, otherwise the `thead`'s last row. Without a `thead`, the first
/// row of the first row-holding section.
fn header_row<'a>(table: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut fallback: Option<NodeRef<'a>> = None;
    let mut section = table.first_element_child();
    while let Some(s) = section {
        let name = s.node_name().map(|n| n.to_string()).unwrap_or_default();
        match name.as_str() {
            "thead" => {
                if let Some(row) = thead_header_row(&s) {
                    return Some(row);
                }
            }
            // A bare <tr> child only appears in hand-built trees; the HTML
            // parser reparents rows into an implied <tbody>.
            "tr" => {
                if fallback.is_none() {
                    fallback = Some(s.clone());
                }
            }
            "tbody" | "tfoot" => {
                if fallback.is_none() {
                    fallback = s.first_element_child();
                }
            }
            _ => {}
        }
        section = s.next_element_sibling();
    }
    fallback
}

/// Picks the header row within a `thead`: the marked row if any, else the
/// last one. `None` for an empty `thead`.
fn thead_header_row<'a>(thead: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut marked: Option<NodeRef<'a>> = None;
    let mut last: Option<NodeRef<'a>> = None;
    let mut row = thead.first_element_child();
    while let Some(r) = row {
        if marked.is_none() && r.attr(SORT_METHOD_ATTR).as_deref() == Some("thead") {
            marked = Some(r.clone());
        }
        row = r.next_element_sibling();
        last = Some(r);
    }
    marked.or(last)
}
