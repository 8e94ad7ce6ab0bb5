// ABOUTME: Library entry point for docpolish page post-processing.
// ABOUTME: Re-exports the public API: Processor, ProcessorBuilder, PageSession, Options, reports, sort seam.

//! docpolish - post-render behaviors for documentation pages.
//!
//! Rendered documentation pages carry lightweight markup conventions: the
//! `elink`/`external-link` marker classes on outbound links and a `sortable`
//! marker on table header cells. This crate applies the behaviors those
//! markers ask for: links are normalized to the canonical class and
//! retargeted to open in a new tab, and opted-in article tables are wired
//! for click-to-sort.
//!
//! # Example
//!
//! ```
//! use docpolish::Processor;
//!
//! # fn main() -> Result<(), docpolish::ProcessError> {
//! let processor = Processor::builder().build();
//! let page = processor
//!     .process(r#"<article><a class="elink" href="https://example.com">ref</a></article>"#)?;
//! assert!(page.html.contains(r#"target="_blank""#));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod links;
pub mod options;
pub mod processor;
pub mod report;
mod selectors;
pub mod session;
pub mod sort;
pub mod tables;

pub use crate::error::ProcessError;
pub use crate::options::{Options, ProcessorBuilder};
pub use crate::processor::{ProcessedPage, Processor};
pub use crate::report::{LinkStats, PageReport, TableStats};
pub use crate::session::PageSession;
pub use crate::sort::{SortBinding, TablesortBinding};
