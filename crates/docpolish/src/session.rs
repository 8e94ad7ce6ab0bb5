// ABOUTME: PageSession: one full page load driven by document-ready events.
// ABOUTME: The first event runs the link pass; every event runs the table pass.

//! Page lifecycle.
//!
//! Hosts with client-side navigation render more than once per page load. A
//! [`PageSession`] receives one [`PageSession::document_ready`] call per
//! render. The link normalizer runs only on the first call; the table sorter
//! runs on every call. Links inserted by later renders therefore stay
//! un-normalized; hosts that need them normalized open a fresh session per
//! render.

use dom_query::Document;

use crate::error::ProcessError;
use crate::processor::Processor;
use crate::report::PageReport;

/// One full page load.
///
/// Obtained from [`Processor::session`].
pub struct PageSession<'p> {
    processor: &'p Processor,
    renders: usize,
}

impl<'p> PageSession<'p> {
    pub(crate) fn new(processor: &'p Processor) -> Self {
        Self {
            processor,
            renders: 0,
        }
    }

    /// Number of document-ready events this session has handled.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Handle one render-complete event for `doc`.
    ///
    /// The first call in a session also runs the link normalizer; every call
    /// runs the table sorter. Errors from the sort binding propagate and
    /// still consume the render slot.
    pub fn document_ready(&mut self, doc: &Document) -> Result<PageReport, ProcessError> {
        let first_render = self.renders == 0;
        self.renders += 1;
        self.processor.run_passes(doc, first_render)
    }
}
