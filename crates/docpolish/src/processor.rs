// ABOUTME: Processor: the configured entry point for applying page behaviors.
// ABOUTME: Opens page sessions and processes whole pages in one shot for batch hosts.

use dom_query::Document;

use crate::error::ProcessError;
use crate::options::{Options, ProcessorBuilder};
use crate::report::PageReport;
use crate::selectors;
use crate::session::PageSession;
use crate::sort::SortBinding;
use crate::{links, tables};

/// A page produced by [`Processor::process`].
#[derive(Debug, Clone)]
pub struct ProcessedPage {
    /// The serialized page after mutation.
    pub html: String,
    /// What the pass did.
    pub report: PageReport,
}

/// Applies the configured page behaviors.
///
/// Hosts that render once (static pages, batch rewriting) call
/// [`Processor::process`]. Hosts that re-render the same page open a
/// [`PageSession`] and fire [`PageSession::document_ready`] per render.
pub struct Processor {
    opts: Options,
    binding: Box<dyn SortBinding>,
}

impl Processor {
    /// Create a new ProcessorBuilder for configuring the processor.
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    /// Create a Processor from options and a sort binding.
    ///
    /// Warms the matcher cache for the built-in selectors so per-page scans
    /// never pay for selector compilation.
    pub fn new(opts: Options, binding: Box<dyn SortBinding>) -> Self {
        selectors::warm([
            links::LEGACY_SELECTOR,
            links::CANONICAL_SELECTOR,
            tables::ARTICLE_TABLES_SELECTOR,
        ]);
        Self { opts, binding }
    }

    /// The options this processor runs with.
    pub fn options(&self) -> Options {
        self.opts
    }

    /// Open a session modeling one full page load.
    pub fn session(&self) -> PageSession<'_> {
        PageSession::new(self)
    }

    /// Process one page: parse, fire a single document-ready, serialize.
    ///
    /// The input is treated as a complete page; fragments come back wrapped
    /// in the usual `html`/`head`/`body` scaffolding the parser implies.
    pub fn process(&self, html: &str) -> Result<ProcessedPage, ProcessError> {
        let doc = Document::from(html);
        let mut session = self.session();
        let report = session.document_ready(&doc)?;
        Ok(ProcessedPage {
            html: doc.html().to_string(),
            report,
        })
    }

    pub(crate) fn run_passes(
        &self,
        doc: &Document,
        first_render: bool,
    ) -> Result<PageReport, ProcessError> {
        let links = (first_render && self.opts.normalize_links).then(|| links::update_links(doc));
        let tables = if self.opts.sort_tables {
            Some(tables::attach_sorting(doc, self.binding.as_ref())?)
        } else {
            None
        };
        Ok(PageReport { links, tables })
    }
}
