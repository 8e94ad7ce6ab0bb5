// ABOUTME: End-to-end tests for the docpolish library pipeline.
// ABOUTME: Covers link normalization, table wiring, reprocessing stability, and binding errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use docpolish::{ProcessError, Processor, SortBinding};
use dom_query::{Document, NodeRef};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Operations guide</title></head>
<body>
<article>
  <h1>Operations guide</h1>
  <p>See the <a class="elink" href="https://upstream.example/docs">upstream docs</a>
     and the <a class="external-link" href="https://tracker.example">tracker</a>.
     The <a href="/local/page">local page</a> stays as is.</p>
  <table id="artifacts">
    <thead><tr><th>Artifact</th><th class="sortable">Size</th></tr></thead>
    <tbody>
      <tr><td>cli</td><td>1 MiB</td></tr>
      <tr><td>daemon</td><td>4 MiB</td></tr>
    </tbody>
  </table>
  <table id="ports">
    <thead><tr><th>Service</th><th>Port</th></tr></thead>
    <tbody><tr><td>http</td><td>8080</td></tr></tbody>
  </table>
</article>
</body>
</html>"#;

#[test]
fn full_page_gets_both_behaviors() {
    let processor = Processor::builder().build();
    let page = processor.process(PAGE).unwrap();

    let out = Document::from(page.html.as_str());
    assert!(!out.select(".elink").exists(), "no legacy class survives");
    assert_eq!(
        out.select(".external-link").nodes().len(),
        2,
        "both marked links carry the canonical class"
    );
    assert_eq!(
        out.select(r#".external-link[target="_blank"]"#).nodes().len(),
        2,
        "every canonical link opens in a new tab"
    );
    assert!(
        !out.select(r#"a[href="/local/page"][target]"#).exists(),
        "unmarked links keep their default target"
    );

    assert!(out.select("#artifacts.tablesort-bound").exists());
    assert!(
        out.select(r#"#artifacts th[role="columnheader"]"#).exists(),
        "opted-in table is wired"
    );
    assert!(
        !out.select("#ports.tablesort-bound").exists(),
        "unmarked table is untouched"
    );

    let links = page.report.links.expect("link pass ran");
    assert_eq!(links.normalized, 1);
    assert_eq!(links.retargeted, 2);
    let tables = page.report.tables.expect("table pass ran");
    assert_eq!(tables.scanned, 2);
    assert_eq!(tables.attached, 1);
    assert_eq!(tables.skipped, 1);
}

#[test]
fn reprocessing_the_output_changes_nothing() {
    let processor = Processor::builder().build();
    let first = processor.process(PAGE).unwrap();
    let second = processor.process(&first.html).unwrap();

    assert_eq!(second.html, first.html, "output is a fixed point");

    let links = second.report.links.expect("link pass ran");
    assert_eq!(links.normalized, 0, "nothing legacy on the second pass");
    let tables = second.report.tables.expect("table pass ran");
    assert_eq!(tables.attached, 0, "wired tables stay wired");
    assert_eq!(tables.skipped, 2);
}

#[test]
fn fragments_are_treated_as_full_pages() {
    let processor = Processor::builder().build();
    let page = processor
        .process(r#"<a class="elink" href="https://example.com">ref</a>"#)
        .unwrap();

    let out = Document::from(page.html.as_str());
    assert!(out.select(r#"a.external-link[target="_blank"]"#).exists());
}

/// Counts constructor invocations without doing any wiring.
#[derive(Clone)]
struct CountingBinding {
    hits: Arc<AtomicUsize>,
}

impl SortBinding for CountingBinding {
    fn attach(&self, _table: &NodeRef) -> anyhow::Result<()> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn binding_runs_once_per_qualifying_table() {
    let hits = Arc::new(AtomicUsize::new(0));
    let processor = Processor::builder()
        .binding(CountingBinding { hits: hits.clone() })
        .build();

    let page = processor.process(PAGE).unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1, "one qualifying table");
    assert_eq!(page.report.tables_wired(), 1);
}

struct RefusingBinding;

impl SortBinding for RefusingBinding {
    fn attach(&self, _table: &NodeRef) -> anyhow::Result<()> {
        anyhow::bail!("sorting runtime unavailable")
    }
}

#[test]
fn binding_errors_surface_from_process() {
    let processor = Processor::builder().binding(RefusingBinding).build();

    let err = processor.process(PAGE).unwrap_err();

    assert!(matches!(err, ProcessError::Sort { table: 0, .. }));
    assert!(err.to_string().contains("sorting runtime unavailable"));
}

#[test]
fn passes_can_be_disabled_independently() {
    let links_only = Processor::builder().sort_tables(false).build();
    let page = links_only.process(PAGE).unwrap();
    let out = Document::from(page.html.as_str());
    assert!(out.select(".external-link").exists());
    assert!(!out.select(".tablesort-bound").exists());
    assert!(page.report.tables.is_none());

    let tables_only = Processor::builder().normalize_links(false).build();
    let page = tables_only.process(PAGE).unwrap();
    let out = Document::from(page.html.as_str());
    assert!(out.select(".elink").exists(), "links left as found");
    assert!(out.select("#artifacts.tablesort-bound").exists());
    assert!(page.report.links.is_none());
}
