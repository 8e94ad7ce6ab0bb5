// ABOUTME: CLI binary for docpolish page post-processing.
// ABOUTME: Rewrites HTML files or directories and reports what changed, optionally as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use docpolish::{PageReport, Processor};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "docpolish")]
#[command(about = "Apply post-render link and table behaviors to documentation pages")]
struct Args {
    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Rewrite input files in place
    #[arg(long = "in-place")]
    in_place: bool,

    /// Output a JSON report instead of rewritten HTML
    #[arg(long = "json")]
    json_output: bool,

    /// Skip the link normalizer
    #[arg(long = "no-links")]
    no_links: bool,

    /// Skip the table sorter
    #[arg(long = "no-tables")]
    no_tables: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// HTML files or directories to process (directories are walked for .html/.htm)
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // The parser stack logs aggressively at low levels; keep it quiet.
    builder.filter_module("html5ever", log::LevelFilter::Error);
    builder.filter_module("selectors", log::LevelFilter::Warn);
    let _ = builder.try_init();
}

/// Collects the pages to process: files are taken as given, directories are
/// walked recursively for `.html`/`.htm` entries. The result is sorted so
/// runs are deterministic.
fn collect_pages(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut pages)?;
        } else {
            pages.push(path.clone());
        }
    }
    pages.sort();
    pages.dedup();
    Ok(pages)
}

fn walk_dir(dir: &Path, pages: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading directory {}", dir.display()))?
            .path();
        if path.is_dir() {
            walk_dir(&path, pages)?;
        } else if is_html(&path) {
            pages.push(path);
        }
    }
    Ok(())
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html") | Some("htm")
    )
}

/// Processes one page file. With `in_place` the file is rewritten and no
/// HTML is returned; otherwise the rewritten HTML comes back for the caller
/// to route.
fn process_page(
    processor: &Processor,
    path: &Path,
    in_place: bool,
) -> Result<(PageReport, Option<String>)> {
    let html =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let page = processor.process(&html)?;
    if in_place {
        fs::write(path, &page.html).with_context(|| format!("writing {}", path.display()))?;
        Ok((page.report, None))
    } else {
        Ok((page.report, Some(page.html)))
    }
}

fn write_or_print(output: &Option<PathBuf>, content: &str) -> bool {
    if let Some(path) = output {
        if let Err(e) = fs::write(path, content) {
            eprintln!("error writing to {:?}: {}", path, e);
            return false;
        }
        true
    } else {
        println!("{}", content);
        true
    }
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    // Validate args
    if args.in_place && args.output.is_some() {
        eprintln!("error: cannot use both --in-place and --output");
        return ExitCode::from(1);
    }

    let pages = match collect_pages(&args.paths) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if pages.is_empty() {
        eprintln!("error: no HTML files found under the given paths");
        return ExitCode::from(1);
    }

    if pages.len() > 1 && !args.in_place && !args.json_output {
        eprintln!("error: multiple inputs produce multiple pages; use --in-place, or --json for a report");
        return ExitCode::from(1);
    }

    let processor = Processor::builder()
        .normalize_links(!args.no_links)
        .sort_tables(!args.no_tables)
        .build();

    let start = Instant::now();
    let mut entries = Vec::new();
    let mut rendered: Option<String> = None;
    let mut links_total = 0usize;
    let mut tables_total = 0usize;
    let mut failed = 0usize;

    for path in &pages {
        match process_page(&processor, path, args.in_place) {
            Ok((report, html)) => {
                if html.is_some() {
                    rendered = html;
                }
                links_total += report.links_touched();
                tables_total += report.tables_wired();
                entries.push(json!({
                    "path": path.display().to_string(),
                    "ok": true,
                    "report": report,
                    "error": null
                }));
            }
            Err(err) => {
                eprintln!("error processing {}: {:#}", path.display(), err);
                failed += 1;
                entries.push(json!({
                    "path": path.display().to_string(),
                    "ok": false,
                    "report": null,
                    "error": err.to_string()
                }));
            }
        }
    }

    let elapsed = start.elapsed();
    let processed = entries.len() - failed;
    let mut had_error = failed > 0;

    if args.json_output {
        let envelope = json!({
            "pages": entries,
            "total_pages": entries.len(),
            "processed": processed,
            "failed": failed
        });
        let output_str = serde_json::to_string_pretty(&envelope).unwrap();
        if !write_or_print(&args.output, &output_str) {
            had_error = true;
        }
    } else if args.in_place {
        println!(
            "processed {} page(s): {} link(s) touched, {} table(s) wired, {} failed",
            processed, links_total, tables_total, failed
        );
    } else if let Some(html) = rendered {
        if !write_or_print(&args.output, &html) {
            had_error = true;
        }
    }

    // Print timing if requested
    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
