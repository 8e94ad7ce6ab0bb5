// ABOUTME: Per-page processing reports: link and table counters.
// ABOUTME: Serializable so the CLI can emit machine-readable summaries.

use serde::{Deserialize, Serialize};

/// Counters from one run of the link normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    /// Elements whose legacy marker class was rewritten to the canonical one.
    pub normalized: usize,
    /// Elements carrying the canonical class whose target attribute was set.
    pub retargeted: usize,
}

/// Counters from one run of the table sorter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Tables found within article content.
    pub scanned: usize,
    /// Tables that received sort wiring this run.
    pub attached: usize,
    /// Tables left untouched: no marker, wrong shape, or already wired.
    pub skipped: usize,
}

/// Everything one document-ready pass did to a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    /// `None` when the pass did not run the link normalizer (renders after
    /// the first, or the pass is disabled).
    pub links: Option<LinkStats>,
    /// `None` when table sorting is disabled.
    pub tables: Option<TableStats>,
}

impl PageReport {
    /// Elements touched by the link pass.
    pub fn links_touched(&self) -> usize {
        self.links.map_or(0, |l| l.normalized + l.retargeted)
    }

    /// Tables wired by the table pass.
    pub fn tables_wired(&self) -> usize {
        self.tables.map_or(0, |t| t.attached)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn helpers_sum_the_right_counters() {
        let report = PageReport {
            links: Some(LinkStats {
                normalized: 2,
                retargeted: 5,
            }),
            tables: Some(TableStats {
                scanned: 3,
                attached: 1,
                skipped: 2,
            }),
        };
        assert_eq!(report.links_touched(), 7);
        assert_eq!(report.tables_wired(), 1);

        let quiet = PageReport::default();
        assert_eq!(quiet.links_touched(), 0);
        assert_eq!(quiet.tables_wired(), 0);
    }

    #[test]
    fn report_serializes_with_stable_field_names() {
        let report = PageReport {
            links: Some(LinkStats {
                normalized: 1,
                retargeted: 1,
            }),
            tables: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["links"]["normalized"], 1);
        assert_eq!(json["links"]["retargeted"], 1);
        assert!(json["tables"].is_null());
    }
}
