// ABOUTME: Link normalizer: rewrites legacy external-link markup and retargets links.
// ABOUTME: The class pass runs before the attribute pass so rewritten elements get retargeted too.

//! External-link normalization.
//!
//! Documentation pages accumulated two markings for external links: the
//! legacy `elink` class and the canonical `external-link` class. The
//! normalizer rewrites the legacy marking wherever it appears, then forces
//! every canonically-marked element to open in a new tab. Both passes match
//! on class alone, whatever the element type, exactly like the stylesheet
//! does.

use dom_query::Document;
use log::{debug, info};

use crate::report::LinkStats;
use crate::selectors;

/// Legacy marker class, replaced wherever found.
pub const LEGACY_CLASS: &str = "elink";

/// Canonical marker class for external links.
pub const CANONICAL_CLASS: &str = "external-link";

/// Target value that opens a new browsing context.
pub const NEW_TAB_TARGET: &str = "_blank";

pub(crate) const LEGACY_SELECTOR: &str = ".elink";
pub(crate) const CANONICAL_SELECTOR: &str = ".external-link";

/// Rewrites the legacy marker class to the canonical one on every element
/// carrying it.
///
/// Returns how many elements were rewritten. Logs once after the pass, also
/// when nothing matched.
pub fn replace_class(doc: &Document) -> usize {
    let count = match selectors::cached(LEGACY_SELECTOR) {
        Some(matcher) => {
            let mut sel = doc.select_matcher(&matcher);
            let count = sel.nodes().len();
            sel.remove_class(LEGACY_CLASS);
            sel.add_class(CANONICAL_CLASS);
            count
        }
        None => 0,
    };
    info!("Applied class=external-link");
    debug!("rewrote {} legacy link marker(s)", count);
    count
}

/// Sets the new-tab target on every element carrying the canonical marker
/// class.
///
/// Returns how many elements were touched. Logs once after the pass, also
/// when nothing matched.
pub fn add_target_blank(doc: &Document) -> usize {
    let count = match selectors::cached(CANONICAL_SELECTOR) {
        Some(matcher) => {
            let mut sel = doc.select_matcher(&matcher);
            let count = sel.nodes().len();
            sel.set_attr("target", NEW_TAB_TARGET);
            count
        }
        None => 0,
    };
    info!("Applied target=_blank");
    debug!("set target={} on {} element(s)", NEW_TAB_TARGET, count);
    count
}

/// Runs the class rewrite, then the target pass, in that fixed order, so
/// elements holding only the legacy class at call time still end up
/// retargeted.
pub fn update_links(doc: &Document) -> LinkStats {
    let normalized = replace_class(doc);
    let retargeted = add_target_blank(doc);
    LinkStats {
        normalized,
        retargeted,
    }
}
