// ABOUTME: Compiled CSS matcher cache shared by the page handlers.
// ABOUTME: Selectors compile once per process; invalid ones cache as None.

//! Matcher caching for repeated page scans.
//!
//! The handlers run the same handful of class selectors against every page,
//! so matchers are compiled once and kept for the life of the process. An
//! invalid selector is cached as `None` and callers treat it as an empty
//! selection.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::Matcher;
use once_cell::sync::Lazy;

static MATCHERS: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled matcher for `css`, compiling and caching on first use.
///
/// `None` means the selector does not parse; that result is cached too.
pub(crate) fn cached(css: &str) -> Option<Matcher> {
    {
        let cache = MATCHERS.read().unwrap();
        if let Some(hit) = cache.get(css) {
            return hit.clone();
        }
    }

    let compiled = Matcher::new(css).ok();
    let mut cache = MATCHERS.write().unwrap();
    // Re-check: another thread may have compiled while we waited on the lock
    if let Some(hit) = cache.get(css) {
        return hit.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Compiles a batch of selectors into the cache ahead of first use.
pub(crate) fn warm<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = MATCHERS.write().unwrap();
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), Matcher::new(css).ok());
        }
    }
}
