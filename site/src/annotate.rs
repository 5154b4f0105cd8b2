//! Carry the monolith's open/closed fragment on links back to the home page.
//!
//! Runs on every page. When the current location hash names a state, every
//! anchor pointing at the home document is rewritten to reopen the home page
//! in that state. Unrecognized or missing fragments leave links untouched.

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;

use crate::consts::HOME_DOCUMENT;
use crate::fragment::{self, CLOSED_HASH, OPEN_HASH};

/// Whether `href` is one of the home-document links this pass manages.
#[must_use]
pub fn is_home_href(href: &str) -> bool {
    match href.strip_prefix(HOME_DOCUMENT) {
        Some(rest) => rest.is_empty() || rest == OPEN_HASH || rest == CLOSED_HASH,
        None => false,
    }
}

/// The home href to use for the state named by `hash`, if any.
#[must_use]
pub fn home_target(hash: &str) -> Option<String> {
    fragment::read_state(hash).map(|state| fragment::with_fragment(HOME_DOCUMENT, state))
}

/// Select the home links out of a page's anchor hrefs, returning their indices.
#[must_use]
pub fn home_link_indices<'a, I>(hrefs: I) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter_map(|(i, href)| href.filter(|h| is_home_href(h)).map(|_| i))
        .collect()
}
