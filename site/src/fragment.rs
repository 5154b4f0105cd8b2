//! URL fragment protocol for the monolith's open/closed state.
//!
//! `#open` and `#active` read as [`Activation::Active`]; `#closed` and `#rest`
//! read as [`Activation::Rest`]. Matching ignores ASCII case. Writing always
//! uses the canonical `#open` / `#closed` spellings.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use crate::state::Activation;

pub const OPEN_HASH: &str = "#open";
pub const CLOSED_HASH: &str = "#closed";

/// Decode a location hash (including the leading `#`) into a state, if recognized.
#[must_use]
pub fn read_state(hash: &str) -> Option<Activation> {
    match hash.to_ascii_lowercase().as_str() {
        "#open" | "#active" => Some(Activation::Active),
        "#closed" | "#rest" => Some(Activation::Rest),
        _ => None,
    }
}

/// The canonical fragment for a state.
#[must_use]
pub fn hash_for(state: Activation) -> &'static str {
    match state {
        Activation::Active => OPEN_HASH,
        Activation::Rest => CLOSED_HASH,
    }
}

/// Replace whatever fragment `href` carries with the one for `state`.
#[must_use]
pub fn with_fragment(href: &str, state: Activation) -> String {
    let base = href.split_once('#').map_or(href, |(base, _)| base);
    format!("{base}{}", hash_for(state))
}

/// Same-document URL used for a non-reloading history update.
#[must_use]
pub fn replacement_url(pathname: &str, search: &str, state: Activation) -> String {
    format!("{pathname}{search}{}", hash_for(state))
}
