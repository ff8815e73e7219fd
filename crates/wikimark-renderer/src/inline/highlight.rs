//! `==text==` highlight markers.

use std::sync::LazyLock;

use regex::Regex;

static HIGHLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=]+?)==").expect("valid highlight regex"));

/// Whether the text contains at least one complete highlight span.
pub fn has_marker(text: &str) -> bool {
    HIGHLIGHT_RE.is_match(text)
}

/// Replace every `==text==` span with a `<mark>` wrapper.
///
/// The input must already be HTML-escaped; the markers themselves survive
/// escaping, so the regex still matches.
pub fn apply(escaped: &str) -> String {
    HIGHLIGHT_RE.replace_all(escaped, "<mark>$1</mark>").into_owned()
}
