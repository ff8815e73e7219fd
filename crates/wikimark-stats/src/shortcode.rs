//! Shortcode syntax and parameter parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a full `:::stats ...:::` shortcode, capturing the parameter text.
pub static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":::stats\s+(.*?):::").expect("valid shortcode regex"));

/// Matches one `key=value` parameter inside the shortcode body.
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)=([*\w-]+)").expect("valid parameter regex"));

/// Default item count for `recent=` when the value does not parse.
const DEFAULT_RECENT: usize = 5;

/// A parsed stats request.
#[derive(Debug, PartialEq, Eq)]
pub enum StatsRequest {
    Count(CountScope),
    Recent(usize),
    Invalid,
}

/// Scope of a document count.
#[derive(Debug, PartialEq, Eq)]
pub enum CountScope {
    /// Every document in the wiki.
    All,
    /// Documents under one top-level folder.
    Folder(String),
}

/// Parse the parameter text of a shortcode into a request.
///
/// The first recognized parameter wins; anything else is [`StatsRequest::Invalid`].
pub fn parse_request(params: &str) -> StatsRequest {
    for caps in PARAM_RE.captures_iter(params) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        match key {
            "count" => {
                if value == "*" || value.eq_ignore_ascii_case("all") {
                    return StatsRequest::Count(CountScope::All);
                }
                return StatsRequest::Count(CountScope::Folder(value.to_owned()));
            }
            "recent" => {
                let limit = match value.parse::<i64>() {
                    Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_RECENT),
                    _ => DEFAULT_RECENT,
                };
                return StatsRequest::Recent(limit);
            }
            _ => {}
        }
    }
    StatsRequest::Invalid
}
