//! Forced text-direction blocks (`ltr` / `rtl`).

/// Parse a direction info-string. Only the exact tags count.
pub fn parse(info: &str) -> Option<&'static str> {
    match info {
        "ltr" => Some("ltr"),
        "rtl" => Some("rtl"),
        _ => None,
    }
}

/// Wrap already-rendered inner HTML in a directional container.
pub fn wrap(direction: &str, inner_html: &str) -> String {
    format!("<div class=\"{direction}\">\n{inner_html}</div>\n")
}
