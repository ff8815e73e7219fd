//! Typographic shortcode replacement.

use std::sync::LazyLock;

use regex::Regex;

/// Matches fenced code blocks and inline code spans in one pass.
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```|`[^`]+`").expect("valid code span regex"));

/// Shortcode table, applied in this order.
const SHORTCODES: [(&str, &str); 9] = [
    ("(c)", "\u{a9}"),
    ("(r)", "\u{ae}"),
    ("(tm)", "\u{2122}"),
    ("(p)", "\u{b6}"),
    ("+-", "\u{b1}"),
    ("...", "\u{2026}"),
    ("1/2", "\u{bd}"),
    ("1/4", "\u{bc}"),
    ("3/4", "\u{be}"),
];

/// Replace typographic shortcodes everywhere except inside code markup.
///
/// Code spans and fenced blocks are swapped for placeholder tokens, the
/// substitutions run over the rest, and the code is restored verbatim.
pub fn replace_shortcodes(input: &str) -> String {
    let mut protected = Vec::new();
    let mut text = CODE_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            protected.push(caps[0].to_owned());
            format!("_CODE_BLOCK_{}_", protected.len() - 1)
        })
        .into_owned();

    for (pattern, replacement) in SHORTCODES {
        text = text.replace(pattern, replacement);
    }

    for (i, code) in protected.iter().enumerate() {
        text = text.replacen(&format!("_CODE_BLOCK_{i}_"), code, 1);
    }

    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_replacements() {
        assert_eq!(replace_shortcodes("(c) (r) (tm)"), "© ® ™");
        assert_eq!(replace_shortcodes("1/2 1/4 3/4"), "½ ¼ ¾");
        assert_eq!(replace_shortcodes("wait..."), "wait…");
        assert_eq!(replace_shortcodes("+-5%"), "±5%");
    }

    #[test]
    fn test_inline_code_protected() {
        assert_eq!(replace_shortcodes("use `(c)` here"), "use `(c)` here");
    }

    #[test]
    fn test_fenced_block_protected() {
        let input = "before (c)\n```\nfn f() { /* ... */ }\n```\nafter (r)";
        let output = replace_shortcodes(input);
        assert!(output.contains("before ©"));
        assert!(output.contains("/* ... */"));
        assert!(output.contains("after ®"));
    }

    #[test]
    fn test_mixed_code_and_text() {
        assert_eq!(
            replace_shortcodes("(c) `...` (tm)"),
            "© `...` ™"
        );
    }

    #[test]
    fn test_consecutive_shortcodes() {
        assert_eq!(replace_shortcodes("(c)(c)(c)"), "©©©");
    }

    #[test]
    fn test_no_shortcodes() {
        assert_eq!(replace_shortcodes("plain text"), "plain text");
    }
}
