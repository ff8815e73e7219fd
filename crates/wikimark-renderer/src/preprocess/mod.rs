//! Source-text preprocessing, applied before parsing.
//!
//! Three passes run in a fixed order:
//!
//! 1. [`typography`] replaces typographic shortcodes outside code markup.
//! 2. [`infobox`] converts `> [!NOTE]` style blockquotes to alert markup.
//! 3. [`structure`] repairs list/table/fence nesting so the block parser
//!    sees unambiguous input, converting task-list lines along the way.

mod fence;
mod infobox;
mod structure;
mod tasklist;
mod typography;

/// Normalize raw wiki markdown for parsing.
#[must_use]
pub fn preprocess(input: &str) -> String {
    let text = typography::replace_shortcodes(input);
    structure::repair_structure(&infobox::convert_alerts(&text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preprocess_applies_typography() {
        assert_eq!(preprocess("(c) 2024"), "© 2024");
    }

    #[test]
    fn test_preprocess_protects_inline_code() {
        assert_eq!(preprocess("`(c)`"), "`(c)`");
    }

    #[test]
    fn test_preprocess_idempotent_on_clean_input() {
        let input = "# Title\n\nA paragraph with © text.\n\n- one\n- two\n\nClosing paragraph.\n";
        let once = preprocess(input);
        assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn test_preprocess_converts_alerts() {
        let out = preprocess("> [!WARNING]\n> careful");
        assert!(out.contains("markdown-alert-warning"));
    }

    #[test]
    fn test_preprocess_leaves_alert_syntax_in_fences() {
        let out = preprocess("```\n> [!WARNING]\n```");
        assert!(out.contains("> [!WARNING]"));
        assert!(!out.contains("markdown-alert"));
    }

    #[test]
    fn test_preprocess_converts_task_items() {
        let out = preprocess("- [ ] buy milk");
        assert!(out.contains("type=\"checkbox\""));
        assert!(!out.contains("checked"));
    }
}
