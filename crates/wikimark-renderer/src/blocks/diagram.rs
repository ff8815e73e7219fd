//! Mermaid diagram blocks.

/// Info-string tag for mermaid diagrams.
pub const MERMAID_TAG: &str = "mermaid";

/// Wrap diagram source in a container for client-side rendering.
///
/// The source is emitted verbatim; the mermaid runtime reads the element's
/// text content, so escaping would corrupt the diagram syntax.
pub fn render(source: &str) -> String {
    format!("<div class=\"mermaid\">\n{source}</div>\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wraps_source() {
        assert_eq!(
            render("graph TD;\nA-->B;\n"),
            "<div class=\"mermaid\">\ngraph TD;\nA-->B;\n</div>\n"
        );
    }
}
