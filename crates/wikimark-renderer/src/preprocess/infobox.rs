//! GitHub-style alert blocks.
//!
//! Converts `> [!NOTE]` blockquotes (and the TIP, IMPORTANT, WARNING,
//! CAUTION variants) into alert markup ahead of parsing. The generated
//! wrapper is separated from the quoted content by blank lines, so the
//! content is still parsed as markdown inside the alert container.

use std::sync::LazyLock;

use regex::Regex;

use super::fence::FenceMarker;

static ALERT_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s*$").expect("valid alert regex")
});

#[derive(Clone, Copy, Debug)]
enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AlertKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NOTE" => Some(Self::Note),
            "TIP" => Some(Self::Tip),
            "IMPORTANT" => Some(Self::Important),
            "WARNING" => Some(Self::Warning),
            "CAUTION" => Some(Self::Caution),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Important => "important",
            Self::Warning => "warning",
            Self::Caution => "caution",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Tip => "Tip",
            Self::Important => "Important",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Note => r#"<i class="fa fa-info-circle" aria-hidden="true"></i>"#,
            Self::Tip => r#"<i class="fa fa-lightbulb-o" aria-hidden="true"></i>"#,
            Self::Important => r#"<i class="fa fa-exclamation-circle" aria-hidden="true"></i>"#,
            Self::Warning => r#"<i class="fa fa-exclamation-triangle" aria-hidden="true"></i>"#,
            Self::Caution => r#"<i class="fa fa-ban" aria-hidden="true"></i>"#,
        }
    }
}

/// Convert alert blockquotes to alert markup, leaving fenced code alone.
pub fn convert_alerts(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut fence: Option<FenceMarker> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if let Some(marker) = fence {
            if marker.closes(trimmed) {
                fence = None;
            }
            result.push(line.to_owned());
            i += 1;
            continue;
        }
        if let Some((marker, _)) = FenceMarker::open(trimmed) {
            fence = Some(marker);
            result.push(line.to_owned());
            i += 1;
            continue;
        }

        let kind = ALERT_START_RE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .and_then(|tag| AlertKind::from_tag(tag.as_str()));

        if let Some(kind) = kind {
            // Collect the quoted lines that follow, stripping the marker
            // and one optional space. A blank or unquoted line ends the
            // alert, as it ends any blockquote.
            let mut content: Vec<&str> = Vec::new();
            let mut j = i + 1;
            while j < lines.len() {
                let next = lines[j];
                if !next.trim_start().starts_with('>') {
                    break;
                }
                if let Some(idx) = next.find('>') {
                    let rest = &next[idx + 1..];
                    content.push(rest.strip_prefix(' ').unwrap_or(rest));
                } else {
                    break;
                }
                j += 1;
            }

            result.push(alert_html(kind, &content));
            i = j;
            continue;
        }

        result.push(line.to_owned());
        i += 1;
    }

    result.join("\n")
}

fn alert_html(kind: AlertKind, content: &[&str]) -> String {
    format!(
        "<div class=\"markdown-alert markdown-alert-{class}\">\n\
         <p class=\"markdown-alert-title\">\n  {icon}\n  {title}\n</p>\n\
         <div class=\"markdown-alert-content\">\n\n{content}\n\n</div>\n</div>",
        class = kind.class(),
        icon = kind.icon(),
        title = kind.title(),
        content = content.join("\n"),
    )
}
