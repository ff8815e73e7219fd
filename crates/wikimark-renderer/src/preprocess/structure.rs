//! Structural repair of list, table, and fence nesting.
//!
//! Markdown written in the wild often omits the blank lines and indentation
//! the block parser needs to nest code fences and tables inside list items,
//! or to start a list right after a paragraph inside a collapsible block.
//! This pass rewrites the source line-by-line so those constructs parse the
//! way authors expect, leaving everything else untouched.

use std::sync::LazyLock;

use regex::Regex;

use super::fence::FenceMarker;
use super::tasklist::convert_task_item;

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s").expect("valid ordered item regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s").expect("valid unordered item regex"));

static HORIZONTAL_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").expect("valid horizontal rule regex"));

static LINK_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.+\]:\s+").expect("valid link definition regex"));

/// Repair structural ambiguities in preprocessed markdown.
pub fn repair_structure(input: &str) -> String {
    let mut lines: Vec<String> = input.split('\n').map(str::to_owned).collect();
    let count = lines.len();

    // First pass: classify list items from the raw lines, then convert
    // task items in place. Classification happens before conversion so the
    // second pass still treats converted lines as list items.
    let mut is_list_item = vec![false; count];
    let mut indents = vec![String::new(); count];

    for (i, line) in lines.iter_mut().enumerate() {
        let is_list =
            ORDERED_ITEM_RE.is_match(line) || UNORDERED_ITEM_RE.is_match(line);
        if !is_list {
            continue;
        }
        is_list_item[i] = true;
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        indents[i] = line[..indent_len].to_owned();

        if let Some(converted) = convert_task_item(line.trim(), &indents[i]) {
            *line = converted;
        }
    }

    // Second pass: the state machine proper.
    let mut result: Vec<String> = Vec::with_capacity(count);
    let mut fence: Option<FenceMarker> = None;
    let mut in_list = false;
    let mut in_details_block = false;
    let mut in_table = false;
    let mut last_line_was_list = false;
    let mut last_line_was_text = false;
    let mut list_indent = String::new();
    let mut code_block_in_list = false;
    let mut current_list_indent = String::new();

    for i in 0..count {
        let line = &lines[i];
        let trimmed = line.trim();

        // Fence open/close toggles take priority over everything else.
        if let Some(marker) = fence {
            if marker.closes(trimmed) {
                fence = None;
                if code_block_in_list {
                    result.push(format!("{current_list_indent}{trimmed}"));
                    code_block_in_list = false;
                    current_list_indent.clear();
                } else {
                    result.push(trimmed.to_owned());
                }
                in_details_block = false;
                continue;
            }
        } else if let Some((marker, info)) = FenceMarker::open(trimmed) {
            fence = Some(marker);
            if info.starts_with("details") {
                in_details_block = true;
            }

            if last_line_was_list && !in_table {
                code_block_in_list = true;
                current_list_indent = format!("{list_indent}    ");

                // Blank lines between the list item and its fence would
                // break the list; drop them.
                while result.last().is_some_and(|l| l.trim().is_empty()) {
                    result.pop();
                }
                result.push(format!("{current_list_indent}{trimmed}"));
            } else {
                result.push(trimmed.to_owned());
            }
            continue;
        }

        if is_list_item[i] {
            // A list right after a paragraph inside a details block needs a
            // preceding blank line to be recognized as a list.
            if last_line_was_text && in_details_block && !last_line_was_list {
                result.push(String::new());
            }

            in_list = true;
            last_line_was_list = true;
            last_line_was_text = false;
            list_indent.clone_from(&indents[i]);

            result.push(line.clone());
            continue;
        }

        if fence.is_some() {
            if code_block_in_list {
                result.push(format!("{current_list_indent}{line}"));
            } else {
                result.push(line.clone());
            }

            // Inside a details block, remember whether the last non-blank
            // line was plain prose. That drives the blank-line injection
            // before a following list.
            if in_details_block && !trimmed.is_empty() {
                let is_table_line = trimmed.contains('|')
                    && (trimmed.starts_with('|') || trimmed.ends_with('|'));
                let is_heading = trimmed.starts_with('#');
                last_line_was_text = !is_heading
                    && !HORIZONTAL_RULE_RE.is_match(trimmed)
                    && !LINK_DEFINITION_RE.is_match(trimmed)
                    && !is_table_line;
            }
            continue;
        }

        let is_table_line =
            trimmed.contains('|') && (trimmed.starts_with('|') || trimmed.ends_with('|'));

        if is_table_line && in_list {
            // Tables nested under a list item need one blank line before
            // the first row and four extra spaces of indent on every row.
            if !in_table && last_line_was_list {
                result.push(String::new());
            }
            in_table = true;
            result.push(format!("{list_indent}    {trimmed}"));
            continue;
        } else if in_table && !is_table_line {
            in_table = false;
            result.push(String::new());
        }

        if !is_list_item[i] && !in_table {
            last_line_was_list = false;
        }

        if in_list && trimmed.is_empty() {
            // Look past the blank line: the list only ends when the next
            // non-blank line is neither a list item nor a table row.
            let next = lines[i + 1..]
                .iter()
                .enumerate()
                .find(|(_, l)| !l.trim().is_empty())
                .map(|(j, l)| (i + 1 + j, l));

            if let Some((j, next_line)) = next {
                if !is_list_item[j] && !next_line.trim().contains('|') {
                    in_list = false;
                    in_table = false;
                }
            }
        }

        result.push(line.clone());
    }

    result.join("\n")
}
