//! HTML emission.
//!
//! Turns the grouped blocks into the final HTML fragment. Emission order
//! and formatting reproduce the legacy renderer's observable output: one
//! fragment per block joined by single newlines, paragraph wrapping for
//! plain lines that do not already start an HTML tag, and a final pass
//! collapsing any leftover blank lines.

use std::fmt::Write;

use crate::block::Block;
use crate::callout::CalloutKind;
use crate::inline;

/// Emit the HTML fragment for a block sequence.
pub(crate) fn emit(blocks: &[Block<'_>]) -> String {
    let mut fragments = Vec::with_capacity(blocks.len());
    for block in blocks {
        fragments.push(emit_block(block));
    }
    collapse_newlines(&fragments.join("\n"))
}

fn emit_block(block: &Block<'_>) -> String {
    match block {
        Block::Callout {
            kind,
            body,
            trailing,
        } => emit_callout(*kind, body, trailing.as_deref()),
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", inline::apply(text))
        }
        Block::Rule => "<hr>".to_owned(),
        Block::Quote(text) => format!("<blockquote>{}</blockquote>", inline::apply(text)),
        Block::Table(rows) => emit_table(rows),
        Block::List(items) => emit_list(items),
        Block::Text(line) => emit_paragraph(line),
    }
}

/// Emit a callout `<div>` with its label and trimmed interior.
fn emit_callout(kind: CalloutKind, body: &[&str], trailing: Option<&str>) -> String {
    let interior = body.join("\n");
    let content = interior
        .trim()
        .lines()
        .map(inline::apply)
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = format!(
        r#"<div class="{}"><strong>{}:</strong>{}{content}</div>"#,
        kind.css_class(),
        kind.label(),
        kind.separator(),
    );
    // An early close leaves its remainder glued after the box, exactly
    // where the legacy renderer left it.
    if let Some(rest) = trailing {
        out.push_str(&inline::apply(rest));
    }
    out
}

/// Emit a table from a run of rows.
///
/// The first row becomes the header. Body rows where every cell is entirely
/// dashes are separator rows and are dropped wherever they appear; a row
/// mixing dash-only and ordinary cells is data and survives.
fn emit_table(rows: &[&str]) -> String {
    let mut out = String::from(r#"<div class="table-wrapper"><table><thead>"#);
    push_row(&mut out, rows[0], "th");
    out.push_str("</thead><tbody>");

    let mut first = true;
    for row in &rows[1..] {
        if is_separator_row(row) {
            continue;
        }
        if !first {
            out.push('\n');
        }
        push_row(&mut out, row, "td");
        first = false;
    }

    out.push_str("</tbody></table></div>");
    out
}

/// Append one `<tr>` with the given cell element name.
fn push_row(out: &mut String, inner: &str, cell_tag: &str) {
    out.push_str("<tr>");
    for cell in inner.split('|') {
        let _ = write!(
            out,
            "<{cell_tag}>{}</{cell_tag}>",
            inline::apply(cell.trim())
        );
    }
    out.push_str("</tr>");
}

/// True when every cell of the row consists of one or more dashes.
fn is_separator_row(inner: &str) -> bool {
    inner.split('|').all(|cell| {
        let cell = cell.trim();
        !cell.is_empty() && cell.chars().all(|c| c == '-')
    })
}

fn emit_list(items: &[&str]) -> String {
    let items = items
        .iter()
        .map(|item| format!("<li>{}</li>", inline::apply(item)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<ul>{items}</ul>")
}

/// Wrap a plain line in `<p>` unless it already starts an HTML tag.
///
/// The check runs after inline rewriting, so a line that begins with an
/// emphasis or code span starts with its emitted tag and is not wrapped.
fn emit_paragraph(line: &str) -> String {
    let rendered = inline::apply(line);
    if starts_with_tag(&rendered) {
        rendered
    } else {
        format!("<p>{rendered}</p>")
    }
}

/// A line "starts a tag" when it begins with `<` followed by an ASCII
/// lowercase letter or `/`.
fn starts_with_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '/')
}

/// Collapse runs of two or more newlines to a single newline.
///
/// Interior blank lines of callout boxes are the only way such runs can
/// appear in the joined fragments.
fn collapse_newlines(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last_was_newline = false;
    for c in html.chars() {
        if c == '\n' {
            if last_was_newline {
                continue;
            }
            last_was_newline = true;
        } else {
            last_was_newline = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_separator_row_detection() {
        assert!(is_separator_row("-|-"));
        assert!(is_separator_row("---|--"));
        assert!(is_separator_row(" - | -- "));
        // Mixed rows are data, not separators.
        assert!(!is_separator_row("-|x"));
        assert!(!is_separator_row("a|b"));
        assert!(!is_separator_row("-|"));
    }

    #[test]
    fn test_starts_with_tag() {
        assert!(starts_with_tag("<p>x</p>"));
        assert!(starts_with_tag("</div>"));
        assert!(starts_with_tag("<em>x"));
        // Uppercase and non-letter starts are not tags for this dialect.
        assert!(!starts_with_tag("<Foo>"));
        assert!(!starts_with_tag("<3 hearts"));
        assert!(!starts_with_tag("plain"));
        assert!(!starts_with_tag(""));
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\n\n\nb"), "a\nb");
        assert_eq!(collapse_newlines("a\nb"), "a\nb");
        assert_eq!(collapse_newlines("a"), "a");
    }
}
