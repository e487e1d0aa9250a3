//! Dialect markdown renderer for grammar topic summaries.
//!
//! Topic summaries are authored in a house dialect: a small subset of
//! markdown (headings `##`–`####`, emphasis, inline code, blockquotes,
//! pipe tables, `- ` lists, `---` rules) plus fenced callout boxes
//! (`:::tip`, `:::example`, `:::warning`). [`render`] turns one summary
//! into an HTML fragment for direct injection into a trusted display
//! region.
//!
//! # Architecture
//!
//! Rendering is a fixed three-stage pipeline over the input lines:
//!
//! 1. `scan` — classify each line into a typed token
//! 2. `block` — group tokens into blocks (fence pairing, table and list
//!    runs, header promotion, separator-row filtering)
//! 3. `html` — emit fragments, apply inline spans, wrap paragraphs,
//!    collapse blank lines
//!
//! # Contract
//!
//! The renderer is pure, synchronous and infallible: malformed constructs
//! (unterminated fences, unbalanced markers, ragged table rows) are not
//! errors — they fail to match and degrade to ordinary paragraph text.
//! The input is trusted, pre-vetted content; nothing is HTML-escaped.
//! Rendering is single-pass only: feeding rendered output back in will
//! re-wrap lines and corrupt the markup.
//!
//! # Example
//!
//! ```
//! use luyen_renderer::render;
//!
//! let html = render("## Mạo từ\nDùng *a/an* trước danh từ đếm được.");
//! assert_eq!(
//!     html,
//!     "<h2>Mạo từ</h2>\n<p>Dùng <em>a/an</em> trước danh từ đếm được.</p>"
//! );
//! ```

mod block;
mod callout;
mod html;
mod inline;
mod scan;

pub use callout::CalloutKind;

/// Render a topic summary from the house dialect to an HTML fragment.
///
/// Always produces output; there is no failure mode. See the crate docs
/// for the dialect and the single-pass contract.
#[must_use]
pub fn render(raw: &str) -> String {
    html::emit(&block::group(&scan::scan(raw)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_line_is_replaced() {
        let html = render("## Heading");
        assert_eq!(html, "<h2>Heading</h2>");
        assert!(!html.contains("##"));
    }

    #[test]
    fn test_all_heading_levels() {
        assert_eq!(
            render("## A\n### B\n#### C"),
            "<h2>A</h2>\n<h3>B</h3>\n<h4>C</h4>"
        );
    }

    #[test]
    fn test_h1_is_not_dialect() {
        assert_eq!(render("# Title"), "<p># Title</p>");
    }

    #[test]
    fn test_bold_italic_single_span() {
        let html = render("***bold-italic***");
        assert!(html.contains("<strong><em>bold-italic</em></strong>"));
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render("a\n---\nb"), "<p>a</p>\n<hr>\n<p>b</p>");
    }

    #[test]
    fn test_table_with_separator_row() {
        let html = render("|A|B|\n|-|-|\n|1|2|");
        assert_eq!(
            html,
            "<div class=\"table-wrapper\"><table>\
             <thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody>\
             </table></div>"
        );
    }

    #[test]
    fn test_separator_row_dropped_anywhere_in_body() {
        let html = render("|A|B|\n|1|2|\n|-|-|\n|3|4|");
        assert!(html.contains("<tr><td>1</td><td>2</td></tr>"));
        assert!(html.contains("<tr><td>3</td><td>4</td></tr>"));
        assert!(!html.contains("<td>-</td>"));
    }

    #[test]
    fn test_mixed_dash_row_survives_as_data() {
        let html = render("|A|B|\n|-|x|");
        assert!(html.contains("<tr><td>-</td><td>x</td></tr>"));
    }

    #[test]
    fn test_table_cells_are_trimmed() {
        let html = render("| A | B |\n| 1 | 2 |");
        assert!(html.contains("<th>A</th><th>B</th>"));
        assert!(html.contains("<td>1</td><td>2</td>"));
    }

    #[test]
    fn test_warning_box() {
        let html = render(":::warning\nDo not do X.\n:::");
        assert_eq!(
            html,
            "<div class=\"warning-box\"><strong>⚠️ Lưu ý:</strong> Do not do X.</div>"
        );
    }

    #[test]
    fn test_tip_box() {
        assert_eq!(
            render(":::tip\nNhớ quy tắc này.\n:::"),
            "<div class=\"tip-box\"><strong>💡 Mẹo:</strong> Nhớ quy tắc này.</div>"
        );
    }

    #[test]
    fn test_example_box_uses_line_break() {
        assert_eq!(
            render(":::example\nShe *has* finished.\n:::"),
            "<div class=\"example-box\"><strong>📝 Ví dụ:</strong><br>She <em>has</em> finished.</div>"
        );
    }

    #[test]
    fn test_box_interior_is_trimmed() {
        let html = render(":::tip\n\n  padded  \n\n:::");
        assert_eq!(
            html,
            "<div class=\"tip-box\"><strong>💡 Mẹo:</strong> padded</div>"
        );
    }

    #[test]
    fn test_box_interior_keeps_block_syntax_literal() {
        let html = render(":::tip\nline one\n- not a list\n:::");
        assert_eq!(
            html,
            "<div class=\"tip-box\"><strong>💡 Mẹo:</strong> line one\n- not a list</div>"
        );
    }

    #[test]
    fn test_unterminated_box_degrades_to_paragraphs() {
        assert_eq!(
            render(":::tip\nno closer here"),
            "<p>:::tip</p>\n<p>no closer here</p>"
        );
    }

    #[test]
    fn test_plain_prose_wraps_every_line() {
        assert_eq!(
            render("first line\nsecond line\nthird line"),
            "<p>first line</p>\n<p>second line</p>\n<p>third line</p>"
        );
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let html = render("a\n\n\n\nb");
        assert!(!html.contains("\n\n"));
        assert_eq!(html, "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_blockquotes_are_not_merged() {
        assert_eq!(
            render("> one\n> two"),
            "<blockquote>one</blockquote>\n<blockquote>two</blockquote>"
        );
    }

    #[test]
    fn test_list_aggregation() {
        assert_eq!(
            render("- one\n- two"),
            "<ul><li>one</li>\n<li>two</li></ul>"
        );
    }

    #[test]
    fn test_raw_html_line_passes_through() {
        assert_eq!(render("<span>keep</span>"), "<span>keep</span>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_inline_inside_structures() {
        assert_eq!(render("## **Bold** title"), "<h2><strong>Bold</strong> title</h2>");
        assert_eq!(render("- dùng `to be`"), "<ul><li>dùng <code>to be</code></li></ul>");
        assert_eq!(
            render("> câu *phủ định*"),
            "<blockquote>câu <em>phủ định</em></blockquote>"
        );
        assert_eq!(
            render("|**V1**|\n|went|"),
            "<div class=\"table-wrapper\"><table><thead><tr><th><strong>V1</strong></th></tr></thead><tbody><tr><td>went</td></tr></tbody></table></div>"
        );
    }
}
