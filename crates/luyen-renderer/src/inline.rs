//! Inline span rendering.
//!
//! Emphasis and code spans are rewritten by a small non-greedy scanner
//! applied in longest-marker-first order: `***` (bold italic), `**` (bold),
//! `*` (italic), then `` ` `` (code). The order is load-bearing — running
//! the single marker first would consume the markers of the double and
//! triple forms.
//!
//! Matching is lazy: the first closing marker after at least one content
//! character wins. Input is a single line; spans never cross a line break
//! because callers split on lines before applying this pass.

use std::borrow::Cow;

/// Apply all inline span rewrites to one line of text.
pub(crate) fn apply(text: &str) -> String {
    let text = replace_spans(text, "***", "<strong><em>", "</em></strong>");
    let text = replace_spans(&text, "**", "<strong>", "</strong>");
    let text = replace_spans(&text, "*", "<em>", "</em>");
    replace_spans(&text, "`", "<code>", "</code>").into_owned()
}

/// Rewrite every `marker…marker` span as `open…close`.
///
/// A marker without a closing partner is kept as literal text. Returns the
/// input unchanged (borrowed) when the marker does not occur at all.
fn replace_spans<'a>(text: &'a str, marker: &str, open: &str, close: &str) -> Cow<'a, str> {
    if !text.contains(marker) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;
    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        match closing_marker(after, marker) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + marker.len()..];
            }
            None => {
                // Unbalanced: the marker itself is content.
                out.push_str(&rest[..start + marker.len()]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Find the closing marker, requiring at least one content character.
fn closing_marker(after: &str, marker: &str) -> Option<usize> {
    let first = after.chars().next()?;
    let skip = first.len_utf8();
    after[skip..].find(marker).map(|i| i + skip)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bold_italic() {
        assert_eq!(apply("***x***"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_bold() {
        assert_eq!(apply("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(apply("*x*"), "<em>x</em>");
    }

    #[test]
    fn test_code() {
        assert_eq!(apply("`let x = 1;`"), "<code>let x = 1;</code>");
    }

    #[test]
    fn test_mixed_markers_in_one_line() {
        assert_eq!(
            apply("a **b** and *c* and `d`"),
            "a <strong>b</strong> and <em>c</em> and <code>d</code>"
        );
    }

    #[test]
    fn test_triple_not_consumed_by_lower_levels() {
        assert_eq!(
            apply("***both*** then **bold**"),
            "<strong><em>both</em></strong> then <strong>bold</strong>"
        );
    }

    #[test]
    fn test_lazy_matching_stops_at_first_closer() {
        assert_eq!(apply("*a*b*"), "<em>a</em>b*");
        assert_eq!(apply("**a**b**c**"), "<strong>a</strong>b<strong>c</strong>");
    }

    #[test]
    fn test_unbalanced_markers_stay_literal() {
        assert_eq!(apply("a ** b"), "a ** b");
        assert_eq!(apply("5 * 3 = 15"), "5 * 3 = 15");
    }

    #[test]
    fn test_marker_requires_content() {
        // Adjacent markers have no content between them.
        assert_eq!(apply("``"), "``");
    }

    #[test]
    fn test_emphasis_inside_code_is_rendered() {
        // Emphasis passes run before the code pass, so markers inside
        // backticks are already rewritten when the code span is wrapped.
        assert_eq!(apply("`*a*`"), "<code><em>a</em></code>");
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(apply("**Mẹo**"), "<strong>Mẹo</strong>");
        assert_eq!(apply("*đúng*"), "<em>đúng</em>");
    }

    #[test]
    fn test_stars_in_literal_four_run() {
        // Degenerate marker runs degrade the same way the legacy renderer
        // did: the italic pass pairs the inner stars.
        assert_eq!(apply("****"), "<em>*</em>*");
    }
}
