//! Block grouping.
//!
//! Merges the scanned line tokens into blocks: fence pairs become callout
//! boxes, maximal runs of table rows become one table, maximal runs of list
//! items become one list. Blank lines separate runs and are dropped here —
//! they never reach the output.

use crate::callout::CalloutKind;
use crate::scan::{LineKind, Token};

/// A structural block ready for HTML emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// Fenced callout. `body` holds the raw interior lines; `trailing` is
    /// text that followed the closing colons on the fence line, emitted
    /// directly after the box.
    Callout {
        kind: CalloutKind,
        body: Vec<&'a str>,
        trailing: Option<&'a str>,
    },
    Heading {
        level: u8,
        text: &'a str,
    },
    Rule,
    Quote(&'a str),
    /// Consecutive table rows; each entry is the text between the outer pipes.
    Table(Vec<&'a str>),
    /// Consecutive list items.
    List(Vec<&'a str>),
    /// A plain text line (paragraph candidate).
    Text(&'a str),
}

/// Group classified lines into blocks.
pub(crate) fn group<'a>(tokens: &[Token<'a>]) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i].kind {
            LineKind::Fence {
                kind: Some(kind), ..
            } => {
                if let Some((interior, rest)) = find_close(&tokens[i + 1..]) {
                    let body = tokens[i + 1..i + 1 + interior]
                        .iter()
                        .map(|t| t.raw)
                        .collect();
                    blocks.push(Block::Callout {
                        kind,
                        body,
                        trailing: (!rest.is_empty()).then_some(rest),
                    });
                    i += interior + 2;
                } else {
                    // Unterminated fence: fail open, the line is plain text
                    // and the would-be interior is classified normally.
                    blocks.push(Block::Text(tokens[i].raw));
                    i += 1;
                }
            }
            // A bare or unrecognized fence outside a box is plain text.
            LineKind::Fence { kind: None, .. } => {
                blocks.push(Block::Text(tokens[i].raw));
                i += 1;
            }
            LineKind::Heading { level, text } => {
                blocks.push(Block::Heading { level, text });
                i += 1;
            }
            LineKind::Rule => {
                blocks.push(Block::Rule);
                i += 1;
            }
            LineKind::Quote(text) => {
                blocks.push(Block::Quote(text));
                i += 1;
            }
            LineKind::TableRow(_) => {
                let rows = collect_run(tokens, &mut i, |kind| match *kind {
                    LineKind::TableRow(inner) => Some(inner),
                    _ => None,
                });
                blocks.push(Block::Table(rows));
            }
            LineKind::ListItem(_) => {
                let items = collect_run(tokens, &mut i, |kind| match *kind {
                    LineKind::ListItem(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::List(items));
            }
            LineKind::Blank => i += 1,
            LineKind::Text => {
                blocks.push(Block::Text(tokens[i].raw));
                i += 1;
            }
        }
    }

    blocks
}

/// Find the first closing fence in the lines after an opener.
///
/// Any line starting with `:::` closes the box — including another opener,
/// so boxes never nest: an inner fence terminates the outer box early.
/// Returns the interior length and the text after the closing colons.
fn find_close<'a>(tokens: &[Token<'a>]) -> Option<(usize, &'a str)> {
    tokens.iter().enumerate().find_map(|(i, token)| {
        if let LineKind::Fence { rest, .. } = token.kind {
            Some((i, rest))
        } else {
            None
        }
    })
}

/// Collect a maximal run of same-kind tokens starting at `*i`.
fn collect_run<'a, F>(tokens: &[Token<'a>], i: &mut usize, extract: F) -> Vec<&'a str>
where
    F: Fn(&LineKind<'a>) -> Option<&'a str>,
{
    let mut run = Vec::new();
    while let Some(text) = tokens.get(*i).and_then(|token| extract(&token.kind)) {
        run.push(text);
        *i += 1;
    }
    run
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scan::scan;

    fn blocks(input: &str) -> Vec<Block<'_>> {
        group(&scan(input))
    }

    #[test]
    fn test_callout_pairing() {
        let got = blocks(":::tip\nfirst\nsecond\n:::");
        assert_eq!(
            got,
            vec![Block::Callout {
                kind: CalloutKind::Tip,
                body: vec!["first", "second"],
                trailing: None,
            }]
        );
    }

    #[test]
    fn test_callout_empty_interior() {
        let got = blocks(":::warning\n:::");
        assert_eq!(
            got,
            vec![Block::Callout {
                kind: CalloutKind::Warning,
                body: vec![],
                trailing: None,
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_fails_open() {
        let got = blocks(":::tip\n## Heading");
        assert_eq!(
            got,
            vec![
                Block::Text(":::tip"),
                Block::Heading {
                    level: 2,
                    text: "Heading"
                },
            ]
        );
    }

    #[test]
    fn test_inner_fence_closes_outer_early() {
        // Boxes do not nest: the inner opener terminates the tip box and its
        // name survives as trailing text.
        let got = blocks(":::tip\nouter\n:::example\ninner\n:::\n:::");
        assert_eq!(
            got,
            vec![
                Block::Callout {
                    kind: CalloutKind::Tip,
                    body: vec!["outer"],
                    trailing: Some("example"),
                },
                Block::Text("inner"),
                Block::Text(":::"),
                Block::Text(":::"),
            ]
        );
    }

    #[test]
    fn test_table_run() {
        let got = blocks("|a|b|\n|1|2|");
        assert_eq!(got, vec![Block::Table(vec!["a|b", "1|2"])]);
    }

    #[test]
    fn test_blank_line_splits_table_runs() {
        let got = blocks("|a|\n\n|b|");
        assert_eq!(
            got,
            vec![Block::Table(vec!["a"]), Block::Table(vec!["b"])]
        );
    }

    #[test]
    fn test_list_run() {
        let got = blocks("- one\n- two\ntext");
        assert_eq!(
            got,
            vec![Block::List(vec!["one", "two"]), Block::Text("text")]
        );
    }

    #[test]
    fn test_blank_line_splits_list_runs() {
        let got = blocks("- one\n\n- two");
        assert_eq!(got, vec![Block::List(vec!["one"]), Block::List(vec!["two"])]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let got = blocks("a\n\n\n\nb");
        assert_eq!(got, vec![Block::Text("a"), Block::Text("b")]);
    }

    #[test]
    fn test_stray_close_is_text() {
        let got = blocks("text\n:::\nmore");
        assert_eq!(
            got,
            vec![Block::Text("text"), Block::Text(":::"), Block::Text("more")]
        );
    }
}
