use crate::diagnostic::*;
use oxc_ast::ast::ObjectExpression;
use oxc_span::GetSpan;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub struct NoEmptyLinesInObjects;

/// ## What it does
///
/// Checks for blank lines between the members of an object literal.
///
/// Only the text between two members is looked at, so blank lines after `{`
/// or before `}` are not reported. Commas and comments between members are
/// kept by the fix, which only removes the blank lines. Blank lines inside a
/// block comment are part of the comment and are left alone.
///
/// ## Why is this bad?
///
/// Blank lines make an object look like several unrelated groups of keys and
/// make long style objects harder to scan.
///
/// ## Example
///
/// ```js
/// const styles = {
///   color: 'red',
///
///   margin: 0,
/// };
/// ```
///
/// Use instead:
/// ```js
/// const styles = {
///   color: 'red',
///   margin: 0,
/// };
/// ```
impl Violation for NoEmptyLinesInObjects {
    fn name(&self) -> String {
        "no-empty-lines-in-objects".to_string()
    }
    fn body(&self) -> String {
        "Unexpected empty line between object properties".to_string()
    }
}

// Two line breaks with only whitespace, possibly more line breaks, in between.
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// A piece of the text between two object members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GapSegment<'a> {
    /// Whitespace and commas.
    Text(&'a str),
    /// `/* ... */` or `// ...` up to, not including, the line break.
    Comment(&'a str),
}

fn split_comments(gap: &str) -> Vec<GapSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = gap;

    while !rest.is_empty() {
        let Some(start) = [rest.find("/*"), rest.find("//")].into_iter().flatten().min() else {
            segments.push(GapSegment::Text(rest));
            break;
        };
        if start > 0 {
            segments.push(GapSegment::Text(&rest[..start]));
        }

        let comment = &rest[start..];
        let end = if comment.starts_with("/*") {
            comment[2..].find("*/").map_or(comment.len(), |i| i + 4)
        } else {
            comment.find('\n').unwrap_or(comment.len())
        };
        segments.push(GapSegment::Comment(&comment[..end]));
        rest = &comment[end..];
    }

    segments
}

/// Collapse every run of blank lines in `gap` to a single line break.
///
/// Returns `None` if `gap` has no blank line outside of comments. Comments are
/// copied as they are, and so is the indentation after the last line break of
/// each run.
pub fn collapse_blank_lines(gap: &str) -> Option<String> {
    let mut changed = false;
    let mut collapsed = String::with_capacity(gap.len());

    for segment in split_comments(gap) {
        match segment {
            GapSegment::Comment(text) => collapsed.push_str(text),
            GapSegment::Text(text) => {
                let replaced = BLANK_LINES.replace_all(text, "\n");
                changed |= matches!(replaced, Cow::Owned(_));
                collapsed.push_str(&replaced);
            }
        }
    }

    changed.then_some(collapsed)
}

pub fn no_empty_lines_in_objects(obj: &ObjectExpression, source_text: &str) -> Vec<Diagnostic> {
    obj.properties
        .windows(2)
        .filter_map(|pair| {
            let gap = TextRange::new(pair[0].span().end as usize, pair[1].span().start as usize);
            let text = source_text.get(gap.start..gap.end)?;
            let collapsed = collapse_blank_lines(text)?;

            Some(Diagnostic::new(
                NoEmptyLinesInObjects,
                pair[1].span().into(),
                Some(Fix::new(collapsed, gap)),
            ))
        })
        .collect()
}
