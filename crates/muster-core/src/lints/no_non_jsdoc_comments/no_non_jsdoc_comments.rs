use crate::diagnostic::*;
use oxc_ast::Comment;

pub struct NoNonJsdocComments;

/// ## What it does
///
/// Checks for comments that are not JSDoc comments, i.e. line comments
/// (`// ...`) and block comments that don't start with `/**`.
///
/// This rule has an unsafe fix that deletes the comment. Only the comment
/// itself is removed: the surrounding whitespace and line breaks are left in
/// place.
///
/// ## Why is this bad?
///
/// JSDoc comments are attached to the code they document and are picked up
/// by editors and documentation tools. Free-form comments are not, and tend
/// to drift away from the code they describe.
///
/// ## Example
///
/// ```js
/// // Compute the total price
/// const total = price * quantity;
/// ```
///
/// Use instead:
/// ```js
/// /** Total price of the line. */
/// const total = price * quantity;
/// ```
impl Violation for NoNonJsdocComments {
    fn name(&self) -> String {
        "no-non-jsdoc-comments".to_string()
    }
    fn body(&self) -> String {
        "Only JSDoc comments (/** ... */) are allowed.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Remove this comment or convert it to JSDoc format.".to_string())
    }
}

/// Whether the full text of a comment, delimiters included, is a JSDoc
/// comment: a block comment whose content starts with a `*`.
pub fn is_documentation_comment(text: &str) -> bool {
    text.strip_prefix("/*")
        .and_then(|rest| rest.strip_suffix("*/"))
        .is_some_and(|content| content.starts_with('*'))
}

pub fn no_non_jsdoc_comments(comment: &Comment, source_text: &str) -> Option<Diagnostic> {
    let range = TextRange::from(comment.span);
    let text = source_text.get(range.start..range.end)?;

    if is_documentation_comment(text) {
        return None;
    }

    Some(Diagnostic::new(
        NoNonJsdocComments,
        range,
        Some(Fix::deletion(range)),
    ))
}
