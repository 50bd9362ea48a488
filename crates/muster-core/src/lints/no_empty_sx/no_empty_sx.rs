use crate::diagnostic::*;
use crate::shape::{is_empty_object, matches};
use crate::utils_ast::attribute_value;
use oxc_ast::ast::JSXOpeningElement;

pub struct NoEmptySx;

/// ## What it does
///
/// Checks for `sx` props that evaluate to an empty object: `sx={{}}`,
/// `sx={() => ({})}`, or a conditional with an empty branch such as
/// `sx={open ? {} : { p: 1 }}`.
///
/// ## Why is this bad?
///
/// An empty `sx` does nothing but still costs a style resolution on every
/// render, and it is usually a leftover from a refactor.
///
/// ## Example
///
/// ```jsx
/// <Box sx={{}}>Hello</Box>
/// ```
///
/// Use instead:
/// ```jsx
/// <Box>Hello</Box>
/// ```
impl Violation for NoEmptySx {
    fn name(&self) -> String {
        "no-empty-sx".to_string()
    }
    fn body(&self) -> String {
        "Empty sx prop is unnecessary.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Remove the sx prop if it contains no styles.".to_string())
    }
}

pub fn no_empty_sx(element: &JSXOpeningElement) -> Option<Diagnostic> {
    let (attr, value) = attribute_value(element, "sx")?;
    let expr = value.as_expression()?;

    if !matches(expr, is_empty_object) {
        return None;
    }

    Some(Diagnostic::new(NoEmptySx, attr.span.into(), None))
}
