use crate::diagnostic::*;
use crate::shape::{has_display_flex, matches};
use crate::utils_ast::attribute_value;
use oxc_ast::ast::JSXOpeningElement;

pub struct NoBoxFlex;

/// ## What it does
///
/// Checks for `display: "flex"` on components imported from `@mui/material`,
/// either as a direct `display` prop or inside the `sx` prop. Renamed imports
/// such as `import { Box as Container } from '@mui/material'` are followed.
///
/// The `sx` value is looked through arrow functions, functions made of a
/// single `return`, and both branches of conditional expressions. Only a
/// literal `'flex'` at the top level of the object is reported: responsive
/// values like `display: { xs: 'none', md: 'flex' }` and nested selectors are
/// not.
///
/// ## Why is this bad?
///
/// A `Box` turned into a flex container is a `Stack` written by hand. `Stack`
/// states the intent in the component name and gives access to `direction`
/// and `spacing` without restating `display` every time.
///
/// ## Example
///
/// ```jsx
/// import { Box } from '@mui/material';
///
/// <Box display="flex" />
/// <Box sx={{ display: 'flex', gap: 2 }} />
/// ```
///
/// Use instead:
/// ```jsx
/// import { Stack } from '@mui/material';
///
/// <Stack direction="row" spacing={2} />
/// ```
impl Violation for NoBoxFlex {
    fn name(&self) -> String {
        "no-box-flex".to_string()
    }
    fn body(&self) -> String {
        "Avoid using display: \"flex\" in Box sx prop or as direct prop.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use Stack component from @mui/material instead.".to_string())
    }
}

/// `<Box display="flex" />` or `<Box display={'flex'} />`, reported on the
/// `display` attribute.
pub fn no_box_flex_prop(element: &JSXOpeningElement) -> Option<Diagnostic> {
    let (attr, value) = attribute_value(element, "display")?;

    if value.as_string() != Some("flex") {
        return None;
    }

    Some(Diagnostic::new(NoBoxFlex, attr.span.into(), None))
}

/// `<Box sx={{ display: 'flex' }} />` and its wrapped forms, reported on the
/// `sx` attribute.
pub fn no_box_flex_sx(element: &JSXOpeningElement) -> Option<Diagnostic> {
    let (attr, value) = attribute_value(element, "sx")?;
    let expr = value.as_expression()?;

    if !matches(expr, has_display_flex) {
        return None;
    }

    Some(Diagnostic::new(NoBoxFlex, attr.span.into(), None))
}
