//! Resolve the object literal(s) a style prop evaluates to.
//!
//! Style props are written in several equivalent ways:
//!
//! ```jsx
//! <Box sx={{ display: 'flex' }} />
//! <Box sx={() => ({ display: 'flex' })} />
//! <Box sx={function () { return { display: 'flex' }; }} />
//! <Box sx={open ? { display: 'flex' } : {}} />
//! ```
//!
//! [`resolve_objects`] strips these wrappers and returns every object literal
//! the expression can evaluate to. The predicates below are then run on each
//! of them, and a match in any branch of a conditional counts as a match.

use oxc_ast::ast::{Expression, FunctionBody, ObjectExpression, ObjectPropertyKind, Statement};

use crate::utils_ast::{is_theme_breakpoints_call, static_key_name};

/// Collect the object literals `expr` evaluates to, through parentheses, type
/// assertions, functions returning a single expression, and both branches of
/// conditionals.
///
/// Anything else (spreads, identifiers, logical expressions, calls...)
/// resolves to nothing. Every expression pushed on the worklist is a strict
/// child of the one being processed, so the loop ends.
pub fn resolve_objects<'b, 'a>(expr: &'b Expression<'a>) -> Vec<&'b ObjectExpression<'a>> {
    let mut objects = Vec::new();
    let mut pending = vec![expr];

    while let Some(expr) = pending.pop() {
        match expr.get_inner_expression() {
            Expression::ObjectExpression(obj) => objects.push(&**obj),
            Expression::ArrowFunctionExpression(arrow) => {
                let returned = match arrow.get_expression() {
                    Some(body) => Some(body),
                    None => single_return(&arrow.body),
                };
                pending.extend(returned);
            }
            Expression::FunctionExpression(func) => {
                pending.extend(func.body.as_deref().and_then(single_return));
            }
            Expression::ConditionalExpression(cond) => {
                // Pushed in reverse so that the consequent is resolved first.
                pending.push(&cond.alternate);
                pending.push(&cond.consequent);
            }
            _ => {}
        }
    }

    objects
}

/// The argument of a function body made of a single `return <expr>;`.
fn single_return<'b, 'a>(body: &'b FunctionBody<'a>) -> Option<&'b Expression<'a>> {
    match body.statements.as_slice() {
        [Statement::ReturnStatement(ret)] => ret.argument.as_ref(),
        _ => None,
    }
}

/// Whether any object literal `expr` resolves to satisfies `predicate`.
pub fn matches<F>(expr: &Expression, predicate: F) -> bool
where
    F: Fn(&ObjectExpression) -> bool,
{
    resolve_objects(expr).into_iter().any(predicate)
}

/// `{ display: 'flex' }`, with the key written as an identifier or a string.
/// Only top-level keys are considered: `{ '&:hover': { display: 'flex' } }`
/// does not match. Neither do responsive values such as
/// `{ display: { xs: 'none', md: 'flex' } }`, where the value is an object.
pub fn has_display_flex(obj: &ObjectExpression) -> bool {
    obj.properties
        .iter()
        .filter_map(ObjectPropertyKind::as_property)
        .any(|prop| {
            static_key_name(prop).is_some_and(|name| name == "display")
                && is_flex_literal(&prop.value)
        })
}

/// Whether `expr` is the string literal `"flex"`.
pub fn is_flex_literal(expr: &Expression) -> bool {
    matches!(expr.get_inner_expression(), Expression::StringLiteral(lit) if lit.value == "flex")
}

/// `{}`. A spread counts as a property, so `{ ...base }` is not empty.
pub fn is_empty_object(obj: &ObjectExpression) -> bool {
    obj.properties.is_empty()
}

/// A computed key `[theme.breakpoints.up(..)]` or `[theme.breakpoints.down(..)]`
/// anywhere in `obj`, including in object literals nested as property values.
pub fn has_breakpoint_call(obj: &ObjectExpression) -> bool {
    let mut stack = vec![obj];

    while let Some(obj) = stack.pop() {
        for prop in obj.properties.iter().filter_map(ObjectPropertyKind::as_property) {
            if prop.computed
                && prop
                    .key
                    .as_expression()
                    .is_some_and(is_theme_breakpoints_call)
            {
                return true;
            }
            if let Expression::ObjectExpression(nested) = prop.value.get_inner_expression() {
                stack.push(&**nested);
            }
        }
    }

    false
}
