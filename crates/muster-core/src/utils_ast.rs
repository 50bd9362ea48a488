//! Helpers shared by several rules to look into JSX elements and expressions.

use oxc_ast::ast::{
    Expression, JSXAttribute, JSXAttributeItem, JSXAttributeValue, JSXExpression,
    JSXOpeningElement, ObjectProperty, StringLiteral,
};

/// The effective value of a JSX attribute.
#[derive(Debug, Clone, Copy)]
pub enum AttributeValue<'b, 'a> {
    /// `name={expr}`, unwrapped from its container.
    Expression(&'b Expression<'a>),
    /// `name="text"`
    Literal(&'b StringLiteral<'a>),
}

impl<'b, 'a> AttributeValue<'b, 'a> {
    pub fn as_expression(self) -> Option<&'b Expression<'a>> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Literal(_) => None,
        }
    }

    /// The string value, whether it is given directly or as a string
    /// literal inside `{}`.
    pub fn as_string(self) -> Option<&'a str> {
        match self {
            Self::Literal(lit) => Some(lit.value.as_str()),
            Self::Expression(expr) => match expr.get_inner_expression() {
                Expression::StringLiteral(lit) => Some(lit.value.as_str()),
                _ => None,
            },
        }
    }
}

/// Find the first attribute called `name` on `element`. Spread attributes are
/// skipped.
pub fn find_attribute<'b, 'a>(
    element: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<&'b JSXAttribute<'a>> {
    element.attributes.iter().find_map(|item| match item {
        JSXAttributeItem::Attribute(attr) if attr.is_identifier(name) => Some(&**attr),
        _ => None,
    })
}

/// Resolve the value of the first attribute called `name` on `element`.
///
/// Returns `None` if there is no such attribute, if it has no value
/// (`<Box sx />`), if its container is empty (`sx={}`), or if its value is an
/// element written without braces (`icon=<Icon />`). An element inside braces
/// (`icon={<Icon />}`) is an expression like any other.
pub fn attribute_value<'b, 'a>(
    element: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<(&'b JSXAttribute<'a>, AttributeValue<'b, 'a>)> {
    let attr = find_attribute(element, name)?;

    let value = match attr.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => AttributeValue::Literal(lit),
        JSXAttributeValue::ExpressionContainer(container) => match &container.expression {
            JSXExpression::EmptyExpression(_) => return None,
            expr => AttributeValue::Expression(expr.as_expression()?),
        },
        JSXAttributeValue::Element(_) | JSXAttributeValue::Fragment(_) => return None,
    };

    Some((attr, value))
}

/// The name of a non-computed property key, for identifiers and string
/// literals.
pub fn static_key_name<'a>(prop: &ObjectProperty<'a>) -> Option<std::borrow::Cow<'a, str>> {
    if prop.computed {
        // `{ ['display']: 'flex' }` still names `display`.
        return match prop.key.as_expression()?.get_inner_expression() {
            Expression::StringLiteral(lit) => Some(std::borrow::Cow::Borrowed(lit.value.as_str())),
            _ => None,
        };
    }
    prop.key.static_name()
}

/// Whether `expr` is a call of the form `theme.breakpoints.up(...)` or
/// `theme.breakpoints.down(...)`.
pub fn is_theme_breakpoints_call(expr: &Expression) -> bool {
    let Expression::CallExpression(call) = expr.get_inner_expression() else {
        return false;
    };
    let Expression::StaticMemberExpression(method) = call.callee.get_inner_expression() else {
        return false;
    };
    if !matches!(method.property.name.as_str(), "up" | "down") {
        return false;
    }
    let Expression::StaticMemberExpression(breakpoints) = method.object.get_inner_expression()
    else {
        return false;
    };
    if breakpoints.property.name != "breakpoints" {
        return false;
    }
    matches!(
        breakpoints.object.get_inner_expression(),
        Expression::Identifier(ident) if ident.name == "theme"
    )
}
