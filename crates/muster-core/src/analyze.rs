//! Dispatch of AST nodes to the rules that inspect them.
//!
//! Each submodule is named after the node kind it receives and runs every
//! enabled rule that cares about that kind.

pub mod comments;
pub mod import_declaration;
pub mod jsx_opening_element;
pub mod object_expression;
