//! Per-file tracking of the names bound by imports from the component library.

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, JSXElementName};
use rustc_hash::FxHashMap;

/// The module whose components are subject to the layout restrictions.
pub const TRACKED_MODULE: &str = "@mui/material";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub source_module: String,
    pub imported_name: String,
}

/// Maps a locally bound name to the import it comes from.
///
/// Only named specifiers from [`TRACKED_MODULE`] are recorded. A later import
/// of the same local name overwrites the earlier binding. One tracker lives in
/// each file's `Checker` and is dropped with it.
#[derive(Debug, Default)]
pub struct ImportAliasTracker {
    bindings: FxHashMap<String, ImportBinding>,
}

impl ImportAliasTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, decl: &ImportDeclaration) {
        if decl.source.value != TRACKED_MODULE {
            return;
        }
        let Some(specifiers) = &decl.specifiers else {
            return;
        };

        for specifier in specifiers {
            // Default and namespace imports don't name a component.
            if let ImportDeclarationSpecifier::ImportSpecifier(spec) = specifier {
                self.bindings.insert(
                    spec.local.name.to_string(),
                    ImportBinding {
                        source_module: TRACKED_MODULE.to_string(),
                        imported_name: spec.imported.name().to_string(),
                    },
                );
            }
        }
    }

    pub fn resolve(&self, local_name: &str) -> Option<&ImportBinding> {
        self.bindings.get(local_name)
    }

    /// Whether the tag name of a JSX element is a plain identifier bound to
    /// an import from [`TRACKED_MODULE`]. Member expressions (`<ui.Box>`) and
    /// namespaced names never match.
    pub fn is_tracked_component(&self, name: &JSXElementName) -> bool {
        let local_name = match name {
            JSXElementName::Identifier(ident) => ident.name.as_str(),
            JSXElementName::IdentifierReference(ident) => ident.name.as_str(),
            JSXElementName::NamespacedName(_)
            | JSXElementName::MemberExpression(_)
            | JSXElementName::ThisExpression(_) => return false,
        };

        self.resolve(local_name)
            .is_some_and(|binding| binding.source_module == TRACKED_MODULE)
    }
}
