//! Collaborator contracts of the host checker.
//!
//! Both collaborators are read-only capabilities passed explicitly through
//! every call; the engine never stores them and never mutates through them.

use rkr_types::{Ty, TypeExpr};

/// Resolves a template parameter name to its bound concrete type within the
/// active expression's context.
pub trait NameScope {
    fn template_binding(&self, name: &str) -> Option<Ty>;
}

/// The host's general type-expression resolver.
///
/// Returns the best-known semantic type for a node, or `None` when no
/// registered extension can resolve it.
pub trait ExprResolver {
    fn resolve(&self, node: &TypeExpr, scope: &dyn NameScope) -> Option<Ty>;
}

/// Resolve a node, poisoning to the error type when the resolver has no
/// answer.
pub fn resolve_or_error(
    resolver: &dyn ExprResolver,
    node: &TypeExpr,
    scope: &dyn NameScope,
) -> Ty {
    resolver.resolve(node, scope).unwrap_or(Ty::Error)
}
