//! Template placeholder unwrapping.

use std::sync::Arc;

use rkr_types::Ty;

use crate::resolve::NameScope;

/// Replace a template placeholder with its most specific known type.
///
/// A bound name in the active scope wins; an unbound placeholder falls back
/// to its declared upper bound. The scope contract guarantees bindings are
/// concrete, so the result never needs a second unwrap. Every resolved
/// operand passes through here before it enters the record algebra or key
/// extraction.
pub fn unwrap_template(ty: Ty, scope: &dyn NameScope) -> Ty {
    match ty {
        Ty::Template { name, bound } => match scope.template_binding(&name) {
            Some(bound_ty) => bound_ty,
            None => Arc::unwrap_or_clone(bound),
        },
        ty => ty,
    }
}
