//! Key-type extraction and normalization.
//!
//! Key expressions come in three forms: bare identifiers, literal
//! constants, and arbitrary type expressions that resolve to constant
//! scalars. The first two name a single key directly; the last may denote
//! several keys at once (a union of string constants names every member).

use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};

use rkr_types::{ArrayKey, ConstLiteral, Ty, TypeExpr};

use crate::resolve::{ExprResolver, NameScope, resolve_or_error};
use crate::template::unwrap_template;

/// The canonical key set denoted by one key expression.
///
/// A bare identifier is the string key of the same text. A literal constant
/// is a key of the matching kind. Anything else is resolved through the
/// host resolver and decomposed into its constant key members.
pub fn resolve_key_expr(
    node: &TypeExpr,
    scope: &dyn NameScope,
    resolver: &dyn ExprResolver,
) -> SmallVec<[ArrayKey; 4]> {
    match node {
        TypeExpr::Ident(name) => smallvec![ArrayKey::Str(name.clone())],
        TypeExpr::Literal(ConstLiteral::Str(value)) => smallvec![ArrayKey::Str(value.clone())],
        TypeExpr::Literal(ConstLiteral::Int(value)) => smallvec![ArrayKey::Int(*value)],
        node => {
            let resolved = unwrap_template(resolve_or_error(resolver, node, scope), scope);
            extract_constant_keys(&resolved)
        }
    }
}

/// Concatenate the key sets of several key expressions in argument order,
/// deduplicated by (kind, value) keeping first occurrence.
pub fn resolve_key_exprs(
    nodes: &[TypeExpr],
    scope: &dyn NameScope,
    resolver: &dyn ExprResolver,
) -> SmallVec<[ArrayKey; 4]> {
    let mut keys = SmallVec::new();
    for node in nodes {
        keys.extend(resolve_key_expr(node, scope, resolver));
    }
    dedupe_keys(keys)
}

/// Every constant key a resolved type denotes: constant strings contribute
/// string keys, every other constant scalar contributes its array-key
/// coercion.
fn extract_constant_keys(ty: &Ty) -> SmallVec<[ArrayKey; 4]> {
    let mut keys: SmallVec<[ArrayKey; 4]> = SmallVec::new();
    for value in ty.constant_strings() {
        keys.push(ArrayKey::Str(value.to_string()));
    }
    for scalar in ty.constant_scalars() {
        keys.push(scalar.to_array_key());
    }
    dedupe_keys(keys)
}

fn dedupe_keys(keys: SmallVec<[ArrayKey; 4]>) -> SmallVec<[ArrayKey; 4]> {
    let mut seen = FxHashSet::default();
    keys.into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
