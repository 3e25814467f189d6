//! Union construction and simplification.

use crate::ty::{IntrinsicKind, Ty};

/// Collapse candidate types into a minimal equivalent type.
///
/// Nested unions are flattened, `never` members are dropped, exact
/// duplicates are removed keeping first occurrence, and a single surviving
/// member is returned unwrapped. An empty input yields `never`.
pub fn union_of(types: Vec<Ty>) -> Ty {
    let mut members: Vec<Ty> = Vec::with_capacity(types.len());
    for ty in types {
        flatten_into(ty, &mut members);
    }
    if members.is_empty() {
        return Ty::never();
    }
    if members.len() == 1 {
        return members.swap_remove(0);
    }
    Ty::Union(members)
}

/// Union of two types.
pub fn union2(left: Ty, right: Ty) -> Ty {
    union_of(vec![left, right])
}

fn flatten_into(ty: Ty, out: &mut Vec<Ty>) {
    match ty {
        Ty::Union(members) => {
            for member in members {
                flatten_into(member, out);
            }
        }
        Ty::Intrinsic(IntrinsicKind::Never) => {}
        ty => {
            if !out.contains(&ty) {
                out.push(ty);
            }
        }
    }
}
