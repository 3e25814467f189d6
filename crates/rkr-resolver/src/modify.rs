//! Key insertion and removal over record shapes.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use rkr_types::{ArrayKey, ArrayTy, ConstantShapeBuilder, Ty, union2, union_of};

use crate::merge::append_shape;

/// Insert or override a single key on the subject.
///
/// The key set must contain exactly one key; zero or several candidate keys
/// cannot name a single offset, so they yield the error type. A subject
/// without concrete shapes widens to a dynamic array that admits the new
/// key and value.
pub fn add_key(subject: Ty, keys: SmallVec<[ArrayKey; 4]>, value: Ty) -> Ty {
    if subject.is_array().no() {
        return Ty::Error;
    }
    let [key] = keys.as_slice() else {
        return Ty::Error;
    };

    let updated: Vec<Ty> = subject
        .constant_shapes()
        .iter()
        .map(|shape| {
            let mut builder = ConstantShapeBuilder::new();
            builder.disable_degradation();
            append_shape(&mut builder, shape);
            builder.set(key.clone(), value.clone(), false);
            builder.finish()
        })
        .collect();

    if updated.is_empty() {
        trace!("addKey subject carries no constant shapes, widening to a dynamic array");
        return Ty::Array(ArrayTy::new(
            union2(subject.iterable_key_ty(), key.to_ty()),
            union2(subject.iterable_value_ty(), value),
        ));
    }
    union_of(updated)
}

/// Remove keys from the subject, preserving remaining entry order and
/// optionality.
///
/// An empty key set and a subject without concrete shapes both leave the
/// subject unchanged: removal on an unknown shape cannot be verified, so
/// the operator stays conservative instead of erroring.
pub fn remove_keys(subject: Ty, keys: SmallVec<[ArrayKey; 4]>) -> Ty {
    if subject.is_array().no() {
        return Ty::Error;
    }
    if keys.is_empty() {
        return subject;
    }
    let remove: FxHashSet<&ArrayKey> = keys.iter().collect();

    let updated: Vec<Ty> = subject
        .constant_shapes()
        .iter()
        .map(|shape| {
            let mut builder = ConstantShapeBuilder::new();
            builder.disable_degradation();
            for entry in &shape.entries {
                if remove.contains(&entry.key) {
                    continue;
                }
                builder.set(entry.key.clone(), entry.value.clone(), entry.optional);
            }
            builder.finish()
        })
        .collect();

    if updated.is_empty() {
        trace!("removeKey subject carries no constant shapes, leaving it unchanged");
        return subject;
    }
    union_of(updated)
}
