//! The merge algebra over record shapes and dynamic arrays.

use tracing::trace;

use rkr_types::{ArrayTy, ConstantShape, ConstantShapeBuilder, Ty, union2, union_of};

use crate::resolve::NameScope;
use crate::template::unwrap_template;

/// Merge two types with array-write override semantics, left to right.
///
/// When both sides denote at least one concrete shape the result is the
/// union over the Cartesian product of left and right shapes. When the
/// shapes are not statically known but both sides are arrays, the result
/// widens to a dynamic array of the unioned key and value types. Anything
/// else is an error.
pub fn merge_types(left: Ty, right: Ty, scope: &dyn NameScope) -> Ty {
    let left = unwrap_template(left, scope);
    let right = unwrap_template(right, scope);

    let left_shapes = left.constant_shapes();
    let right_shapes = right.constant_shapes();
    if !left_shapes.is_empty() && !right_shapes.is_empty() {
        return merge_constant_shapes(&left_shapes, &right_shapes);
    }

    if left.is_array().yes() && right.is_array().yes() {
        trace!("merge operands carry no constant shapes, widening to a dynamic array");
        return Ty::Array(ArrayTy::new(
            union2(left.iterable_key_ty(), right.iterable_key_ty()),
            union2(left.iterable_value_ty(), right.iterable_value_ty()),
        ));
    }

    Ty::Error
}

fn merge_constant_shapes(left: &[&ConstantShape], right: &[&ConstantShape]) -> Ty {
    let mut merged = Vec::with_capacity(left.len() * right.len());
    for left_shape in left {
        for right_shape in right {
            let mut builder = ConstantShapeBuilder::new();
            builder.disable_degradation();
            append_shape(&mut builder, left_shape);
            append_shape(&mut builder, right_shape);
            merged.push(builder.finish());
        }
    }
    union_of(merged)
}

/// Copy a shape's entries into the builder in order, key by key.
pub(crate) fn append_shape(builder: &mut ConstantShapeBuilder, shape: &ConstantShape) {
    for entry in &shape.entries {
        builder.set(entry.key.clone(), entry.value.clone(), entry.optional);
    }
}
