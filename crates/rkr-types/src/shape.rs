//! Constant record shapes and the shape builder.
//!
//! The builder is an ordered map with array write semantics: an existing key
//! is overwritten in place, a new key is appended. Past [`MAX_SHAPE_ENTRIES`]
//! the builder widens the result to a dynamic array unless degradation has
//! been disabled.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::key::ArrayKey;
use crate::ty::{ArrayTy, Ty};
use crate::union::union_of;

/// Entry count past which the builder degrades to a dynamic array.
pub const MAX_SHAPE_ENTRIES: usize = 256;

/// One key of a record shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeEntry {
    pub key: ArrayKey,
    pub value: Ty,
    pub optional: bool,
}

/// A concrete record shape: a fixed set of keys in first-insertion order,
/// each with its own value type and optionality. Keys are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantShape {
    pub entries: Vec<ShapeEntry>,
}

impl ConstantShape {
    pub fn new(entries: Vec<ShapeEntry>) -> ConstantShape {
        ConstantShape { entries }
    }
}

/// Ordered-map builder for constant shapes.
pub struct ConstantShapeBuilder {
    entries: IndexMap<ArrayKey, (Ty, bool), FxBuildHasher>,
    degradation_enabled: bool,
    degraded: bool,
}

impl ConstantShapeBuilder {
    pub fn new() -> ConstantShapeBuilder {
        ConstantShapeBuilder {
            entries: IndexMap::default(),
            degradation_enabled: true,
            degraded: false,
        }
    }

    /// Keep the shape exact no matter how many entries are set.
    pub fn disable_degradation(&mut self) {
        self.degradation_enabled = false;
    }

    /// Set a key. An existing key keeps its position and has its value and
    /// optionality replaced; a new key is appended. String keys are
    /// canonicalized the way an array write canonicalizes offsets.
    pub fn set(&mut self, key: ArrayKey, value: Ty, optional: bool) {
        let key = key.canonical();
        if self.degradation_enabled
            && !self.entries.contains_key(&key)
            && self.entries.len() >= MAX_SHAPE_ENTRIES
        {
            self.degraded = true;
        }
        self.entries.insert(key, (value, optional));
    }

    /// Finish the shape, or the widened dynamic array if the builder
    /// degraded.
    pub fn finish(self) -> Ty {
        if self.degraded {
            let keys = self.entries.keys().map(ArrayKey::to_ty).collect();
            let values = self
                .entries
                .values()
                .map(|(value, _)| value.clone())
                .collect();
            return Ty::Array(ArrayTy::new(union_of(keys), union_of(values)));
        }
        let entries = self
            .entries
            .into_iter()
            .map(|(key, (value, optional))| ShapeEntry {
                key,
                value,
                optional,
            })
            .collect();
        Ty::Shape(ConstantShape::new(entries))
    }
}
