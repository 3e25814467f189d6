//! Semantic type model for the record type operators.
//!
//! Types here are plain immutable values: every type is built fresh during
//! one resolution call and dropped afterwards. There is no interner and no
//! cross-call state; [`union_of`] is the only place where structural
//! simplification happens.

pub mod expr;
mod format;
pub mod key;
pub mod shape;
pub mod trinary;
pub mod ty;
pub mod union;

pub use expr::{ConstLiteral, TypeExpr};
pub use key::ArrayKey;
pub use shape::{ConstantShape, ConstantShapeBuilder, MAX_SHAPE_ENTRIES, ShapeEntry};
pub use trinary::Trinary;
pub use ty::{ArrayTy, IntrinsicKind, LiteralValue, ScalarValue, Ty};
pub use union::{union2, union_of};
