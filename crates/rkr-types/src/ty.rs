//! The semantic type model.
//!
//! `Ty` is the resolved result of any type expression. The record algebra
//! only ever distinguishes shapes, dynamic arrays, unions of those, and
//! templates; everything else is opaque to it and either poisons the result
//! (`Error`) or rejects it (scalars, objects).

use std::sync::Arc;

use smallvec::SmallVec;

use crate::shape::ConstantShape;
use crate::trinary::Trinary;
use crate::union::{union2, union_of};

/// Scalar types with no internal structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntrinsicKind {
    Int,
    Float,
    String,
    Bool,
    Mixed,
    Null,
    Never,
}

/// A constant scalar value.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// An array type with a uniform key type and value type, `array<K, V>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayTy {
    pub key: Arc<Ty>,
    pub value: Arc<Ty>,
}

impl ArrayTy {
    pub fn new(key: Ty, value: Ty) -> ArrayTy {
        ArrayTy {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }
}

/// A resolved semantic type.
#[derive(Clone, Debug, PartialEq)]
pub enum Ty {
    /// An unresolvable or invalid type; propagates like a poisoned value.
    Error,
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    /// Array with unknown keys.
    Array(ArrayTy),
    /// One concrete record shape, `array{a: int, b?: string}`.
    Shape(ConstantShape),
    /// Disjunction of types; always flattened, never empty.
    Union(Vec<Ty>),
    /// An unresolved template parameter with its declared upper bound.
    Template { name: String, bound: Arc<Ty> },
    /// A named object type; opaque to the record algebra.
    Object(String),
}

impl Ty {
    pub fn int() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Int)
    }

    pub fn float() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Float)
    }

    pub fn string() -> Ty {
        Ty::Intrinsic(IntrinsicKind::String)
    }

    pub fn bool() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Bool)
    }

    pub fn mixed() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Mixed)
    }

    pub fn null() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Null)
    }

    pub fn never() -> Ty {
        Ty::Intrinsic(IntrinsicKind::Never)
    }

    pub fn literal_str(value: &str) -> Ty {
        Ty::Literal(LiteralValue::Str(value.to_string()))
    }

    pub fn literal_int(value: i64) -> Ty {
        Ty::Literal(LiteralValue::Int(value))
    }

    pub fn literal_float(value: f64) -> Ty {
        Ty::Literal(LiteralValue::Float(value))
    }

    pub fn literal_bool(value: bool) -> Ty {
        Ty::Literal(LiteralValue::Bool(value))
    }

    pub fn array(key: Ty, value: Ty) -> Ty {
        Ty::Array(ArrayTy::new(key, value))
    }

    pub fn template(name: &str, bound: Ty) -> Ty {
        Ty::Template {
            name: name.to_string(),
            bound: Arc::new(bound),
        }
    }

    pub fn object(name: &str) -> Ty {
        Ty::Object(name.to_string())
    }
}

/// A constant scalar member observed during key extraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Ty {
    /// All concrete record shapes this type denotes, reaching through
    /// unions.
    pub fn constant_shapes(&self) -> SmallVec<[&ConstantShape; 2]> {
        let mut shapes = SmallVec::new();
        self.collect_shapes(&mut shapes);
        shapes
    }

    fn collect_shapes<'a>(&'a self, out: &mut SmallVec<[&'a ConstantShape; 2]>) {
        match self {
            Ty::Shape(shape) => out.push(shape),
            Ty::Union(members) => {
                for member in members {
                    member.collect_shapes(out);
                }
            }
            _ => {}
        }
    }

    /// Whether this type is an array, in trinary logic.
    ///
    /// A union answers yes or no only when every member agrees; `mixed` and
    /// the error type are undecidable; a template delegates to its bound.
    pub fn is_array(&self) -> Trinary {
        match self {
            Ty::Array(_) | Ty::Shape(_) => Trinary::Yes,
            Ty::Union(members) => {
                let mut result: Option<Trinary> = None;
                for member in members {
                    let next = member.is_array();
                    match result {
                        None => result = Some(next),
                        Some(current) if current == next => {}
                        Some(_) => return Trinary::Maybe,
                    }
                }
                result.unwrap_or(Trinary::No)
            }
            Ty::Template { bound, .. } => bound.is_array(),
            Ty::Error | Ty::Intrinsic(IntrinsicKind::Mixed) => Trinary::Maybe,
            _ => Trinary::No,
        }
    }

    /// The key type seen when iterating this type.
    pub fn iterable_key_ty(&self) -> Ty {
        match self {
            Ty::Array(array) => (*array.key).clone(),
            Ty::Shape(shape) => {
                union_of(shape.entries.iter().map(|entry| entry.key.to_ty()).collect())
            }
            Ty::Union(members) => union_of(members.iter().map(Ty::iterable_key_ty).collect()),
            Ty::Template { bound, .. } => bound.iterable_key_ty(),
            Ty::Error | Ty::Intrinsic(IntrinsicKind::Mixed) => union2(Ty::int(), Ty::string()),
            _ => Ty::never(),
        }
    }

    /// The value type seen when iterating this type.
    pub fn iterable_value_ty(&self) -> Ty {
        match self {
            Ty::Array(array) => (*array.value).clone(),
            Ty::Shape(shape) => {
                union_of(shape.entries.iter().map(|entry| entry.value.clone()).collect())
            }
            Ty::Union(members) => union_of(members.iter().map(Ty::iterable_value_ty).collect()),
            Ty::Template { bound, .. } => bound.iterable_value_ty(),
            Ty::Error | Ty::Intrinsic(IntrinsicKind::Mixed) => Ty::mixed(),
            _ => Ty::never(),
        }
    }

    /// Every constant string this type can be, reaching through unions.
    pub fn constant_strings(&self) -> SmallVec<[&str; 4]> {
        let mut out = SmallVec::new();
        self.collect_strings(&mut out);
        out
    }

    fn collect_strings<'a>(&'a self, out: &mut SmallVec<[&'a str; 4]>) {
        match self {
            Ty::Literal(LiteralValue::Str(value)) => out.push(value),
            Ty::Union(members) => {
                for member in members {
                    member.collect_strings(out);
                }
            }
            _ => {}
        }
    }

    /// Every constant scalar this type can be, reaching through unions.
    pub fn constant_scalars(&self) -> SmallVec<[ScalarValue<'_>; 4]> {
        let mut out = SmallVec::new();
        self.collect_scalars(&mut out);
        out
    }

    fn collect_scalars<'a>(&'a self, out: &mut SmallVec<[ScalarValue<'a>; 4]>) {
        match self {
            Ty::Literal(LiteralValue::Str(value)) => out.push(ScalarValue::Str(value)),
            Ty::Literal(LiteralValue::Int(value)) => out.push(ScalarValue::Int(*value)),
            Ty::Literal(LiteralValue::Float(value)) => out.push(ScalarValue::Float(*value)),
            Ty::Literal(LiteralValue::Bool(value)) => out.push(ScalarValue::Bool(*value)),
            Ty::Intrinsic(IntrinsicKind::Null) => out.push(ScalarValue::Null),
            Ty::Union(members) => {
                for member in members {
                    member.collect_scalars(out);
                }
            }
            _ => {}
        }
    }
}
