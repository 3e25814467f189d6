//! Type expression syntax nodes.
//!
//! The parser owns these; the resolver extensions only read them. A generic
//! node's arguments stay unresolved until the expression resolver is asked
//! for them.

/// A constant expression embedded in a type position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstLiteral {
    Str(String),
    Int(i64),
}

/// A parsed type expression.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    /// A bare identifier such as `int` or `TSomeType`.
    Ident(String),
    /// A literal constant such as `'key'` or `5`.
    Literal(ConstLiteral),
    /// A generic application such as `rkrMerge<A, B>`.
    Generic { name: String, args: Vec<TypeExpr> },
}

impl TypeExpr {
    pub fn ident(name: &str) -> TypeExpr {
        TypeExpr::Ident(name.to_string())
    }

    pub fn str_lit(value: &str) -> TypeExpr {
        TypeExpr::Literal(ConstLiteral::Str(value.to_string()))
    }

    pub fn int_lit(value: i64) -> TypeExpr {
        TypeExpr::Literal(ConstLiteral::Int(value))
    }

    pub fn generic(name: &str, args: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Generic {
            name: name.to_string(),
            args,
        }
    }
}
