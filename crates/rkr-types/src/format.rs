//! Display rendering for types in the host checker's notation.
//!
//! Shapes render as `array{a: int, b?: string}`, dynamic arrays as
//! `array<K, V>`, unions with `|`. Word-like string keys render bare,
//! everything else quoted.

use std::fmt;

use crate::key::ArrayKey;
use crate::ty::{IntrinsicKind, LiteralValue, Ty};

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Error => f.write_str("*ERROR*"),
            Ty::Intrinsic(kind) => f.write_str(match kind {
                IntrinsicKind::Int => "int",
                IntrinsicKind::Float => "float",
                IntrinsicKind::String => "string",
                IntrinsicKind::Bool => "bool",
                IntrinsicKind::Mixed => "mixed",
                IntrinsicKind::Null => "null",
                IntrinsicKind::Never => "*NEVER*",
            }),
            Ty::Literal(value) => write!(f, "{value}"),
            Ty::Array(array) => write!(f, "array<{}, {}>", array.key, array.value),
            Ty::Shape(shape) => {
                f.write_str("array{")?;
                for (i, entry) in shape.entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", entry.key)?;
                    if entry.optional {
                        f.write_str("?")?;
                    }
                    write!(f, ": {}", entry.value)?;
                }
                f.write_str("}")
            }
            Ty::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Ty::Template { name, .. } => f.write_str(name),
            Ty::Object(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Str(value) => write!(f, "'{value}'"),
            LiteralValue::Int(value) => write!(f, "{value}"),
            LiteralValue::Float(value) => write_float(f, *value),
            LiteralValue::Bool(true) => f.write_str("true"),
            LiteralValue::Bool(false) => f.write_str("false"),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(value) => write!(f, "{value}"),
            ArrayKey::Str(value) if is_bare_key(value) => f.write_str(value),
            ArrayKey::Str(value) => write!(f, "'{value}'"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let formatted = value.to_string();
    if formatted.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        write!(f, "{formatted}.0")
    } else {
        f.write_str(&formatted)
    }
}

fn is_bare_key(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(byte) if byte.is_ascii_alphabetic() || byte == b'_' => {}
        _ => return false,
    }
    bytes.all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
}

#[cfg(test)]
mod tests {
    use crate::key::ArrayKey;
    use crate::shape::ConstantShapeBuilder;
    use crate::ty::Ty;
    use crate::union::union2;

    #[test]
    fn shapes_render_with_bare_and_quoted_keys() {
        let mut builder = ConstantShapeBuilder::new();
        builder.set(ArrayKey::Str("a".into()), Ty::int(), false);
        builder.set(ArrayKey::Str("two words".into()), Ty::string(), true);
        builder.set(ArrayKey::Int(0), Ty::float(), false);
        assert_eq!(
            builder.finish().to_string(),
            "array{a: int, 'two words'?: string, 0: float}"
        );
    }

    #[test]
    fn empty_shape_renders_braces() {
        assert_eq!(ConstantShapeBuilder::new().finish().to_string(), "array{}");
    }

    #[test]
    fn arrays_unions_and_literals_render() {
        let array = Ty::array(Ty::string(), union2(Ty::int(), Ty::literal_str("x")));
        assert_eq!(array.to_string(), "array<string, int|'x'>");
        assert_eq!(Ty::literal_float(2.0).to_string(), "2.0");
        assert_eq!(Ty::literal_float(1.5).to_string(), "1.5");
        assert_eq!(Ty::literal_bool(true).to_string(), "true");
        assert_eq!(Ty::Error.to_string(), "*ERROR*");
    }
}
