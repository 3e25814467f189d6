//! Constant array keys and the array-key coercion rule.
//!
//! A key is either an integer or a string, never both; two keys are the same
//! key only when both kind and value match, so `5` and `'5'` stay distinct.
//! Coercion from constant scalars follows the host language's array-offset
//! rule.

use crate::ty::{LiteralValue, ScalarValue, Ty};

/// A constant array key. Equality and hashing are by (kind, value).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Build a key from a string offset, coercing integer-like strings to
    /// integer keys the way an array write would.
    ///
    /// Only the canonical decimal form counts: `"7"` and `"-7"` become
    /// integer keys, while `"07"`, `"-0"`, `"1.5"` and `""` stay strings.
    pub fn from_string(value: &str) -> ArrayKey {
        match canonical_int(value) {
            Some(int) => ArrayKey::Int(int),
            None => ArrayKey::Str(value.to_string()),
        }
    }

    /// Canonicalize this key: a string key holding a canonical integer
    /// becomes an integer key, everything else is returned unchanged.
    pub fn canonical(self) -> ArrayKey {
        match self {
            ArrayKey::Str(value) => ArrayKey::from_string(&value),
            key => key,
        }
    }

    /// The literal type denoting exactly this key.
    pub fn to_ty(&self) -> Ty {
        match self {
            ArrayKey::Int(value) => Ty::Literal(LiteralValue::Int(*value)),
            ArrayKey::Str(value) => Ty::Literal(LiteralValue::Str(value.clone())),
        }
    }
}

impl ScalarValue<'_> {
    /// Coerce this constant scalar to its array-key form: booleans become
    /// `1`/`0`, floats truncate toward zero, `null` becomes the empty string
    /// key, and integer-like strings become integer keys.
    pub fn to_array_key(&self) -> ArrayKey {
        match *self {
            ScalarValue::Str(value) => ArrayKey::from_string(value),
            ScalarValue::Int(value) => ArrayKey::Int(value),
            ScalarValue::Float(value) => ArrayKey::Int(value as i64),
            ScalarValue::Bool(value) => ArrayKey::Int(i64::from(value)),
            ScalarValue::Null => ArrayKey::Str(String::new()),
        }
    }
}

fn canonical_int(value: &str) -> Option<i64> {
    if value == "0" {
        return Some(0);
    }
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
