//! Record type operators for phpdoc-style type expressions: `rkr\merge`,
//! `rkr\addKey` and `rkr\removeKey`.
//!
//! The extension hooks into the host checker's type-expression resolver.
//! [`RecordOperatorExtension::resolve`] recognizes the operator spellings,
//! resolves every argument through the injected resolver, and computes the
//! resulting structural type symbolically. Shape incompatibilities produce
//! the error type, which propagates like a poisoned value; misuse of an
//! operator's arity is reported as [`ArityError`] and aborts resolution of
//! the enclosing expression.

pub mod extension;
pub mod keys;
pub mod merge;
pub mod modify;
pub mod operators;
pub mod resolve;
pub mod template;

pub use extension::{ArityError, RecordOperatorExtension};
pub use keys::{resolve_key_expr, resolve_key_exprs};
pub use merge::merge_types;
pub use modify::{add_key, remove_keys};
pub use operators::OperatorKind;
pub use resolve::{ExprResolver, NameScope};
pub use template::unwrap_template;

#[cfg(test)]
mod tests;
