//! Operator recognition, arity validation, and dispatch.

use std::fmt;

use tracing::trace;

use rkr_types::{Ty, TypeExpr};

use crate::keys::{resolve_key_expr, resolve_key_exprs};
use crate::merge::merge_types;
use crate::modify::{add_key, remove_keys};
use crate::operators::OperatorKind;
use crate::resolve::{ExprResolver, NameScope, resolve_or_error};
use crate::template::unwrap_template;

/// Misuse of an operator's generic arity.
///
/// This is a configuration error in the analyzed annotations, not a
/// type-algebra outcome: it aborts resolution of the enclosing expression
/// instead of degrading to the error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArityError {
    /// `merge` needs at least two generic types.
    MergeTooFew { found: usize },
    /// `merge<N>` needs exactly N generic types.
    MergeCountMismatch { expected: usize, found: usize },
    /// `addKey` needs exactly subject, key, and value.
    AddKeyCount { found: usize },
    /// `removeKey` needs a subject and at least one key.
    RemoveKeyTooFew { found: usize },
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityError::MergeTooFew { .. } => {
                f.write_str("rkr\\merge requires at least two generic types.")
            }
            ArityError::MergeCountMismatch { expected, .. } => write!(
                f,
                "rkr\\merge{expected} requires exactly {expected} generic types."
            ),
            ArityError::AddKeyCount { .. } => {
                f.write_str("rkr\\addKey requires exactly three generic types.")
            }
            ArityError::RemoveKeyTooFew { .. } => {
                f.write_str("rkr\\removeKey requires an array type and at least one key.")
            }
        }
    }
}

impl std::error::Error for ArityError {}

/// The type-expression resolver extension providing the record operators.
pub struct RecordOperatorExtension;

impl RecordOperatorExtension {
    /// Resolve a type expression if its head names one of the record
    /// operators.
    ///
    /// `Ok(None)` defers to other resolvers. `Err` reports operator misuse
    /// and must abort resolution of the enclosing expression.
    pub fn resolve(
        &self,
        node: &TypeExpr,
        scope: &dyn NameScope,
        resolver: &dyn ExprResolver,
    ) -> Result<Option<Ty>, ArityError> {
        let TypeExpr::Generic { name, args } = node else {
            return Ok(None);
        };
        let Some(operator) = OperatorKind::parse(name) else {
            return Ok(None);
        };
        trace!(operator = %name, args = args.len(), "resolving record type operator");

        let ty = match operator {
            OperatorKind::Merge { expected } => {
                self.resolve_merge(args, expected, scope, resolver)?
            }
            OperatorKind::AddKey => self.resolve_add_key(args, scope, resolver)?,
            OperatorKind::RemoveKey => self.resolve_remove_key(args, scope, resolver)?,
        };
        Ok(Some(ty))
    }

    fn resolve_merge(
        &self,
        args: &[TypeExpr],
        expected: Option<usize>,
        scope: &dyn NameScope,
        resolver: &dyn ExprResolver,
    ) -> Result<Ty, ArityError> {
        match expected {
            Some(expected) if args.len() != expected => {
                return Err(ArityError::MergeCountMismatch {
                    expected,
                    found: args.len(),
                });
            }
            None if args.len() < 2 => {
                return Err(ArityError::MergeTooFew { found: args.len() });
            }
            _ => {}
        }

        let mut resolved = args
            .iter()
            .map(|node| unwrap_template(resolve_or_error(resolver, node, scope), scope));
        let Some(mut result) = resolved.next() else {
            return Ok(Ty::Error);
        };
        for next in resolved {
            result = merge_types(result, next, scope);
        }
        Ok(result)
    }

    fn resolve_add_key(
        &self,
        args: &[TypeExpr],
        scope: &dyn NameScope,
        resolver: &dyn ExprResolver,
    ) -> Result<Ty, ArityError> {
        let [subject_node, key_node, value_node] = args else {
            return Err(ArityError::AddKeyCount { found: args.len() });
        };

        let subject = unwrap_template(resolve_or_error(resolver, subject_node, scope), scope);
        let keys = resolve_key_expr(key_node, scope, resolver);
        let value = unwrap_template(resolve_or_error(resolver, value_node, scope), scope);
        Ok(add_key(subject, keys, value))
    }

    fn resolve_remove_key(
        &self,
        args: &[TypeExpr],
        scope: &dyn NameScope,
        resolver: &dyn ExprResolver,
    ) -> Result<Ty, ArityError> {
        let [subject_node, key_nodes @ ..] = args else {
            return Err(ArityError::RemoveKeyTooFew { found: args.len() });
        };
        if key_nodes.is_empty() {
            return Err(ArityError::RemoveKeyTooFew { found: args.len() });
        }

        let subject = unwrap_template(resolve_or_error(resolver, subject_node, scope), scope);
        let keys = resolve_key_exprs(key_nodes, scope, resolver);
        Ok(remove_keys(subject, keys))
    }
}
