//! Shared fixtures for the operator tests.
//!
//! `TestResolver` plays the host checker's type-expression resolver: it
//! resolves intrinsic names and registered aliases, and routes generic
//! nodes back through the extension so operators nest.

mod remove_key_tests;

use rustc_hash::FxHashMap;

use rkr_types::{ArrayKey, ConstLiteral, ConstantShapeBuilder, Ty, TypeExpr};

use crate::extension::{ArityError, RecordOperatorExtension};
use crate::resolve::{ExprResolver, NameScope};

pub(crate) struct TestScope {
    bindings: FxHashMap<String, Ty>,
}

impl TestScope {
    pub fn empty() -> TestScope {
        TestScope {
            bindings: FxHashMap::default(),
        }
    }

    pub fn bind(mut self, name: &str, ty: Ty) -> TestScope {
        self.bindings.insert(name.to_string(), ty);
        self
    }
}

impl NameScope for TestScope {
    fn template_binding(&self, name: &str) -> Option<Ty> {
        self.bindings.get(name).cloned()
    }
}

pub(crate) struct TestResolver {
    aliases: FxHashMap<String, Ty>,
    unresolved: Vec<String>,
    extension: RecordOperatorExtension,
}

impl TestResolver {
    pub fn new() -> TestResolver {
        TestResolver {
            aliases: FxHashMap::default(),
            unresolved: Vec::new(),
            extension: RecordOperatorExtension,
        }
    }

    pub fn alias(mut self, name: &str, ty: Ty) -> TestResolver {
        self.aliases.insert(name.to_string(), ty);
        self
    }

    pub fn unresolved(mut self, name: &str) -> TestResolver {
        self.unresolved.push(name.to_string());
        self
    }

    fn resolve_ident(&self, name: &str) -> Option<Ty> {
        if self.unresolved.iter().any(|n| n == name) {
            return None;
        }
        if let Some(ty) = self.aliases.get(name) {
            return Some(ty.clone());
        }
        Some(match name {
            "int" => Ty::int(),
            "float" => Ty::float(),
            "string" => Ty::string(),
            "bool" => Ty::bool(),
            "mixed" => Ty::mixed(),
            "null" => Ty::null(),
            _ => Ty::object(name),
        })
    }
}

impl ExprResolver for TestResolver {
    fn resolve(&self, node: &TypeExpr, scope: &dyn NameScope) -> Option<Ty> {
        match node {
            TypeExpr::Ident(name) => self.resolve_ident(name),
            TypeExpr::Literal(ConstLiteral::Str(value)) => Some(Ty::literal_str(value)),
            TypeExpr::Literal(ConstLiteral::Int(value)) => Some(Ty::literal_int(*value)),
            TypeExpr::Generic { .. } => self
                .extension
                .resolve(node, scope, self)
                .expect("arity violation in nested operator"),
        }
    }
}

pub(crate) fn resolve(resolver: &TestResolver, scope: &TestScope, node: &TypeExpr) -> Ty {
    resolver
        .extension
        .resolve(node, scope, resolver)
        .expect("unexpected arity violation")
        .expect("node is not a record operator")
}

pub(crate) fn resolve_err(
    resolver: &TestResolver,
    scope: &TestScope,
    node: &TypeExpr,
) -> ArityError {
    resolver
        .extension
        .resolve(node, scope, resolver)
        .expect_err("expected an arity violation")
}

pub(crate) fn defers(resolver: &TestResolver, scope: &TestScope, node: &TypeExpr) -> bool {
    resolver
        .extension
        .resolve(node, scope, resolver)
        .expect("unexpected arity violation")
        .is_none()
}

pub(crate) fn rendered(resolver: &TestResolver, scope: &TestScope, node: &TypeExpr) -> String {
    resolve(resolver, scope, node).to_string()
}

pub(crate) fn shape(entries: Vec<(ArrayKey, Ty, bool)>) -> Ty {
    let mut builder = ConstantShapeBuilder::new();
    builder.disable_degradation();
    for (key, value, optional) in entries {
        builder.set(key, value, optional);
    }
    builder.finish()
}

pub(crate) fn skey(name: &str) -> ArrayKey {
    ArrayKey::Str(name.to_string())
}

pub(crate) fn ikey(value: i64) -> ArrayKey {
    ArrayKey::Int(value)
}
