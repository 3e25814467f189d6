//! Behavior of `rkr\removeKey`.

use rkr_types::{Ty, TypeExpr, union2};

use crate::extension::ArityError;

use super::{TestResolver, TestScope, ikey, rendered, resolve, resolve_err, shape, skey};

fn remove_key(args: Vec<TypeExpr>) -> TypeExpr {
    TypeExpr::generic("rkrRemoveKey", args)
}

fn wide_resolver() -> TestResolver {
    TestResolver::new().alias(
        "TSomeTypeWithExtras",
        shape(vec![
            (skey("a"), Ty::int(), false),
            (skey("b"), Ty::string(), false),
            (skey("c"), Ty::float(), false),
        ]),
    )
}

#[test]
fn removes_named_keys() {
    let resolver = wide_resolver();
    let scope = TestScope::empty();

    let node = remove_key(vec![
        TypeExpr::ident("TSomeTypeWithExtras"),
        TypeExpr::ident("b"),
        TypeExpr::ident("c"),
    ]);
    assert_eq!(rendered(&resolver, &scope, &node), "array{a: int}");
}

#[test]
fn preserves_order_and_optionality_of_remaining_entries() {
    let resolver = TestResolver::new().alias(
        "TSubject",
        shape(vec![
            (skey("a"), Ty::int(), false),
            (skey("b"), Ty::string(), true),
            (skey("c"), Ty::float(), false),
        ]),
    );
    let scope = TestScope::empty();

    let node = remove_key(vec![TypeExpr::ident("TSubject"), TypeExpr::ident("a")]);
    assert_eq!(
        rendered(&resolver, &scope, &node),
        "array{b?: string, c: float}"
    );
}

#[test]
fn missing_keys_are_a_noop() {
    let resolver = wide_resolver();
    let scope = TestScope::empty();

    let node = remove_key(vec![
        TypeExpr::ident("TSomeTypeWithExtras"),
        TypeExpr::ident("z"),
    ]);
    assert_eq!(
        rendered(&resolver, &scope, &node),
        "array{a: int, b: string, c: float}"
    );
}

#[test]
fn repeated_removal_is_idempotent() {
    let resolver = wide_resolver();
    let scope = TestScope::empty();

    let once = remove_key(vec![
        TypeExpr::ident("TSomeTypeWithExtras"),
        TypeExpr::ident("b"),
    ]);
    let twice = remove_key(vec![once.clone(), TypeExpr::ident("b")]);
    assert_eq!(
        resolve(&resolver, &scope, &once),
        resolve(&resolver, &scope, &twice)
    );
}

#[test]
fn add_then_remove_returns_the_original_shape() {
    let resolver = TestResolver::new().alias("TSomeType", shape(vec![(skey("a"), Ty::int(), false)]));
    let scope = TestScope::empty();

    let added = TypeExpr::generic(
        "rkrAddKey",
        vec![
            TypeExpr::ident("TSomeType"),
            TypeExpr::str_lit("b"),
            TypeExpr::ident("string"),
        ],
    );
    let node = remove_key(vec![added, TypeExpr::ident("b")]);
    assert_eq!(
        resolve(&resolver, &scope, &node),
        shape(vec![(skey("a"), Ty::int(), false)])
    );
}

#[test]
fn union_key_expressions_contribute_every_member() {
    let resolver =
        wide_resolver().alias("TKeys", union2(Ty::literal_str("b"), Ty::literal_str("c")));
    let scope = TestScope::empty();

    let node = remove_key(vec![
        TypeExpr::ident("TSomeTypeWithExtras"),
        TypeExpr::ident("TKeys"),
    ]);
    assert_eq!(rendered(&resolver, &scope, &node), "array{a: int}");
}

#[test]
fn key_kinds_stay_distinct_during_removal() {
    let resolver = TestResolver::new().alias(
        "TSubject",
        shape(vec![
            (ikey(5), Ty::int(), false),
            (skey("a"), Ty::string(), false),
        ]),
    );
    let scope = TestScope::empty();

    // The string key '5' does not match the integer offset 5.
    let string_key = remove_key(vec![TypeExpr::ident("TSubject"), TypeExpr::str_lit("5")]);
    assert_eq!(
        rendered(&resolver, &scope, &string_key),
        "array{5: int, a: string}"
    );

    let int_key = remove_key(vec![TypeExpr::ident("TSubject"), TypeExpr::int_lit(5)]);
    assert_eq!(rendered(&resolver, &scope, &int_key), "array{a: string}");
}

#[test]
fn union_subjects_update_every_shape() {
    let resolver = TestResolver::new().alias(
        "TEither",
        union2(
            shape(vec![
                (skey("a"), Ty::int(), false),
                (skey("b"), Ty::string(), false),
            ]),
            shape(vec![
                (skey("b"), Ty::string(), false),
                (skey("c"), Ty::float(), false),
            ]),
        ),
    );
    let scope = TestScope::empty();

    let node = remove_key(vec![TypeExpr::ident("TEither"), TypeExpr::ident("b")]);
    assert_eq!(
        rendered(&resolver, &scope, &node),
        "array{a: int}|array{c: float}"
    );
}

#[test]
fn shapeless_subject_is_left_unchanged() {
    let resolver = TestResolver::new().alias("TDynamic", Ty::array(Ty::string(), Ty::int()));
    let scope = TestScope::empty();

    let node = remove_key(vec![TypeExpr::ident("TDynamic"), TypeExpr::ident("a")]);
    assert_eq!(rendered(&resolver, &scope, &node), "array<string, int>");
}

#[test]
fn empty_key_set_is_left_unchanged() {
    let resolver = wide_resolver().alias("TKeys", Ty::object("Foo"));
    let scope = TestScope::empty();

    let node = remove_key(vec![
        TypeExpr::ident("TSomeTypeWithExtras"),
        TypeExpr::ident("TKeys"),
    ]);
    assert_eq!(
        rendered(&resolver, &scope, &node),
        "array{a: int, b: string, c: float}"
    );
}

#[test]
fn non_array_subject_is_an_error() {
    let resolver = wide_resolver();
    let scope = TestScope::empty();

    let node = remove_key(vec![TypeExpr::ident("int"), TypeExpr::ident("a")]);
    assert_eq!(resolve(&resolver, &scope, &node), Ty::Error);
}

#[test]
fn remove_key_requires_a_subject_and_a_key() {
    let resolver = wide_resolver();
    let scope = TestScope::empty();

    let node = remove_key(vec![TypeExpr::ident("TSomeTypeWithExtras")]);
    assert_eq!(
        resolve_err(&resolver, &scope, &node),
        ArityError::RemoveKeyTooFew { found: 1 }
    );
}
