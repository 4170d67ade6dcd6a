//! Integration tests for structural equality
//!
//! Covers the documented equality properties and a worked example.

use deepeq::{Value, deep_equal};

fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::object(entries)
}

// =============================================================================
// Documented Properties
// =============================================================================

#[test]
fn empty_objects() {
    assert!(deep_equal(&obj([]), &obj([])));
}

#[test]
fn cardinality_mismatch() {
    assert!(!deep_equal(
        &obj([("x", 1.into())]),
        &obj([("x", 1.into()), ("y", 2.into())])
    ));
}

#[test]
fn recursive_match_on_distinct_instances() {
    assert!(deep_equal(
        &obj([("x", obj([("y", "z".into())]))]),
        &obj([("x", obj([("y", "z".into())]))])
    ));
}

#[test]
fn key_set_mismatch() {
    assert!(!deep_equal(&obj([("x", 1.into())]), &obj([("y", 1.into())])));
}

#[test]
fn nil_cases() {
    assert!(deep_equal(&Value::Nil, &Value::Nil));
    assert!(!deep_equal(&Value::Nil, &obj([])));
}

#[test]
fn order_independence() {
    assert!(deep_equal(
        &obj([("a", 1.into()), ("b", 2.into())]),
        &obj([("b", 2.into()), ("a", 1.into())])
    ));
}

#[test]
fn nil_valued_key_is_not_a_missing_key() {
    assert!(!deep_equal(
        &obj([("x", Value::Nil), ("y", 1.into())]),
        &obj([("y", 1.into()), ("z", Value::Nil)])
    ));
    assert!(deep_equal(&obj([("x", Value::Nil)]), &obj([("x", Value::Nil)])));
}

#[test]
fn primitives() {
    assert!(deep_equal(&Value::from("a"), &Value::from("a")));
    assert!(!deep_equal(&Value::from("a"), &Value::from("b")));
    assert!(!deep_equal(&Value::Int(1), &Value::Float(1.0)));
    assert!(!deep_equal(&Value::Int(0), &Value::Bool(false)));
    assert!(deep_equal(&Value::Float(f64::NAN), &Value::Float(f64::NAN)));
}

#[test]
fn nested_lists_of_objects() {
    let make = || Value::list([obj([("id", 1.into())]), obj([("id", 2.into())])]);
    assert!(deep_equal(&make(), &make()));

    let swapped = Value::list([obj([("id", 2.into())]), obj([("id", 1.into())])]);
    assert!(!deep_equal(&make(), &swapped));
}

#[test]
fn shared_substructure() {
    let shared = obj([("v", 1.into())]);
    let a = obj([("l", shared.clone()), ("r", shared.clone())]);
    let b = obj([("l", obj([("v", 1.into())])), ("r", shared)]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn shared_list_dag_compares_in_linear_time() {
    let mut shared = Value::Int(7);
    for _ in 0..80 {
        shared = Value::list([shared.clone(), shared]);
    }
    let a = obj([("data", shared.clone()), ("n", 1.into())]);
    let b = obj([("data", shared.clone()), ("n", 1.into())]);
    assert!(deep_equal(&a, &a));
    assert!(deep_equal(&a, &b));

    let c = obj([("data", shared), ("n", 2.into())]);
    assert!(!deep_equal(&a, &c));
}

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn worked_example() {
    let value = obj([("here", obj([("is", "an".into())])), ("object", 2.into())]);

    assert!(deep_equal(&value, &value));
    assert!(!deep_equal(
        &value,
        &obj([("here", 1.into()), ("object", 2.into())])
    ));
    assert!(deep_equal(
        &value,
        &obj([("here", obj([("is", "an".into())])), ("object", 2.into())])
    ));
}

#[test]
fn mutation_is_observed_between_calls() {
    let a = obj([("x", 1.into())]);
    let b = obj([("x", 1.into())]);
    assert!(deep_equal(&a, &b));

    b.as_object().unwrap().insert("x", 2);
    assert!(!deep_equal(&a, &b));
}
