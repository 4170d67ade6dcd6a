//! Property tests for structural equality

use deepeq::{Object, Value, deep_equal};
use proptest::prelude::*;

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        "[a-zA-Z0-9]{0,8}".prop_map(|s| Value::from(s.as_str())),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(5, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::list),
            prop::collection::hash_map("[a-e]", inner, 0..5).prop_map(Value::object),
        ]
    })
}

proptest! {
    #[test]
    fn reflexivity(v in any_value()) {
        prop_assert!(deep_equal(&v, &v));
    }

    #[test]
    fn symmetry(a in any_value(), b in any_value()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn insertion_order_is_irrelevant(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<i64>(), 0..8)
    ) {
        let forward: Object = entries.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let mut reversed: Vec<_> = entries.iter().collect();
        reversed.reverse();
        let backward: Object = reversed.into_iter().map(|(k, v)| (k.as_str(), *v)).collect();

        prop_assert!(deep_equal(&Value::Object(forward), &Value::Object(backward)));
    }

    #[test]
    fn extra_key_breaks_equality(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<i64>(), 0..8),
        extra in "[0-9]{1,4}",
    ) {
        let a = Value::object(entries.clone());
        let b = Value::object(entries);
        b.as_object().unwrap().insert(extra, Value::Nil);
        prop_assert!(!deep_equal(&a, &b));
        prop_assert!(!deep_equal(&b, &a));
    }
}
