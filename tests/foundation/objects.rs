//! Integration tests for Object containers
//!
//! Tests identity, mutation through shared handles, and snapshots.

use deepeq_foundation::{Object, Value};
use std::thread;

#[test]
fn object_identity_survives_mutation() {
    let obj = Object::new();
    let id = obj.id();
    obj.insert("x", 1);
    obj.remove("x");
    assert_eq!(obj.id(), id);
}

#[test]
fn object_from_iter_last_key_wins() {
    let obj: Object = [("k", 1), ("k", 2)].into_iter().collect();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("k").and_then(|v| v.as_int()), Some(2));
}

#[test]
fn object_shared_across_threads() {
    let obj = Object::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let obj = obj.clone();
            thread::spawn(move || {
                obj.insert(format!("t{i}"), i);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(obj.len(), 4);
}

#[test]
fn object_snapshot_sees_values() {
    let obj = Object::new();
    obj.insert("nested", Value::object([("y", "z")]));
    let snap = obj.snapshot();
    let nested = snap.get("nested").and_then(Value::as_object).unwrap();
    assert_eq!(nested.get("y").as_ref().and_then(Value::as_str), Some("z"));
}

#[test]
fn object_keys_after_remove() {
    let obj: Object = [("a", 1), ("b", 2)].into_iter().collect();
    obj.remove("a");
    let keys = obj.keys();
    assert_eq!(keys.len(), 1);
    assert_eq!(&*keys[0], "b");
}
