//! Shared keyed containers.
//!
//! An [`Object`] is a handle to a mapping from string keys to [`Value`]s.
//! Cloning the handle aliases the same container, so an object can hold
//! itself directly or through other objects. Containers have identity
//! ([`Object::id`], [`Object::ptr_eq`]) in addition to their contents.
//!
//! Reference cycles built through [`Object::insert`] keep their members
//! alive; break them with [`Object::clear`] or [`Object::remove`] when the
//! structure is no longer needed.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::collections::LtMap;
use crate::value::Value;

/// The field table of an object.
pub type Fields = LtMap<Arc<str>, Value>;

/// Identity of an [`Object`], stable for as long as the object is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(usize);

/// A shared, mutable, unordered keyed container.
#[derive(Clone, Default)]
pub struct Object(Arc<RwLock<Fields>>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(LtMap::new())))
    }

    // The field table is a persistent map that is swapped whole on every
    // write, so a poisoned lock still guards a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Fields> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Fields> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the identity of this object.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        ObjectId(Arc::as_ptr(&self.0) as usize)
    }

    /// Returns true if both handles refer to the same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Gets the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Returns true if the object has the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let mut fields = self.write();
        let previous = fields.get(&key).cloned();
        *fields = fields.insert(key, value.into());
        previous
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut fields = self.write();
        let previous = fields.get(key).cloned();
        if previous.is_some() {
            *fields = fields.remove(key);
        }
        previous
    }

    /// Removes every key.
    pub fn clear(&self) {
        *self.write() = LtMap::new();
    }

    /// Returns the keys, in unspecified order.
    #[must_use]
    pub fn keys(&self) -> Vec<Arc<str>> {
        self.read().keys().cloned().collect()
    }

    /// Returns a point-in-time copy of the fields.
    ///
    /// This is O(1); later writes to the object are not visible in the copy.
    #[must_use]
    pub fn snapshot(&self) -> Fields {
        self.read().clone()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(Arc::new(RwLock::new(fields)))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Object(self.clone()), f)
    }
}
