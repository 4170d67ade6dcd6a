//! Core value type compared by deepeq.

use std::fmt;
use std::sync::Arc;

use crate::collections::LtVec;
use crate::kind::Kind;
use crate::object::{Object, ObjectId};

/// A value in the comparison domain.
///
/// Primitives (`Nil`, `Bool`, `Int`, `Float`, `String`) are plain data.
/// `List` is an immutable persistent sequence. `Object` is a shared handle
/// to a keyed container: cloning a `Value::Object` aliases the container.
///
/// `Value` does not implement `PartialEq`; structural equality is decided
/// by the comparator in `deepeq_compare`.
#[derive(Clone, Default)]
pub enum Value {
    /// The nil value (represents absence).
    #[default]
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Ordered list of values.
    List(LtVec<Value>),
    /// Keyed container.
    Object(Object),
}

impl Value {
    /// Builds an object value from key-value pairs.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Self::Object(entries.into_iter().collect())
    }

    /// Builds a list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns an empty object value.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(Object::new())
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::List(_) => Kind::List,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this value is a list or an object.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&LtVec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract an object handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Compares two primitives directly.
    ///
    /// Returns `None` when both values are distinct containers of the same
    /// kind and their contents must be walked. The same object or list on
    /// both sides is equal without walking. Floats compare by bit pattern, so a
    /// NaN equals itself. Values of different kinds are never equal.
    #[must_use]
    pub fn primitive_eq(&self, other: &Self) -> Option<bool> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(true),
            (Self::Bool(a), Self::Bool(b)) => Some(a == b),
            (Self::Int(a), Self::Int(b)) => Some(a == b),
            (Self::Float(a), Self::Float(b)) => Some(a.to_bits() == b.to_bits()),
            (Self::String(a), Self::String(b)) => Some(Arc::ptr_eq(a, b) || a == b),
            (Self::Object(a), Self::Object(b)) if a.ptr_eq(b) => Some(true),
            (Self::List(a), Self::List(b)) if a.ptr_eq(b) => Some(true),
            (Self::List(_), Self::List(_)) | (Self::Object(_), Self::Object(_)) => None,
            _ => Some(false),
        }
    }
}

/// Containers nested deeper than this render as `[...]` or `{...}`.
///
/// Rendering recurses natively, unlike comparison, so output is cut off
/// well before the call stack is at risk.
pub const MAX_RENDER_DEPTH: usize = 64;

// Rendering tracks the objects on the current path so cyclic values print
// `{...}` where they refer back to an enclosing object.
fn render(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    quote: bool,
    active: &mut Vec<ObjectId>,
    depth: usize,
) -> fmt::Result {
    match value {
        Value::List(_) if depth >= MAX_RENDER_DEPTH => write!(f, "[...]"),
        Value::Object(_) if depth >= MAX_RENDER_DEPTH => write!(f, "{{...}}"),
        Value::Nil => write!(f, "nil"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(n) => write!(f, "{n:?}"),
        Value::String(s) if quote => write!(f, "{s:?}"),
        Value::String(s) => write!(f, "{s}"),
        Value::List(items) => {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                render(item, f, true, active, depth + 1)?;
            }
            write!(f, "]")
        }
        Value::Object(obj) => {
            let id = obj.id();
            if active.contains(&id) {
                return write!(f, "{{...}}");
            }
            let fields = obj.snapshot();
            let mut entries: Vec<_> = fields.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            active.push(id);
            write!(f, "{{")?;
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: ")?;
                render(item, f, true, active, depth + 1)?;
            }
            active.pop();
            write!(f, "}}")
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, true, &mut Vec::new(), 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, false, &mut Vec::new(), 0)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Self::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}
