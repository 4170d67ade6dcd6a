//! Kind descriptors for values.

use std::fmt;

/// The kind of a [`Value`](crate::Value).
///
/// Two values of different kinds are never structurally equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The nil kind (only value: nil).
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Ordered list, keyed by index.
    List,
    /// Keyed container.
    Object,
}

impl Kind {
    /// Returns true for the container kinds (`List`, `Object`).
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Object)
    }

    /// Returns true for the primitive kinds, including nil.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !self.is_container()
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
