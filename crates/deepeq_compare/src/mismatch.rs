//! Mismatch reports.
//!
//! When two values differ, [`Comparator::explain`](crate::Comparator::explain)
//! returns the first difference it found as a [`Mismatch`]: the path from the
//! roots to the differing pair and why they differ.

use std::fmt;
use std::sync::Arc;

use deepeq_foundation::Kind;

/// One step of a path into a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(Arc<str>),
    /// A list index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Renders a path like `here.is[2]`. The empty path renders as `<root>`.
#[must_use]
pub fn render_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        match segment {
            PathSegment::Key(key) if i == 0 => out.push_str(key),
            _ => out.push_str(&segment.to_string()),
        }
    }
    out
}

/// Why two values at the same path are not equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchReason {
    /// The values are of different kinds.
    KindMismatch {
        /// Kind on the left.
        left: Kind,
        /// Kind on the right.
        right: Kind,
    },
    /// Primitives of the same kind with different values.
    ValueMismatch,
    /// Containers with a different number of keys or elements.
    LengthMismatch {
        /// Size on the left.
        left: usize,
        /// Size on the right.
        right: usize,
    },
    /// A key on the left has no counterpart on the right.
    MissingKey {
        /// The missing key.
        key: Arc<str>,
    },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { left, right } => write!(f, "kind mismatch: {left} vs {right}"),
            Self::ValueMismatch => write!(f, "values differ"),
            Self::LengthMismatch { left, right } => {
                write!(f, "size mismatch: {left} vs {right}")
            }
            Self::MissingKey { key } => write!(f, "key {key:?} missing on the right"),
        }
    }
}

/// The first difference found between two values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Path from the roots to the differing pair.
    pub path: Vec<PathSegment>,
    /// Why the pair differs.
    pub reason: MismatchReason,
}

impl Mismatch {
    /// Creates a new mismatch.
    #[must_use]
    pub fn new(path: Vec<PathSegment>, reason: MismatchReason) -> Self {
        Self { path, reason }
    }

    /// Returns the rendered path.
    #[must_use]
    pub fn path_string(&self) -> String {
        render_path(&self.path)
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: {}", self.path_string(), self.reason)
    }
}
