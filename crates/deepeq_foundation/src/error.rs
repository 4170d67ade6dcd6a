//! Error types for deepeq.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Comparison itself is total; errors only arise from the guards a caller
//! opts into (depth limits, cycle rejection).

use std::fmt;

use thiserror::Error;

/// The main error type for deepeq operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a depth limit error.
    #[must_use]
    pub fn too_deep(limit: usize) -> Self {
        Self::new(ErrorKind::TooDeep { limit })
    }

    /// Creates a cycle detected error for the given rendered path.
    #[must_use]
    pub fn cycle_detected(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::CycleDetected { path: path.into() })
    }

    /// Returns true if this error was raised by a guard (depth or cycle).
    #[must_use]
    pub fn is_guard(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::TooDeep { .. } | ErrorKind::CycleDetected { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Nesting exceeded the configured depth limit.
    #[error("nesting too deep: limit of {limit} levels exceeded")]
    TooDeep {
        /// The configured limit.
        limit: usize,
    },

    /// A container was reached again while it was still being compared.
    #[error("cycle detected at {path}")]
    CycleDetected {
        /// Rendered path from the roots to the revisited container.
        path: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Rendered path from the roots of the comparison.
    pub path: Option<String>,
    /// Depth at which the error occurred.
    pub depth: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the depth.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "at {path}")?;
        }
        if let Some(depth) = self.depth {
            if self.path.is_some() {
                write!(f, " ")?;
            }
            write!(f, "(depth {depth})")?;
        }
        Ok(())
    }
}
