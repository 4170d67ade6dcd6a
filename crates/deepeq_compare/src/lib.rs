//! Structural equality comparator for deepeq.
//!
//! This crate provides:
//! - [`deep_equal`] - Total structural equality under the default configuration
//! - [`Comparator`] - Configurable comparison with depth and cycle guards
//! - [`CompareConfig`] - Depth limit and [`CyclePolicy`]
//! - [`Mismatch`] - Explanations of where and why two values differ

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comparator;
pub mod config;
pub mod mismatch;

pub use comparator::{Comparator, deep_equal};
pub use config::{CompareConfig, CyclePolicy};
pub use mismatch::{Mismatch, MismatchReason, PathSegment, render_path};
