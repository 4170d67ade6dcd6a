//! deepeq - Structural (deep) equality for dynamically shaped values
//!
//! This crate re-exports both layers of the deepeq system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: deepeq_compare     — Structural comparator, cycle/depth guards, mismatch reports
//! Layer 0: deepeq_foundation  — Core types (Value, Object, Kind, Error)
//! ```

pub use deepeq_compare as compare;
pub use deepeq_foundation as foundation;

pub use deepeq_compare::{Comparator, CompareConfig, CyclePolicy, Mismatch, deep_equal};
pub use deepeq_foundation::{Error, ErrorKind, Object, Value};
