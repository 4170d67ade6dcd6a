//! Core value type, keyed containers, and persistent collections for deepeq.
//!
//! This crate provides:
//! - [`Value`] - The value domain compared by the structural comparator
//! - [`Object`] - Shared, identity-bearing keyed containers
//! - [`Kind`] - Kind descriptors used for discrimination and reporting
//! - [`Error`] - Error types with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod kind;
pub mod object;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::Kind;
pub use object::{Object, ObjectId};
pub use value::Value;

/// Result type for deepeq operations.
pub type Result<T> = std::result::Result<T, Error>;
