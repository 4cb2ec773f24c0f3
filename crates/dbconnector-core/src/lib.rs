//! Core types for dbconnector.
//!
//! This crate provides the pieces every other dbconnector crate builds on:
//!
//! - [`Error`] and [`Result`] for all dbconnector operations
//! - [`Value`], the dynamically-typed value exchanged with drivers
//! - [`resolve`] for `env://` and `file://` configuration values
//! - [`NullUint64`], a nullable `BIGINT UNSIGNED` column
//! - [`IsolationLevel`] for session isolation
//! - `Outcome` and `Cx` re-exports from asupersync for cancel-correct operations

// Re-export asupersync primitives for structured concurrency
pub use asupersync::{Cx, Outcome};

pub mod error;
pub mod isolation;
pub mod null;
pub mod resolve;
pub mod value;

pub use error::{
    BoundsError, ConfigError, ConnectionError, ConnectionErrorKind, Error, Result, ScanError,
    ServerError, TlsError, TlsErrorKind,
};
pub use isolation::IsolationLevel;
pub use null::NullUint64;
pub use resolve::resolve;
pub use value::Value;
