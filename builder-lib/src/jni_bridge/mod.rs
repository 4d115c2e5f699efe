//! JNI bridge for Android
//!
//! Exposes the query builder to the Kotlin object
//! `com.kotlinenjoer.builder.Builder`.
//!
//! ## Layout
//!
//! - `types`: process-wide config and logger, set up once
//! - `convert`: Java strings and maps into owned Rust values
//! - `query`: the `buildQuery` / `replaceParamValue` / `getParamValue` /
//!   `configure` entry points
//!
//! ## Thread Model
//!
//! Every call runs to completion on the calling Java thread. Nothing is
//! shared between calls except the write-once config.

pub mod convert;
pub mod query;
pub mod types;

pub use query::*;
