#[cfg(test)]
#[macro_use]
mod tests;

pub mod builder;
pub mod campaign;
pub mod encode;
pub mod error;
pub mod query;
pub mod types;

pub use builder::QueryBuilder;
pub use types::{BuilderConfig, ParameterMap};

// JNI bridge for Android
#[cfg(all(feature = "jni-bridge", target_os = "android"))]
pub mod jni_bridge;
