//! Global state for JNI bridge
//!
//! The config is installed at most once through `configure`; calls made
//! before that run with the defaults.

use crate::builder::QueryBuilder;
use crate::types::BuilderConfig;
use std::sync::OnceLock;

/// Logcat tag
pub const LOG_TAG: &str = "builder";

/// Global query builder
pub static BUILDER: OnceLock<QueryBuilder> = OnceLock::new();

/// Builder for the current call, falling back to the default config
pub fn builder() -> &'static QueryBuilder {
    BUILDER.get_or_init(QueryBuilder::default)
}

/// Install `config` unless a builder is already in place
pub fn install(config: BuilderConfig) -> bool {
    BUILDER.set(QueryBuilder::new(config)).is_ok()
}

/// Initialize Android logger, only the first call has any effect
pub fn init_logger() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );
}
