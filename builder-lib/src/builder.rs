use log::debug;

use crate::campaign;
use crate::query::{self, KeyMode};
use crate::types::{BuilderConfig, ParameterMap};

/// Builds and edits attribution query strings under one [`BuilderConfig`].
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: BuilderConfig,
}

impl QueryBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        QueryBuilder { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn replace_key_mode(&self) -> KeyMode {
        if self.config.query.legacy_replace_keys {
            KeyMode::Legacy
        } else {
            KeyMode::Full
        }
    }

    /// Run the campaign pass over `params` and append them to `domain`.
    pub fn build(&self, domain: &str, mut params: ParameterMap) -> String {
        campaign::process(&mut params, &self.config.campaign);
        debug!("building query with {} params", params.len());
        query::build_query(domain, &params)
    }

    pub fn replace_param_value(&self, query: &str, name: &str, value: &str) -> String {
        query::replace_param_value(query, name, value, self.replace_key_mode())
    }

    pub fn get_param_value(&self, query: &str, name: &str) -> String {
        query::get_param_value(query, name)
    }
}
