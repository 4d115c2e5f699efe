use std::{collections::BTreeMap, fmt, fs, path::Path, result::Result as StdResult, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters keyed by name.
///
/// Iteration follows lexicographic key order, which is the serialization
/// order of every query string this crate produces.
pub type ParameterMap = BTreeMap<String, String>;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub campaign: CampaignConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignConfig {
    /// Scheme stripped from the campaign before splitting.
    pub scheme_prefix: String,
    pub delimiter: char,
    /// Default for the `sub1` and `push` slots, and the value stamped on `notId`.
    pub null_value: String,
    /// Value stamped on `sub10`.
    pub first_open_value: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            scheme_prefix: "myapp://".to_string(),
            delimiter: '_',
            null_value: "null".to_string(),
            first_open_value: "firstOpen".to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Parse keys in `replace_param_value` the way the first native release
    /// did: first byte dropped, `=` kept.
    pub legacy_replace_keys: bool,
}

impl BuilderConfig {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for BuilderConfig {
    type Err = Error;
    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl fmt::Display for BuilderConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        toml::to_string_pretty(self)
            .map_err(|_| fmt::Error)
            .and_then(|s| write!(f, "{}", s))
    }
}
