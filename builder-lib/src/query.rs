//! Query string assembly and parsing
//!
//! Nothing here fails: pairs without `=` are skipped and a missing `?` means
//! an empty query.

use log::trace;

use crate::encode::url_encode;
use crate::types::ParameterMap;

/// How keys are cut out of `key=value` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Everything before the first `=`.
    Full,
    /// Bytes `1..=eq` of the pair: the first byte is dropped and the `=` is
    /// kept, as the first native release of `replaceParamValue` did.
    Legacy,
}

/// Append `key=url_encode(value)` pairs to `domain`, joined by `&`.
///
/// Keys go out verbatim and no `?` is added, so `domain` has to end with its
/// own separator.
pub fn build_query(domain: &str, params: &ParameterMap) -> String {
    let mut query = String::from(domain);
    for (index, (key, value)) in params.iter().enumerate() {
        if index > 0 {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&url_encode(value));
    }
    query
}

/// Split into the part before the first `?` and the query after it.
///
/// The query part ends at the first line break.
pub fn split_query(input: &str) -> (&str, &str) {
    match input.split_once('?') {
        Some((path, rest)) => (path, rest.split('\n').next().unwrap_or_default()),
        None => (input, ""),
    }
}

/// Parse `k1=v1&k2=v2` into a map. Later duplicates win.
pub fn parse_params(query: &str, mode: KeyMode) -> ParameterMap {
    let mut params = ParameterMap::new();
    for pair in query.split('&') {
        let Some(eq) = pair.find('=') else {
            if !pair.is_empty() {
                trace!("dropping pair without '=': {:?}", pair);
            }
            continue;
        };
        let key = match mode {
            KeyMode::Full => pair[..eq].to_string(),
            KeyMode::Legacy => String::from_utf8_lossy(&pair.as_bytes()[1..=eq]).into_owned(),
        };
        params.insert(key, pair[eq + 1..].to_string());
    }
    params
}

/// Set `name` to `value` in `input` and reassemble as `path?k1=v1&k2=v2`.
///
/// Keys and values are written back as parsed, without re-encoding.
pub fn replace_param_value(input: &str, name: &str, value: &str, mode: KeyMode) -> String {
    let (path, query) = split_query(input);
    let mut params = parse_params(query, mode);
    params.insert(name.to_string(), value.to_string());

    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{}?{}", path, pairs.join("&"))
}

/// Value of `name` in `input`, or an empty string when absent.
pub fn get_param_value(input: &str, name: &str) -> String {
    let (_, query) = split_query(input);
    parse_params(query, KeyMode::Full)
        .remove(name)
        .unwrap_or_default()
}
