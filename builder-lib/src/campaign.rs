//! Campaign normalization and sub-field expansion
//!
//! A campaign is a delimited attribution payload such as
//! `myapp://sub1_push_sub2`. It arrives either as `campaign` or as the pair
//! `campaign_1` / `campaign_2`, and is spread into positional slots:
//!
//! | position | key      | default     |
//! |----------|----------|-------------|
//! | 0        | `sub1`   | `null`      |
//! | 1        | `push`   | `null`      |
//! | 2..=9    | `sub{i}` | empty       |
//! | 10       | `sub10`  | `firstOpen` |
//!
//! Positions past 10 are only written when the campaign has that many tokens.

use log::{debug, trace};

use crate::types::{CampaignConfig, ParameterMap};

pub const CAMPAIGN: &str = "campaign";
pub const CAMPAIGN_PRIMARY: &str = "campaign_1";
pub const CAMPAIGN_FALLBACK: &str = "campaign_2";
pub const PUSH: &str = "push";
pub const NOTIFICATION_ID: &str = "notId";

/// Number of slots that always end up in the output.
pub const SLOT_COUNT: usize = 11;
/// Slot stamped with the first-open marker.
pub const FIRST_OPEN_SLOT: usize = 10;

/// Values of `campaign_1` that mean "no campaign".
const PLACEHOLDERS: [&str; 2] = ["null", "None"];

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

/// Output key for a token position.
pub fn slot_name(index: usize) -> String {
    match index {
        0 => "sub1".to_string(),
        1 => PUSH.to_string(),
        i => format!("sub{}", i),
    }
}

fn slot_default(index: usize, config: &CampaignConfig) -> &str {
    match index {
        0 | 1 => config.null_value.as_str(),
        FIRST_OPEN_SLOT => config.first_open_value.as_str(),
        _ => "",
    }
}

/// Merge `campaign_1` and `campaign_2` into `campaign`.
///
/// Only applies when both are present. `campaign_1` wins unless it is empty or
/// a placeholder, in which case `campaign_2` is taken as is.
pub fn normalize(params: &mut ParameterMap) {
    if !(params.contains_key(CAMPAIGN_PRIMARY) && params.contains_key(CAMPAIGN_FALLBACK)) {
        return;
    }
    let primary = params.remove(CAMPAIGN_PRIMARY).unwrap_or_default();
    let fallback = params.remove(CAMPAIGN_FALLBACK).unwrap_or_default();
    let selected = if is_placeholder(&primary) {
        debug!("{} is {:?}, using {}", CAMPAIGN_PRIMARY, primary, CAMPAIGN_FALLBACK);
        fallback
    } else {
        primary
    };
    params.insert(CAMPAIGN.to_string(), selected);
}

/// Split a campaign into its tokens.
///
/// The scheme prefix is stripped first. Empty tokens are kept, including a
/// trailing one, and an empty campaign yields a single empty token.
pub fn tokenize<'a>(campaign: &'a str, config: &CampaignConfig) -> Vec<&'a str> {
    campaign
        .strip_prefix(config.scheme_prefix.as_str())
        .unwrap_or(campaign)
        .split(config.delimiter)
        .collect()
}

/// Spread `campaign` into slot keys and fill the remaining slots with their
/// defaults. No-op when there is no campaign.
pub fn expand(params: &mut ParameterMap, config: &CampaignConfig) {
    let Some(campaign) = params.get(CAMPAIGN).cloned() else {
        trace!("no campaign to expand");
        return;
    };

    let tokens = tokenize(&campaign, config);
    debug!("campaign split into {} tokens", tokens.len());

    let filled = tokens.len();
    for (index, token) in tokens.into_iter().enumerate() {
        params.insert(slot_name(index), token.to_string());
    }
    for index in filled..SLOT_COUNT {
        params.insert(slot_name(index), slot_default(index, config).to_string());
    }
}

/// Full campaign pass: normalize, expand, then stamp `sub10` and `notId`.
///
/// The stamp is unconditional and overrides whatever token landed in `sub10`.
pub fn process(params: &mut ParameterMap, config: &CampaignConfig) {
    normalize(params);
    expand(params, config);
    params.insert(slot_name(FIRST_OPEN_SLOT), config.first_open_value.clone());
    params.insert(NOTIFICATION_ID.to_string(), config.null_value.clone());
}
