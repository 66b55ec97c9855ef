//! Intent classification.
//!
//! One pass of substring checks over the normalized utterance, evaluated in a
//! fixed priority order. The order is behavior, not an implementation detail:
//! an utterance containing both "find" and "yes" is a search, while "yes"
//! alongside a make name is a confirmation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse-grained purpose of one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SearchCars,
    CompareCars,
    CarDetails,
    ResetFilters,
    Confirm,
    Deny,
    SpecifyFilters,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::SearchCars => "search_cars",
            Intent::CompareCars => "compare_cars",
            Intent::CarDetails => "car_details",
            Intent::ResetFilters => "reset_filters",
            Intent::Confirm => "confirm",
            Intent::Deny => "deny",
            Intent::SpecifyFilters => "specify_filters",
            Intent::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

// Keyword groups in priority order. "show"/"show me" is deliberately absent
// from the search group: it only boosts confidence, so "yes, show me BMWs"
// still classifies as a confirmation.
const SEARCH_KEYWORDS: &[&str] = &["find", "search", "looking for", "look for"];
const COMPARE_KEYWORDS: &[&str] = &["compare", "versus", " vs ", "difference between"];
const DETAIL_KEYWORDS: &[&str] = &["details", "tell me about", "more about", "specs"];
const RESET_KEYWORDS: &[&str] = &["reset", "start over", "start again", "clear everything"];
const CONFIRM_KEYWORDS: &[&str] = &["yes", "correct", "right", "yeah", "sure", "exactly"];
const DENY_KEYWORDS: &[&str] = &["no", "wrong", "change", "not quite"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classifies a normalized utterance.
///
/// `has_entities` feeds the lowest-priority fallback: an utterance with no
/// intent keyword but at least one extracted entity is a filter refinement.
pub fn classify(text: &str, has_entities: bool) -> Intent {
    if contains_any(text, SEARCH_KEYWORDS) {
        Intent::SearchCars
    } else if contains_any(text, COMPARE_KEYWORDS) {
        Intent::CompareCars
    } else if contains_any(text, DETAIL_KEYWORDS) {
        Intent::CarDetails
    } else if contains_any(text, RESET_KEYWORDS) {
        Intent::ResetFilters
    } else if contains_any(text, CONFIRM_KEYWORDS) {
        Intent::Confirm
    } else if contains_any(text, DENY_KEYWORDS) {
        Intent::Deny
    } else if has_entities {
        Intent::SpecifyFilters
    } else {
        Intent::Unknown
    }
}
