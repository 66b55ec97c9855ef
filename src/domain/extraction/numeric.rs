//! Numeric range extraction for price, year and mileage.
//!
//! Each domain runs an ordered pattern list, most-specific first; the first
//! matching pattern wins and later ones are not tried. The bounding direction
//! is then decided by re-scanning the whole utterance for direction keywords,
//! not just the matched span. A bare number with no direction keyword
//! defaults to a maximum for price and mileage but a minimum for year; that
//! asymmetry is deliberate and load-bearing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::command::NumericRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundKind {
    Min,
    Max,
}

// Direction keywords for the whole-utterance re-scan. The max group is
// checked first, so "a minivan under 30000" reads as an upper bound even
// though "min" occurs inside "minivan".
const MAX_DIRECTION_WORDS: &[&str] = &["under", "less than", "below", "max", "maximum"];
const MIN_DIRECTION_WORDS: &[&str] = &["over", "more than", "above", "min", "minimum"];

static PRICE_UNDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|less than|below)\s+[€$]?\s*([0-9][0-9,]*)").expect("valid regex")
});
static PRICE_OVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:over|more than|above)\s+[€$]?\s*([0-9][0-9,]*)").expect("valid regex")
});
static PRICE_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"between\s+[€$]?\s*([0-9][0-9,]*)\s+(?:and|to)\s+[€$]?\s*([0-9][0-9,]*)")
        .expect("valid regex")
});
static BARE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9][0-9,]*").expect("valid regex"));

static YEAR_UNDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|less than|below)\s+((?:19|20)\d\d)\b").expect("valid regex")
});
static YEAR_OVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:over|more than|above)\s+((?:19|20)\d\d)\b").expect("valid regex")
});
static YEAR_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"between\s+((?:19|20)\d\d)\s+(?:and|to)\s+((?:19|20)\d\d)\b").expect("valid regex")
});
static YEAR_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b((?:19|20)\d\d)\b").expect("valid regex"));

const DISTANCE_UNIT: &str = r"(?:km|kilometers|kilometres|miles)";

static MILEAGE_UNDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:under|less than|below)\s+([0-9][0-9,]*)\s*{DISTANCE_UNIT}\b"
    ))
    .expect("valid regex")
});
static MILEAGE_OVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:over|more than|above)\s+([0-9][0-9,]*)\s*{DISTANCE_UNIT}\b"
    ))
    .expect("valid regex")
});
static MILEAGE_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"between\s+([0-9][0-9,]*)\s+(?:and|to)\s+([0-9][0-9,]*)\s*{DISTANCE_UNIT}\b"
    ))
    .expect("valid regex")
});
static MILEAGE_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([0-9][0-9,]*)\s*{DISTANCE_UNIT}\b")).expect("valid regex")
});

/// Parses a captured number after stripping thousands-separator commas.
///
/// A malformed capture yields NaN rather than an error; the reconciler drops
/// non-finite bounds before merging.
fn parse_number(raw: &str) -> f64 {
    raw.replace(',', "").parse().unwrap_or(f64::NAN)
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn scan_direction(text: &str) -> Option<BoundKind> {
    if contains_any(text, MAX_DIRECTION_WORDS) {
        Some(BoundKind::Max)
    } else if contains_any(text, MIN_DIRECTION_WORDS) {
        Some(BoundKind::Min)
    } else {
        None
    }
}

fn bounded(text: &str, value: f64, bare_default: BoundKind) -> NumericRange {
    match scan_direction(text).unwrap_or(bare_default) {
        BoundKind::Max => NumericRange::max_only(value),
        BoundKind::Min => NumericRange::min_only(value),
    }
}

/// True when a distance unit directly follows the matched number, meaning
/// the number belongs to the mileage extractor.
fn distance_unit_follows(text: &str, end: usize) -> bool {
    let rest = text[end..].trim_start();
    ["km", "kilometer", "kilometre", "mile"]
        .iter()
        .any(|unit| rest.starts_with(unit))
}

/// Whole numbers in the model-year window are not treated as prices unless a
/// currency marker says otherwise.
fn looks_like_year(value: f64) -> bool {
    value.fract() == 0.0 && (1900.0..=2099.0).contains(&value)
}

fn has_currency_marker(text: &str) -> bool {
    ["€", "$", "euro", "price", "budget", "cost", "pay"]
        .iter()
        .any(|marker| text.contains(marker))
}

/// Extracts a price range from a normalized utterance.
pub fn extract_price(text: &str) -> Option<NumericRange> {
    for re in [&*PRICE_UNDER, &*PRICE_OVER] {
        if let Some(caps) = re.captures(text) {
            let m = caps.get(1).expect("pattern has one capture group");
            if distance_unit_follows(text, m.end()) {
                continue;
            }
            return Some(bounded(text, parse_number(m.as_str()), BoundKind::Max));
        }
    }
    if let Some(caps) = PRICE_BETWEEN.captures(text) {
        let low = caps.get(1).expect("pattern has two capture groups");
        let high = caps.get(2).expect("pattern has two capture groups");
        let (low_value, high_value) = (parse_number(low.as_str()), parse_number(high.as_str()));
        let both_year_like = looks_like_year(low_value) && looks_like_year(high_value);
        if !distance_unit_follows(text, high.end())
            && (!both_year_like || has_currency_marker(text))
        {
            return Some(NumericRange::between(low_value, high_value));
        }
    }
    for m in BARE_NUMBER.find_iter(text) {
        if distance_unit_follows(text, m.end()) {
            continue;
        }
        let value = parse_number(m.as_str());
        if looks_like_year(value) && !has_currency_marker(text) {
            continue;
        }
        return Some(bounded(text, value, BoundKind::Max));
    }
    None
}

/// Extracts a model-year range from a normalized utterance.
pub fn extract_year(text: &str) -> Option<NumericRange> {
    for re in [&*YEAR_UNDER, &*YEAR_OVER] {
        if let Some(caps) = re.captures(text) {
            let m = caps.get(1).expect("pattern has one capture group");
            return Some(bounded(text, parse_number(m.as_str()), BoundKind::Min));
        }
    }
    if let Some(caps) = YEAR_BETWEEN.captures(text) {
        let low = parse_number(&caps[1]);
        let high = parse_number(&caps[2]);
        return Some(NumericRange::between(low, high));
    }
    if let Some(caps) = YEAR_BARE.captures(text) {
        let m = caps.get(1).expect("pattern has one capture group");
        return Some(bounded(text, parse_number(m.as_str()), BoundKind::Min));
    }
    None
}

/// Extracts a mileage range from a normalized utterance. Every pattern
/// requires a distance unit next to the number; without one the number is
/// left for the price or year extractors.
pub fn extract_mileage(text: &str) -> Option<NumericRange> {
    for re in [&*MILEAGE_UNDER, &*MILEAGE_OVER] {
        if let Some(caps) = re.captures(text) {
            let m = caps.get(1).expect("pattern has one capture group");
            return Some(bounded(text, parse_number(m.as_str()), BoundKind::Max));
        }
    }
    if let Some(caps) = MILEAGE_BETWEEN.captures(text) {
        let low = parse_number(&caps[1]);
        let high = parse_number(&caps[2]);
        return Some(NumericRange::between(low, high));
    }
    if let Some(caps) = MILEAGE_BARE.captures(text) {
        let m = caps.get(1).expect("pattern has one capture group");
        return Some(bounded(text, parse_number(m.as_str()), BoundKind::Max));
    }
    None
}
