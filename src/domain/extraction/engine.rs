//! The extraction engine: one normalized utterance in, one command out.

use crate::domain::lexicon::{
    scan_keywords, COLOR_KEYWORDS, CONDITION_KEYWORDS, DRIVE_TYPE_KEYWORDS, FEATURE_KEYWORDS,
    FUEL_TYPE_KEYWORDS, MAKE_KEYWORDS, TRANSMISSION_KEYWORDS, VEHICLE_TYPE_KEYWORDS,
};

use super::command::{ExtractedCommand, ExtractedEntities};
use super::{intent, numeric};

const BASE_CONFIDENCE: f64 = 0.5;
const PER_CATEGORY_CONFIDENCE: f64 = 0.1;
const BOOSTER_CONFIDENCE: f64 = 0.2;

/// Phrases that signal the user is deliberately driving a search. The bonus
/// applies at most once no matter how many boosters occur.
const CONFIDENCE_BOOSTERS: &[&str] = &["find", "search", "looking for", "want", "need", "show me"];

/// Parses a free-text utterance into intent, entities and confidence.
///
/// Never fails: unrecognized input yields empty entities and
/// `Intent::Unknown`.
pub fn parse(utterance: &str) -> ExtractedCommand {
    let text = utterance.trim().to_lowercase();

    let entities = ExtractedEntities {
        makes: scan_keywords(&text, MAKE_KEYWORDS)
            .into_iter()
            .map(String::from)
            .collect(),
        vehicle_types: scan_keywords(&text, VEHICLE_TYPE_KEYWORDS),
        conditions: scan_keywords(&text, CONDITION_KEYWORDS),
        fuel_types: scan_keywords(&text, FUEL_TYPE_KEYWORDS),
        transmissions: scan_keywords(&text, TRANSMISSION_KEYWORDS),
        drive_types: scan_keywords(&text, DRIVE_TYPE_KEYWORDS),
        colors: scan_keywords(&text, COLOR_KEYWORDS),
        features: scan_keywords(&text, FEATURE_KEYWORDS)
            .into_iter()
            .map(|feature| (feature, true))
            .collect(),
        price_range: numeric::extract_price(&text),
        year_range: numeric::extract_year(&text),
        mileage_range: numeric::extract_mileage(&text),
    };

    let intent = intent::classify(&text, !entities.is_empty());
    let confidence = confidence_for(&text, &entities);

    ExtractedCommand {
        intent,
        entities,
        confidence,
    }
}

fn confidence_for(text: &str, entities: &ExtractedEntities) -> f64 {
    let mut score =
        BASE_CONFIDENCE + PER_CATEGORY_CONFIDENCE * entities.populated_categories() as f64;
    if CONFIDENCE_BOOSTERS
        .iter()
        .any(|booster| text.contains(booster))
    {
        score += BOOSTER_CONFIDENCE;
    }
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::extraction::{Intent, NumericRange};
    use crate::domain::lexicon::{Condition, Feature, Transmission, VehicleType};

    use super::*;

    mod entities {
        use super::*;

        #[test]
        fn recognizes_a_fully_loaded_utterance() {
            let command = parse("I need a used BMW SUV under 40000 euros with heated seats");

            assert_eq!(command.entities.makes, vec!["BMW"]);
            assert_eq!(command.entities.vehicle_types, vec![VehicleType::Suv]);
            assert_eq!(command.entities.conditions, vec![Condition::Used]);
            assert_eq!(
                command.entities.price_range,
                Some(NumericRange::max_only(40_000.0))
            );
            assert_eq!(
                command.entities.features.get(&Feature::HeatedSeats),
                Some(&true)
            );
            assert_eq!(command.intent, Intent::SpecifyFilters);
        }

        #[test]
        fn sedan_and_saloon_canonicalize_identically() {
            let sedan = parse("I want a sedan");
            let saloon = parse("I want a saloon");
            assert_eq!(sedan.entities.vehicle_types, vec![VehicleType::Saloon]);
            assert_eq!(saloon.entities.vehicle_types, sedan.entities.vehicle_types);
        }

        #[test]
        fn input_is_case_insensitive() {
            let command = parse("  An AUTOMATIC Bmw  ");
            assert_eq!(command.entities.makes, vec!["BMW"]);
            assert_eq!(
                command.entities.transmissions,
                vec![Transmission::Automatic]
            );
        }

        #[test]
        fn unmentioned_features_are_absent_not_false() {
            let command = parse("a car with a sunroof");
            assert_eq!(command.entities.features.get(&Feature::Sunroof), Some(&true));
            assert!(!command.entities.features.contains_key(&Feature::HeatedSeats));
        }

        #[test]
        fn between_range_is_parsed() {
            let command = parse("between 20000 and 50000");
            assert_eq!(
                command.entities.price_range,
                Some(NumericRange::between(20_000.0, 50_000.0))
            );
        }

        #[test]
        fn empty_utterance_yields_nothing() {
            let command = parse("   ");
            assert!(command.entities.is_empty());
            assert_eq!(command.intent, Intent::Unknown);
        }
    }

    mod intents {
        use super::*;

        #[test]
        fn confirm_beats_entity_fallback() {
            let command = parse("yes, show me BMWs");
            assert_eq!(command.intent, Intent::Confirm);
            // The make was still extracted even though the intent is confirm.
            assert_eq!(command.entities.makes, vec!["BMW"]);
        }

        #[test]
        fn search_keyword_beats_confirm() {
            let command = parse("find a BMW and yes I'm sure");
            assert_eq!(command.intent, Intent::SearchCars);
        }

        #[test]
        fn gibberish_is_unknown() {
            assert_eq!(parse("flibber jabber").intent, Intent::Unknown);
        }

        #[test]
        fn bare_transmission_specifies_filters() {
            let command = parse("automatic");
            assert_eq!(command.intent, Intent::SpecifyFilters);
            assert_eq!(
                command.entities.transmissions,
                vec![Transmission::Automatic]
            );
        }
    }

    mod confidence {
        use super::*;

        #[test]
        fn booster_raises_the_score() {
            let plain = parse("a used bmw suv");
            let boosted = parse("show me a used bmw suv");
            assert!(boosted.confidence > plain.confidence);
        }

        #[test]
        fn booster_applies_at_most_once() {
            let single = parse("show me a bmw");
            let double = parse("find me a bmw, i want one, i need one");
            // Same populated categories, both boosted: identical scores.
            assert_eq!(single.confidence, double.confidence);
        }

        #[test]
        fn three_categories_with_booster_scores_one() {
            let command = parse("find a used bmw suv");
            // 0.5 base + 3 * 0.1 + 0.2 booster.
            assert!((command.confidence - 1.0).abs() < 1e-9);
        }

        #[test]
        fn score_is_clamped_to_one() {
            let command =
                parse("find a used automatic diesel bmw suv in black with awd under 30000 euros");
            assert_eq!(command.confidence, 1.0);
        }

        proptest! {
            #[test]
            fn confidence_is_always_within_bounds(utterance in "\\PC*") {
                let command = parse(&utterance);
                prop_assert!((0.0..=1.0).contains(&command.confidence));
            }

            #[test]
            fn parse_never_panics(utterance in ".*") {
                let _ = parse(&utterance);
            }
        }
    }
}
