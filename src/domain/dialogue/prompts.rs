//! Spoken line builders.
//!
//! Pure string construction; the controller decides which lines to speak and
//! the application layer decides when. The clarifying question follows a
//! fixed priority checklist over the accumulated filters.

use crate::domain::extraction::ExtractedEntities;
use crate::domain::filters::CarFilters;

/// A clarifying question plus whether it is the wrap-up question that moves
/// the session into its confirming step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarifyingQuestion {
    pub text: String,
    pub is_wrap_up: bool,
}

pub fn greeting() -> String {
    "Hi! I can help you find your next car. What are you looking for?".to_string()
}

pub fn confirm_acknowledgement() -> String {
    "Great, let me pull up the matching cars for you.".to_string()
}

pub fn deny_prompt() -> String {
    "No problem, tell me what you'd like instead.".to_string()
}

pub fn reset_acknowledgement() -> String {
    "Okay, starting fresh. What kind of car are you looking for?".to_string()
}

pub fn compare_prompt() -> String {
    "To compare cars, open two listings side by side. Which models should I look for first?"
        .to_string()
}

pub fn details_prompt() -> String {
    "I can show details once we've picked a car. Which one are you interested in?".to_string()
}

pub fn unknown_fallback() -> String {
    "Sorry, I didn't catch that. You can say things like \"find a used BMW under 30000 euros\" \
     or \"I'm looking for an automatic SUV\"."
        .to_string()
}

/// Echoes back what was understood in this turn, in a fixed category order:
/// makes, vehicle types, conditions, fuel types, transmissions, price
/// bound(s), features. Categories absent from the turn are omitted; a turn
/// with nothing echoable yields `None`.
pub fn echo(entities: &ExtractedEntities) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if !entities.makes.is_empty() {
        parts.push(entities.makes.join(", "));
    }
    if !entities.vehicle_types.is_empty() {
        parts.push(join_display(&entities.vehicle_types));
    }
    if !entities.conditions.is_empty() {
        parts.push(join_display(&entities.conditions));
    }
    if !entities.fuel_types.is_empty() {
        parts.push(join_display(&entities.fuel_types));
    }
    if !entities.transmissions.is_empty() {
        parts.push(join_display(&entities.transmissions));
    }
    if let Some(range) = &entities.price_range {
        match (range.min, range.max) {
            (Some(min), Some(max)) => {
                parts.push(format!("between €{} and €{}", format_amount(min), format_amount(max)))
            }
            (None, Some(max)) => parts.push(format!("up to €{}", format_amount(max))),
            (Some(min), None) => parts.push(format!("from €{}", format_amount(min))),
            (None, None) => {}
        }
    }
    if !entities.features.is_empty() {
        let features: Vec<String> = entities
            .features
            .keys()
            .map(|feature| feature.to_string())
            .collect();
        parts.push(format!("with {}", features.join(", ")));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("Got it: {}.", parts.join(", ")))
    }
}

/// Picks the next clarifying question from the priority checklist:
/// make, then budget, then body type, then transmission, then the generic
/// wrap-up.
pub fn next_question(filters: &CarFilters) -> ClarifyingQuestion {
    if !filters.has_make() {
        ClarifyingQuestion {
            text: "Which make would you like? For example BMW, Audi or Toyota.".to_string(),
            is_wrap_up: false,
        }
    } else if !filters.has_price_bound() {
        ClarifyingQuestion {
            text: "What's your budget?".to_string(),
            is_wrap_up: false,
        }
    } else if !filters.has_vehicle_type() {
        ClarifyingQuestion {
            text: "What body type do you prefer, for example an SUV, saloon or estate?"
                .to_string(),
            is_wrap_up: false,
        }
    } else if !filters.has_transmission() {
        ClarifyingQuestion {
            text: "Do you prefer automatic or manual transmission?".to_string(),
            is_wrap_up: false,
        }
    } else {
        ClarifyingQuestion {
            text: "Anything else, or should I search now?".to_string(),
            is_wrap_up: true,
        }
    }
}

fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
