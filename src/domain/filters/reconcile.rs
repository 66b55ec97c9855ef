//! Folding newly extracted entities into the session filter state.

use crate::domain::extraction::ExtractedEntities;

use super::car_filters::CarFilters;

/// Merges one turn's entities into the existing filter state, returning a
/// new state without mutating either input.
///
/// Rules, applied independently per field:
/// - list categories are concatenated, with no deduplication at merge time
///   (within-turn dedup already happened in extraction; repeated mentions
///   across turns accumulate);
/// - each mentioned feature flag is set to `true`, unmentioned flags keep
///   their previous value;
/// - each present, finite range bound overwrites its scalar field, the other
///   bound is left alone. Non-finite bounds (a malformed capture parsed to
///   NaN) are treated as absent.
pub fn reconcile(entities: &ExtractedEntities, current: &CarFilters) -> CarFilters {
    let mut next = current.clone();

    next.makes.extend(entities.makes.iter().cloned());
    next.vehicle_types.extend(&entities.vehicle_types);
    next.conditions.extend(&entities.conditions);
    next.fuel_types.extend(&entities.fuel_types);
    next.transmissions.extend(&entities.transmissions);
    next.drive_types.extend(&entities.drive_types);
    next.exterior_colors.extend(&entities.colors);

    for (&feature, &flag) in &entities.features {
        next.features.insert(feature, flag);
    }

    if let Some(range) = entities.price_range {
        if let Some(min) = finite(range.min) {
            next.price_min = Some(min);
        }
        if let Some(max) = finite(range.max) {
            next.price_max = Some(max);
        }
    }
    if let Some(range) = entities.year_range {
        if let Some(min) = finite(range.min) {
            next.year_min = Some(min as i32);
        }
        if let Some(max) = finite(range.max) {
            next.year_max = Some(max as i32);
        }
    }
    if let Some(range) = entities.mileage_range {
        if let Some(min) = finite(range.min) {
            next.mileage_min = Some(min);
        }
        if let Some(max) = finite(range.max) {
            next.mileage_max = Some(max);
        }
    }

    next
}

fn finite(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| value.is_finite())
}
