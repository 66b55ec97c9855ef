//! The structured result of parsing one utterance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::{
    Color, Condition, DriveType, Feature, FuelType, Transmission, VehicleType,
};

use super::intent::Intent;

/// An open numeric interval extracted for price, year or mileage.
///
/// Either bound may be absent. Bounds are carried as raw numbers; the
/// reconciler is responsible for dropping non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NumericRange {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<f64>,
}

impl NumericRange {
    /// Range bounded only from above.
    pub fn max_only(value: f64) -> Self {
        Self {
            min: None,
            max: Some(value),
        }
    }

    /// Range bounded only from below.
    pub fn min_only(value: f64) -> Self {
        Self {
            min: Some(value),
            max: None,
        }
    }

    /// Range bounded on both sides.
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Everything recognized in a single utterance, one field per category.
///
/// List fields are deduplicated in first-seen scan order. Features map to
/// `true` when mentioned and are omitted otherwise, never set to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEntities {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub makes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub vehicle_types: Vec<VehicleType>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conditions: Vec<Condition>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fuel_types: Vec<FuelType>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub transmissions: Vec<Transmission>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub drive_types: Vec<DriveType>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub colors: Vec<Color>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub features: BTreeMap<Feature, bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_range: Option<NumericRange>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year_range: Option<NumericRange>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mileage_range: Option<NumericRange>,
}

impl ExtractedEntities {
    /// True when no category matched at all.
    pub fn is_empty(&self) -> bool {
        self.populated_categories() == 0
    }

    /// Number of populated categories, regardless of how many values each
    /// holds. Drives the confidence score.
    pub fn populated_categories(&self) -> usize {
        let mut count = 0;
        count += usize::from(!self.makes.is_empty());
        count += usize::from(!self.vehicle_types.is_empty());
        count += usize::from(!self.conditions.is_empty());
        count += usize::from(!self.fuel_types.is_empty());
        count += usize::from(!self.transmissions.is_empty());
        count += usize::from(!self.drive_types.is_empty());
        count += usize::from(!self.colors.is_empty());
        count += usize::from(!self.features.is_empty());
        count += usize::from(self.price_range.is_some());
        count += usize::from(self.year_range.is_some());
        count += usize::from(self.mileage_range.is_some());
        count
    }
}

/// One parsed utterance: intent, entities and a confidence score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCommand {
    pub intent: Intent,
    pub entities: ExtractedEntities,
    pub confidence: f64,
}
