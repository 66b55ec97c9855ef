//! The turn-spanning filter state for one voice session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::{
    Color, Condition, DriveType, Feature, FuelType, Transmission, VehicleType,
};

/// Every search criterion collected so far in a session.
///
/// List fields grow monotonically across turns (only an explicit reset clears
/// them); scalar bounds and feature flags are last-write-wins. Serialization
/// uses the storefront's camelCase field names (`priceMax`, `exteriorColors`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CarFilters {
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
    pub exterior_colors: Vec<Color>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub features: BTreeMap<Feature, bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year_max: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mileage_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mileage_max: Option<f64>,
}

impl CarFilters {
    /// True when no criterion has been collected yet.
    pub fn is_empty(&self) -> bool {
        self == &CarFilters::default()
    }

    /// True once at least one make is collected.
    pub fn has_make(&self) -> bool {
        !self.makes.is_empty()
    }

    /// True once either price bound is collected.
    pub fn has_price_bound(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// True once at least one body style is collected.
    pub fn has_vehicle_type(&self) -> bool {
        !self.vehicle_types.is_empty()
    }

    /// True once a gearbox preference is collected.
    pub fn has_transmission(&self) -> bool {
        !self.transmissions.is_empty()
    }
}
