//! Static keyword tables and canonical vocabulary.
//!
//! Every category maps surface keywords (what a user might actually say) to
//! canonical values. Tables are ordered slices, never hash maps: scan order,
//! first-seen deduplication and intent priority all depend on a stable,
//! deterministic iteration order.

mod categories;
mod tables;

pub use categories::{
    Color, Condition, DriveType, Feature, FuelType, Transmission, VehicleType,
};
pub use tables::{
    scan_keywords, COLOR_KEYWORDS, CONDITION_KEYWORDS, DRIVE_TYPE_KEYWORDS, FEATURE_KEYWORDS,
    FUEL_TYPE_KEYWORDS, MAKE_KEYWORDS, TRANSMISSION_KEYWORDS, VEHICLE_TYPE_KEYWORDS,
};
