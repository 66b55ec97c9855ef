//! Ordered keyword tables, loaded once and immutable thereafter.
//!
//! Each table maps a surface keyword to its canonical value. Matching is
//! plain substring containment over the normalized utterance, with no
//! word-boundary anchoring: "van" matches inside "caravan". That imprecision
//! is a documented property of the matcher, kept as-is.

use super::categories::{
    Color, Condition, DriveType, Feature, FuelType, Transmission, VehicleType,
};

/// Make keywords mapped to canonical brand names.
pub static MAKE_KEYWORDS: &[(&str, &str)] = &[
    ("bmw", "BMW"),
    ("mercedes", "Mercedes-Benz"),
    ("benz", "Mercedes-Benz"),
    ("audi", "Audi"),
    ("volkswagen", "Volkswagen"),
    ("vw", "Volkswagen"),
    ("porsche", "Porsche"),
    ("opel", "Opel"),
    ("ford", "Ford"),
    ("toyota", "Toyota"),
    ("skoda", "Skoda"),
    ("renault", "Renault"),
    ("peugeot", "Peugeot"),
    ("volvo", "Volvo"),
    ("tesla", "Tesla"),
    ("hyundai", "Hyundai"),
    ("kia", "Kia"),
    ("fiat", "Fiat"),
];

/// Body style keywords. "sedan" and "saloon" alias to the same canonical.
pub static VEHICLE_TYPE_KEYWORDS: &[(&str, VehicleType)] = &[
    ("cabriolet", VehicleType::Cabriolet),
    ("convertible", VehicleType::Cabriolet),
    ("suv", VehicleType::Suv),
    ("hatchback", VehicleType::SmallCar),
    ("small car", VehicleType::SmallCar),
    ("compact", VehicleType::SmallCar),
    ("city car", VehicleType::SmallCar),
    ("minivan", VehicleType::Van),
    ("van", VehicleType::Van),
    ("estate", VehicleType::Estate),
    ("wagon", VehicleType::Estate),
    ("kombi", VehicleType::Estate),
    ("saloon", VehicleType::Saloon),
    ("sedan", VehicleType::Saloon),
    ("sports car", VehicleType::SportsCoupe),
    ("coupe", VehicleType::SportsCoupe),
];

/// Sale condition keywords.
pub static CONDITION_KEYWORDS: &[(&str, Condition)] = &[
    ("new", Condition::New),
    ("used", Condition::Used),
    ("pre-owned", Condition::Used),
    ("second hand", Condition::Used),
    ("second-hand", Condition::Used),
    ("demonstration", Condition::Demonstration),
    ("demo", Condition::Demonstration),
];

/// Fuel type keywords.
pub static FUEL_TYPE_KEYWORDS: &[(&str, FuelType)] = &[
    ("plug-in hybrid", FuelType::PlugInHybrid),
    ("plugin hybrid", FuelType::PlugInHybrid),
    ("hybrid", FuelType::Hybrid),
    ("petrol", FuelType::Petrol),
    ("gasoline", FuelType::Petrol),
    ("diesel", FuelType::Diesel),
    ("electric", FuelType::Electric),
];

/// Gearbox keywords.
pub static TRANSMISSION_KEYWORDS: &[(&str, Transmission)] = &[
    ("automatic", Transmission::Automatic),
    ("auto", Transmission::Automatic),
    ("manual", Transmission::Manual),
    ("stick shift", Transmission::Manual),
];

/// Drivetrain keywords.
pub static DRIVE_TYPE_KEYWORDS: &[(&str, DriveType)] = &[
    ("all-wheel", DriveType::AllWheel),
    ("all wheel", DriveType::AllWheel),
    ("awd", DriveType::AllWheel),
    ("4wd", DriveType::AllWheel),
    ("four-wheel", DriveType::AllWheel),
    ("front-wheel", DriveType::FrontWheel),
    ("fwd", DriveType::FrontWheel),
    ("rear-wheel", DriveType::RearWheel),
    ("rwd", DriveType::RearWheel),
];

/// Equipment feature keywords.
pub static FEATURE_KEYWORDS: &[(&str, Feature)] = &[
    ("heated seats", Feature::HeatedSeats),
    ("seat heating", Feature::HeatedSeats),
    ("sunroof", Feature::Sunroof),
    ("panoramic roof", Feature::Sunroof),
    ("navigation", Feature::Navigation),
    ("sat nav", Feature::Navigation),
    ("gps", Feature::Navigation),
    ("leather", Feature::LeatherSeats),
    ("parking sensors", Feature::ParkingSensors),
    ("park assist", Feature::ParkingSensors),
    ("rear camera", Feature::RearCamera),
    ("reversing camera", Feature::RearCamera),
    ("backup camera", Feature::RearCamera),
    ("cruise control", Feature::CruiseControl),
    ("bluetooth", Feature::Bluetooth),
    ("carplay", Feature::AppleCarplay),
    ("tow bar", Feature::TowBar),
    ("towbar", Feature::TowBar),
];

/// Exterior color keywords.
pub static COLOR_KEYWORDS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("white", Color::White),
    ("silver", Color::Silver),
    ("grey", Color::Grey),
    ("gray", Color::Grey),
    ("red", Color::Red),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("orange", Color::Orange),
    ("brown", Color::Brown),
    ("beige", Color::Beige),
];

/// Scans one table in definition order against a normalized utterance.
///
/// Every keyword occurring as a substring appends its canonical value;
/// duplicates are dropped while keeping first-seen order.
pub fn scan_keywords<T: Copy + PartialEq>(text: &str, table: &[(&str, T)]) -> Vec<T> {
    let mut found = Vec::new();
    for (keyword, canonical) in table {
        if text.contains(keyword) && !found.contains(canonical) {
            found.push(*canonical);
        }
    }
    found
}
