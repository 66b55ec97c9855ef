//! Canonical value enums for the closed vocabulary categories.
//!
//! Serde renames preserve the external wire shape used by the storefront
//! (`small-car`, `sports-coupe`, `heatedSeats`, ...). `Display` produces the
//! human-readable label used when the assistant echoes criteria back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body style of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    Cabriolet,
    Suv,
    SmallCar,
    Van,
    Estate,
    Saloon,
    SportsCoupe,
    Other,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Cabriolet => "cabriolet",
            VehicleType::Suv => "SUV",
            VehicleType::SmallCar => "small car",
            VehicleType::Van => "van",
            VehicleType::Estate => "estate",
            VehicleType::Saloon => "saloon",
            VehicleType::SportsCoupe => "sports coupe",
            VehicleType::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Sale condition of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    Used,
    Demonstration,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Demonstration => "demonstration",
        };
        write!(f, "{}", label)
    }
}

/// Fuel type of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
    PlugInHybrid,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::PlugInHybrid => "plug-in hybrid",
        };
        write!(f, "{}", label)
    }
}

/// Gearbox type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Transmission::Automatic => "automatic",
            Transmission::Manual => "manual",
        };
        write!(f, "{}", label)
    }
}

/// Drivetrain layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveType {
    #[serde(rename = "awd")]
    AllWheel,
    #[serde(rename = "fwd")]
    FrontWheel,
    #[serde(rename = "rwd")]
    RearWheel,
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DriveType::AllWheel => "all-wheel drive",
            DriveType::FrontWheel => "front-wheel drive",
            DriveType::RearWheel => "rear-wheel drive",
        };
        write!(f, "{}", label)
    }
}

/// Exterior color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Silver,
    Grey,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Brown,
    Beige,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Silver => "silver",
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Brown => "brown",
            Color::Beige => "beige",
        };
        write!(f, "{}", label)
    }
}

/// Boolean equipment feature a user can ask for.
///
/// `Ord` is derived so feature maps iterate in a stable order when the
/// assistant lists them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    HeatedSeats,
    Sunroof,
    Navigation,
    LeatherSeats,
    ParkingSensors,
    RearCamera,
    CruiseControl,
    Bluetooth,
    AppleCarplay,
    TowBar,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Feature::HeatedSeats => "heated seats",
            Feature::Sunroof => "sunroof",
            Feature::Navigation => "navigation",
            Feature::LeatherSeats => "leather seats",
            Feature::ParkingSensors => "parking sensors",
            Feature::RearCamera => "rear camera",
            Feature::CruiseControl => "cruise control",
            Feature::Bluetooth => "bluetooth",
            Feature::AppleCarplay => "apple carplay",
            Feature::TowBar => "tow bar",
        };
        write!(f, "{}", label)
    }
}
