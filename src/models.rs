//! Frontend Models
//!
//! Spot records and the closed option sets they are filtered by.

use serde::{Deserialize, Serialize};

/// Where the spot is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Indoor,
    Outdoor,
    PrivateSpace,
}

impl Location {
    pub const ALL: &'static [Location] = &[Location::Indoor, Location::Outdoor, Location::PrivateSpace];

    pub fn value(self) -> &'static str {
        match self {
            Location::Indoor => "indoor",
            Location::Outdoor => "outdoor",
            Location::PrivateSpace => "private-space",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Location::Indoor => "Indoor",
            Location::Outdoor => "Outdoor",
            Location::PrivateSpace => "Private Space",
        }
    }
}

/// Largest vehicle the spot fits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpotSize {
    Bike,
    CargoBike,
    Car,
    Caravan,
}

impl SpotSize {
    pub const ALL: &'static [SpotSize] = &[SpotSize::Bike, SpotSize::CargoBike, SpotSize::Car, SpotSize::Caravan];

    pub fn value(self) -> &'static str {
        match self {
            SpotSize::Bike => "bike",
            SpotSize::CargoBike => "cargo-bike",
            SpotSize::Car => "car",
            SpotSize::Caravan => "caravan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpotSize::Bike => "Bike",
            SpotSize::CargoBike => "Cargo Bike",
            SpotSize::Car => "Car",
            SpotSize::Caravan => "Caravan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    #[serde(rename = "electric-charging-available")]
    ElectricCharging,
    #[serde(rename = "24-7-available")]
    AlwaysOpen,
    #[serde(rename = "power-socket")]
    PowerSocket,
}

impl Amenity {
    pub const ALL: &'static [Amenity] = &[Amenity::ElectricCharging, Amenity::AlwaysOpen, Amenity::PowerSocket];

    pub fn value(self) -> &'static str {
        match self {
            Amenity::ElectricCharging => "electric-charging-available",
            Amenity::AlwaysOpen => "24-7-available",
            Amenity::PowerSocket => "power-socket",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Amenity::ElectricCharging => "Electric Charging Available",
            Amenity::AlwaysOpen => "24/7 available",
            Amenity::PowerSocket => "Power Socket",
        }
    }
}

/// Parking spot listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Already formatted for display, e.g. "€45 / month"
    pub price: String,
    pub city: String,
    pub location: Location,
    pub size: SpotSize,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    pub image_src: String,
    pub image_alt: String,
}

impl Spot {
    pub fn href(&self) -> String {
        format!("/spots/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_values_match_value() {
        for location in Location::ALL {
            let json = serde_json::to_string(location).unwrap();
            assert_eq!(json, format!("\"{}\"", location.value()));
        }
        for size in SpotSize::ALL {
            let json = serde_json::to_string(size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.value()));
        }
        for amenity in Amenity::ALL {
            let json = serde_json::to_string(amenity).unwrap();
            assert_eq!(json, format!("\"{}\"", amenity.value()));
        }
    }

    #[test]
    fn test_spot_amenities_default_to_empty() {
        let spot: Spot = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Garage",
                "description": "Dry and safe",
                "price": "€80 / month",
                "city": "Munich",
                "location": "private-space",
                "size": "cargo-bike",
                "image_src": "/spots/7.jpg",
                "image_alt": "Garage door"
            }"#,
        )
        .unwrap();

        assert_eq!(spot.location, Location::PrivateSpace);
        assert_eq!(spot.size, SpotSize::CargoBike);
        assert!(spot.amenities.is_empty());
        assert_eq!(spot.href(), "/spots/7");
    }
}
