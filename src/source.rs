//! Spot Source
//!
//! Where the listing comes from. The page only sees the trait, so the
//! embedded listing can later be swapped for a backend.

use crate::error::{ListingError, ListingResult};
use crate::models::Spot;

/// Embedded listing shipped with the build
const PARKING_SPOTS_JSON: &str = include_str!("../data/parking_spots.json");

/// Produces the ordered listing
pub trait SpotSource: Send + Sync {
    /// All spots in display order
    fn spots(&self) -> Vec<Spot>;

    /// Look up a single spot by id
    fn find(&self, id: u32) -> ListingResult<Spot> {
        self.spots()
            .into_iter()
            .find(|spot| spot.id == id)
            .ok_or(ListingError::SpotNotFound(id))
    }
}

/// Fixed, immutable listing
#[derive(Debug, Clone, Default)]
pub struct StaticSpotSource {
    spots: Vec<Spot>,
}

impl StaticSpotSource {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self { spots }
    }

    /// Parse a JSON array of spots
    pub fn from_json(json: &str) -> ListingResult<Self> {
        let spots: Vec<Spot> = serde_json::from_str(json)?;
        Ok(Self::new(spots))
    }

    /// The listing bundled in `data/parking_spots.json`
    pub fn embedded() -> ListingResult<Self> {
        Self::from_json(PARKING_SPOTS_JSON)
    }
}

impl SpotSource for StaticSpotSource {
    fn spots(&self) -> Vec<Spot> {
        self.spots.clone()
    }

    fn find(&self, id: u32) -> ListingResult<Spot> {
        self.spots
            .iter()
            .find(|spot| spot.id == id)
            .cloned()
            .ok_or(ListingError::SpotNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_listing_parses() {
        let source = StaticSpotSource::embedded().unwrap();
        let spots = source.spots();
        assert!(!spots.is_empty());

        let ids: HashSet<u32> = spots.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), spots.len(), "spot ids must be unique");
    }

    #[test]
    fn test_find() {
        let source = StaticSpotSource::embedded().unwrap();
        let first = source.spots()[0].clone();
        assert_eq!(source.find(first.id), Ok(first));
        assert_eq!(source.find(9999), Err(ListingError::SpotNotFound(9999)));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = StaticSpotSource::from_json(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(err, ListingError::InvalidData(_)));
    }

    #[test]
    fn test_spots_keep_order() {
        let source = StaticSpotSource::from_json("[]").unwrap();
        assert!(source.spots().is_empty());

        let source = StaticSpotSource::embedded().unwrap();
        let ids: Vec<u32> = source.spots().iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
