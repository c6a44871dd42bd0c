//! Result Projector
//!
//! Computes the visible spots from the listing and the filter state.
//! Always a full pass over the listing; the list is small.

use crate::filters::FilterState;
use crate::models::Spot;

/// Whether the amenities section constrains results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmenityPolicy {
    /// Amenity selections are recorded but do not filter
    #[default]
    Ignore,
    /// Keep spots offering at least one selected amenity
    MatchAny,
}

impl AmenityPolicy {
    pub fn from_flag(filter_amenities: bool) -> Self {
        if filter_amenities {
            AmenityPolicy::MatchAny
        } else {
            AmenityPolicy::Ignore
        }
    }
}

fn matches(spot: &Spot, filters: &FilterState, policy: AmenityPolicy) -> bool {
    if !filters.location.is_empty() && !filters.location.contains(&spot.location) {
        return false;
    }
    if !filters.size.is_empty() && !filters.size.contains(&spot.size) {
        return false;
    }
    match policy {
        AmenityPolicy::Ignore => true,
        AmenityPolicy::MatchAny => {
            filters.amenities.is_empty()
                || spot.amenities.iter().any(|a| filters.amenities.contains(a))
        }
    }
}

/// Spots passing every active category, in listing order
pub fn project(spots: &[Spot], filters: &FilterState, policy: AmenityPolicy) -> Vec<Spot> {
    spots
        .iter()
        .filter(|spot| matches(spot, filters, policy))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterOption, FILTER_SECTIONS};
    use crate::models::{Amenity, Location, SpotSize};

    fn make_spot(id: u32, location: Location, size: SpotSize, amenities: Vec<Amenity>) -> Spot {
        Spot {
            id,
            name: format!("Spot {}", id),
            description: String::new(),
            price: "€10 / day".to_string(),
            city: "Berlin".to_string(),
            location,
            size,
            amenities,
            image_src: String::new(),
            image_alt: String::new(),
        }
    }

    fn scenario() -> Vec<Spot> {
        vec![
            make_spot(1, Location::Indoor, SpotSize::Bike, vec![]),
            make_spot(2, Location::Outdoor, SpotSize::Car, vec![Amenity::PowerSocket]),
            make_spot(3, Location::Indoor, SpotSize::Car, vec![Amenity::ElectricCharging]),
        ]
    }

    fn mixed() -> Vec<Spot> {
        let mut spots = scenario();
        spots.push(make_spot(4, Location::PrivateSpace, SpotSize::Caravan, vec![Amenity::AlwaysOpen]));
        spots.push(make_spot(5, Location::Outdoor, SpotSize::CargoBike, vec![]));
        spots.push(make_spot(6, Location::PrivateSpace, SpotSize::Car, vec![Amenity::PowerSocket]));
        spots
    }

    fn ids(spots: &[Spot]) -> Vec<u32> {
        spots.iter().map(|s| s.id).collect()
    }

    fn all_options() -> Vec<FilterOption> {
        FILTER_SECTIONS.iter().flat_map(|s| s.options.iter().copied()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let spots = mixed();
        for policy in [AmenityPolicy::Ignore, AmenityPolicy::MatchAny] {
            assert_eq!(project(&spots, &FilterState::new(), policy), spots);
        }
    }

    #[test]
    fn test_toggle_scenario() {
        let spots = scenario();
        let mut state = FilterState::new();

        state.toggle(FilterOption::Location(Location::Indoor));
        assert_eq!(ids(&project(&spots, &state, AmenityPolicy::Ignore)), vec![1, 3]);

        state.toggle(FilterOption::Size(SpotSize::Car));
        assert_eq!(ids(&project(&spots, &state, AmenityPolicy::Ignore)), vec![3]);

        state.toggle(FilterOption::Location(Location::Indoor));
        assert_eq!(ids(&project(&spots, &state, AmenityPolicy::Ignore)), vec![2, 3]);
    }

    #[test]
    fn test_toggle_twice_restores_result() {
        let spots = mixed();
        let mut state = FilterState::new();
        state.toggle(FilterOption::Size(SpotSize::Car));

        for option in all_options() {
            for policy in [AmenityPolicy::Ignore, AmenityPolicy::MatchAny] {
                let before = project(&spots, &state, policy);
                let mut toggled = state.clone();
                toggled.toggle(option);
                toggled.toggle(option);
                assert_eq!(project(&spots, &toggled, policy), before, "option {:?}", option);
            }
        }
    }

    #[test]
    fn test_single_category_is_sound_and_complete() {
        let spots = mixed();
        let mut state = FilterState::new();
        state.toggle(FilterOption::Size(SpotSize::Car));
        state.toggle(FilterOption::Size(SpotSize::Caravan));

        let result = project(&spots, &state, AmenityPolicy::Ignore);
        assert!(result.iter().all(|s| matches!(s.size, SpotSize::Car | SpotSize::Caravan)));
        let expected: Vec<u32> = spots
            .iter()
            .filter(|s| matches!(s.size, SpotSize::Car | SpotSize::Caravan))
            .map(|s| s.id)
            .collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_categories_compose_as_intersection() {
        let spots = mixed();
        let indoor = FilterOption::Location(Location::Indoor);
        let car = FilterOption::Size(SpotSize::Car);

        let mut only_indoor = FilterState::new();
        only_indoor.toggle(indoor);
        let mut only_car = FilterState::new();
        only_car.toggle(car);
        let mut both = only_indoor.clone();
        both.toggle(car);

        let indoor_ids = ids(&project(&spots, &only_indoor, AmenityPolicy::Ignore));
        let car_ids = ids(&project(&spots, &only_car, AmenityPolicy::Ignore));
        let expected: Vec<u32> = indoor_ids.into_iter().filter(|id| car_ids.contains(id)).collect();

        assert_eq!(ids(&project(&spots, &both, AmenityPolicy::Ignore)), expected);
        assert_eq!(expected, vec![3]);
    }

    #[test]
    fn test_amenities_ignored_by_default() {
        let spots = mixed();
        let mut state = FilterState::new();
        state.toggle(FilterOption::Amenity(Amenity::ElectricCharging));

        assert_eq!(project(&spots, &state, AmenityPolicy::default()), spots);
    }

    #[test]
    fn test_amenities_match_any_when_enabled() {
        let spots = mixed();
        let mut state = FilterState::new();
        state.toggle(FilterOption::Amenity(Amenity::PowerSocket));
        state.toggle(FilterOption::Amenity(Amenity::AlwaysOpen));
        assert_eq!(ids(&project(&spots, &state, AmenityPolicy::MatchAny)), vec![2, 4, 6]);

        state.toggle(FilterOption::Location(Location::PrivateSpace));
        assert_eq!(ids(&project(&spots, &state, AmenityPolicy::MatchAny)), vec![4, 6]);
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(AmenityPolicy::from_flag(false), AmenityPolicy::Ignore);
        assert_eq!(AmenityPolicy::from_flag(true), AmenityPolicy::MatchAny);
    }
}
