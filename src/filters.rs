//! Filter State
//!
//! Category/option definitions for the listing page and the selection
//! state toggled by its checkboxes.

use std::collections::BTreeSet;

use crate::error::{ListingError, ListingResult};
use crate::models::{Amenity, Location, SpotSize};

/// Filter facet shown on the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCategory {
    Location,
    Amenities,
    Size,
}

impl FilterCategory {
    pub fn parse(id: &str) -> ListingResult<Self> {
        match id {
            "location" => Ok(FilterCategory::Location),
            "amenities" => Ok(FilterCategory::Amenities),
            "size" => Ok(FilterCategory::Size),
            other => Err(ListingError::UnknownCategory(other.to_string())),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            FilterCategory::Location => "location",
            FilterCategory::Amenities => "amenities",
            FilterCategory::Size => "size",
        }
    }
}

/// One checkbox: a value tagged with the category it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterOption {
    Location(Location),
    Amenity(Amenity),
    Size(SpotSize),
}

impl FilterOption {
    /// Resolve an option value within a category
    pub fn parse(category: &str, value: &str) -> ListingResult<Self> {
        let category = FilterCategory::parse(category)?;
        let found = match category {
            FilterCategory::Location => Location::ALL
                .iter()
                .find(|l| l.value() == value)
                .map(|l| FilterOption::Location(*l)),
            FilterCategory::Amenities => Amenity::ALL
                .iter()
                .find(|a| a.value() == value)
                .map(|a| FilterOption::Amenity(*a)),
            FilterCategory::Size => SpotSize::ALL
                .iter()
                .find(|s| s.value() == value)
                .map(|s| FilterOption::Size(*s)),
        };
        found.ok_or_else(|| ListingError::UnknownOption {
            category: category.id().to_string(),
            value: value.to_string(),
        })
    }

    pub fn category(self) -> FilterCategory {
        match self {
            FilterOption::Location(_) => FilterCategory::Location,
            FilterOption::Amenity(_) => FilterCategory::Amenities,
            FilterOption::Size(_) => FilterCategory::Size,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            FilterOption::Location(l) => l.value(),
            FilterOption::Amenity(a) => a.value(),
            FilterOption::Size(s) => s.value(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::Location(l) => l.label(),
            FilterOption::Amenity(a) => a.label(),
            FilterOption::Size(s) => s.label(),
        }
    }
}

/// A titled group of checkboxes
pub struct FilterSection {
    pub category: FilterCategory,
    pub name: &'static str,
    pub options: &'static [FilterOption],
}

/// Filter sections in display order
pub const FILTER_SECTIONS: &[FilterSection] = &[
    FilterSection {
        category: FilterCategory::Location,
        name: "Location",
        options: &[
            FilterOption::Location(Location::Indoor),
            FilterOption::Location(Location::Outdoor),
            FilterOption::Location(Location::PrivateSpace),
        ],
    },
    FilterSection {
        category: FilterCategory::Amenities,
        name: "Amenities",
        options: &[
            FilterOption::Amenity(Amenity::ElectricCharging),
            FilterOption::Amenity(Amenity::AlwaysOpen),
            FilterOption::Amenity(Amenity::PowerSocket),
        ],
    },
    FilterSection {
        category: FilterCategory::Size,
        name: "Size",
        options: &[
            FilterOption::Size(SpotSize::Bike),
            FilterOption::Size(SpotSize::CargoBike),
            FilterOption::Size(SpotSize::Car),
            FilterOption::Size(SpotSize::Caravan),
        ],
    },
];

/// Selected options per category. An empty set means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub location: BTreeSet<Location>,
    pub amenities: BTreeSet<Amenity>,
    pub size: BTreeSet<SpotSize>,
}

/// Insert if absent, remove if present
fn flip<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the option if unselected, deselect it otherwise
    pub fn toggle(&mut self, option: FilterOption) {
        match option {
            FilterOption::Location(l) => flip(&mut self.location, l),
            FilterOption::Amenity(a) => flip(&mut self.amenities, a),
            FilterOption::Size(s) => flip(&mut self.size, s),
        }
    }

    /// Toggle from untyped ids. Unknown or mismatched input leaves the
    /// state untouched; returns whether anything changed.
    pub fn toggle_raw(&mut self, category: &str, value: &str) -> bool {
        match FilterOption::parse(category, value) {
            Ok(option) => {
                self.toggle(option);
                true
            }
            Err(err) => {
                log::debug!("ignoring filter toggle: {}", err);
                false
            }
        }
    }

    pub fn is_selected(&self, option: FilterOption) -> bool {
        match option {
            FilterOption::Location(l) => self.location.contains(&l),
            FilterOption::Amenity(a) => self.amenities.contains(&a),
            FilterOption::Size(s) => self.size.contains(&s),
        }
    }

    pub fn selected_count(&self, category: FilterCategory) -> usize {
        match category {
            FilterCategory::Location => self.location.len(),
            FilterCategory::Amenities => self.amenities.len(),
            FilterCategory::Size => self.size.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.amenities.is_empty() && self.size.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
