//! Site Configuration
//!
//! Settings bundled in `config/site.json`. Missing fields use defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ListingResult;
use crate::projector::AmenityPolicy;

const SITE_JSON: &str = include_str!("../config/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the navigation bar and footer
    pub brand: String,
    pub log_level: String,
    /// Number of log lines kept in memory
    pub log_history: usize,
    /// Let the amenities section constrain results
    pub filter_amenities: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "SpotShare".to_string(),
            log_level: "info".to_string(),
            log_history: 200,
            filter_amenities: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> ListingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration compiled into the build
    pub fn embedded() -> ListingResult<Self> {
        Self::from_json(SITE_JSON)
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn amenity_policy(&self) -> AmenityPolicy {
        AmenityPolicy::from_flag(self.filter_amenities)
    }
}
