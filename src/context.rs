//! Application Context
//!
//! Shared, read-only services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::projector::AmenityPolicy;
use crate::source::SpotSource;

/// Listing source and site settings provided to all pages
#[derive(Clone)]
pub struct ListingContext {
    source: Arc<dyn SpotSource>,
    pub config: SiteConfig,
}

impl ListingContext {
    pub fn new(source: Arc<dyn SpotSource>, config: SiteConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &dyn SpotSource {
        self.source.as_ref()
    }

    pub fn amenity_policy(&self) -> AmenityPolicy {
        self.config.amenity_policy()
    }

    pub fn brand(&self) -> String {
        self.config.brand.clone()
    }
}

/// Get the listing context
pub fn use_listing() -> ListingContext {
    expect_context::<ListingContext>()
}
