//! Listing Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::{FilterOption, FilterState};

/// UI state of the listing page
#[derive(Clone, Debug, Default, Store)]
pub struct ListingState {
    /// Checkbox selections
    pub filters: FilterState,
    /// Mobile filter dialog visibility
    pub mobile_filters_open: bool,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

/// Get the listing store from context
pub fn use_listing_store() -> ListingStore {
    expect_context::<ListingStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current filter selections
pub fn store_filters(store: &ListingStore) -> FilterState {
    store.filters().get()
}

/// Whether a checkbox is ticked
pub fn store_is_selected(store: &ListingStore, option: FilterOption) -> bool {
    store.filters().with(|filters| filters.is_selected(option))
}

/// Flip a checkbox
pub fn store_toggle_filter(store: &ListingStore, option: FilterOption) {
    log::debug!("toggle filter {}={}", option.category().id(), option.value());
    store.filters().write().toggle(option);
}

/// Untick every checkbox
pub fn store_clear_filters(store: &ListingStore) {
    store.filters().write().clear();
}

pub fn store_mobile_filters_open(store: &ListingStore) -> bool {
    store.mobile_filters_open().get()
}

pub fn store_set_mobile_filters_open(store: &ListingStore, open: bool) {
    *store.mobile_filters_open().write() = open;
}
