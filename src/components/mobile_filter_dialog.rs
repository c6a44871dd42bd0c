//! Mobile Filter Dialog Component

use leptos::prelude::*;

use crate::components::FilterPanel;
use crate::store::{store_mobile_filters_open, store_set_mobile_filters_open, use_listing_store};

/// Full-screen filter dialog for small screens
#[component]
pub fn MobileFilterDialog() -> impl IntoView {
    let store = use_listing_store();

    view! {
        <Show when=move || store_mobile_filters_open(&store)>
            <div class="dialog-backdrop" on:click=move |_| store_set_mobile_filters_open(&store, false)></div>
            <div class="dialog-panel" role="dialog" aria-label="Filters">
                <div class="dialog-header">
                    <h2>"Filters"</h2>
                    <button
                        class="dialog-close-btn"
                        aria-label="Close menu"
                        on:click=move |_| store_set_mobile_filters_open(&store, false)
                    >
                        "×"
                    </button>
                </div>
                <FilterPanel id_suffix="-mobile" />
            </div>
        </Show>
    }
}
