//! Spot Listing Page
//!
//! Filter sidebar plus the grid of matching spots. Filter state lives in a
//! store created here, so it resets whenever the page is loaded.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterPanel, Footer, MobileFilterDialog, NavBar, SpotCard};
use crate::context::use_listing;
use crate::projector::project;
use crate::routes::Route;
use crate::store::{store_clear_filters, store_filters, store_set_mobile_filters_open, ListingState};

#[component]
pub fn SpotListPage() -> impl IntoView {
    let ctx = use_listing();
    let store = Store::new(ListingState::new());
    provide_context(store);

    let spots = StoredValue::new(ctx.source().spots());
    let policy = ctx.amenity_policy();
    log::info!("listing {} spots (amenities: {:?})", spots.with_value(|s| s.len()), policy);

    // Full recomputation on every filter change
    let visible = Memo::new(move |_| {
        let filters = store_filters(&store);
        let result = spots.with_value(|all| project(all, &filters, policy));
        log::debug!("{} of {} spots match", result.len(), spots.with_value(|s| s.len()));
        result
    });

    let has_filters = move || !store_filters(&store).is_empty();

    view! {
        <div class="page">
            <NavBar brand=ctx.brand() />
            <MobileFilterDialog />

            <main class="listing">
                <div class="listing-header">
                    <h1>"Find a spot"</h1>
                    <p>"Check out the spots nearby and filter by your preferences."</p>
                    <div class="search-bar">
                        <input type="text" name="location" placeholder="Location" />
                        <a href=Route::Spots.href() class="btn-primary">"Search"</a>
                    </div>
                </div>

                <div class="listing-body">
                    <aside class="listing-filters">
                        <h2 class="sr-only">"Filters"</h2>
                        <button
                            type="button"
                            class="mobile-filters-btn"
                            on:click=move |_| store_set_mobile_filters_open(&store, true)
                        >
                            "Filters +"
                        </button>
                        <div class="desktop-filters">
                            <FilterPanel />
                        </div>
                        <Show when=has_filters>
                            <button
                                type="button"
                                class="clear-filters-btn"
                                on:click=move |_| store_clear_filters(&store)
                            >
                                "Clear filters"
                            </button>
                        </Show>
                    </aside>

                    <section class="listing-results" aria-labelledby="spot-heading">
                        <h2 id="spot-heading" class="sr-only">"Parking Spots"</h2>
                        <p class="result-count">
                            {move || format!("{} of {} spots", visible.with(|v| v.len()), spots.with_value(|s| s.len()))}
                        </p>
                        <div class="spot-grid">
                            <For
                                each=move || visible.get()
                                key=|spot| spot.id
                                children=move |spot| view! { <SpotCard spot=spot /> }
                            />
                        </div>
                        <Show when=move || visible.with(|v| v.is_empty())>
                            <div class="no-spots-message">"No spots match your filters."</div>
                        </Show>
                    </section>
                </div>
            </main>

            <Footer brand=ctx.brand() />
        </div>
    }
}
