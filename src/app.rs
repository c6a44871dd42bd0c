//! SpotShare Frontend App
//!
//! Root component: provides the listing context and picks the page for
//! the current path.

use leptos::prelude::*;

use crate::context::ListingContext;
use crate::pages::{HomePage, NotFoundPage, SpotDetailPage, SpotListPage};
use crate::routes::Route;

#[component]
pub fn App(context: ListingContext) -> impl IntoView {
    // Provide context to all pages
    provide_context(context);

    let route = Route::current();
    log::info!("route {:?}", route);

    let page = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Spots => view! { <SpotListPage /> }.into_any(),
        Route::SpotDetail(spot_id) => view! { <SpotDetailPage spot_id=spot_id /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            {page}
        </div>
    }
}
