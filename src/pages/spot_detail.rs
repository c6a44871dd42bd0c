//! Spot Detail Page

use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::context::use_listing;
use crate::models::Spot;
use crate::routes::Route;

fn spot_details(spot: Spot) -> impl IntoView {
    let amenities = spot.amenities.clone();

    view! {
        <article class="spot-detail">
            <div class="spot-detail-image">
                <img src=spot.image_src alt=spot.image_alt />
            </div>
            <div class="spot-detail-info">
                <h1>{spot.name}</h1>
                <p class="spot-detail-price">{spot.price}</p>
                <dl class="spot-detail-facts">
                    <dt>"City"</dt>
                    <dd>{spot.city}</dd>
                    <dt>"Location"</dt>
                    <dd>{spot.location.label()}</dd>
                    <dt>"Size"</dt>
                    <dd>{spot.size.label()}</dd>
                </dl>
                <p class="spot-detail-description">{spot.description}</p>
                {if amenities.is_empty() {
                    view! { <p class="spot-detail-amenities-none">"No extra amenities"</p> }.into_any()
                } else {
                    view! {
                        <ul class="spot-detail-amenities">
                            {amenities.into_iter().map(|a| view! { <li>{a.label()}</li> }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </div>
        </article>
    }
}

#[component]
pub fn SpotDetailPage(spot_id: u32) -> impl IntoView {
    let ctx = use_listing();

    let content = match ctx.source().find(spot_id) {
        Ok(spot) => spot_details(spot).into_any(),
        Err(err) => {
            log::warn!("{}", err);
            view! {
                <div class="not-found">
                    <h1>"Spot not found"</h1>
                    <p>"This spot doesn't exist or is no longer listed."</p>
                    <a href=Route::Spots.href() class="btn-primary">"Back to all spots"</a>
                </div>
            }.into_any()
        }
    };

    view! {
        <div class="page">
            <NavBar brand=ctx.brand() />
            <main class="detail">
                <a href=Route::Spots.href() class="back-link">"← All spots"</a>
                {content}
            </main>
            <Footer brand=ctx.brand() />
        </div>
    }
}
