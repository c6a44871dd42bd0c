//! Spot Card Component

use leptos::prelude::*;

use crate::models::Spot;

/// Result card linking to the detail page
#[component]
pub fn SpotCard(spot: Spot) -> impl IntoView {
    let href = spot.href();

    view! {
        <div class="spot-card">
            <div class="spot-card-image">
                <img src=spot.image_src alt=spot.image_alt />
            </div>
            <div class="spot-card-body">
                <h3 class="spot-card-name">
                    <a href=href>
                        <span aria-hidden="true" class="spot-card-overlay"></span>
                        {spot.name}
                    </a>
                </h3>
                <p class="spot-card-description">{spot.description}</p>
                <p class="spot-card-meta">
                    {format!("{} · {} · {}", spot.city, spot.location.label(), spot.size.label())}
                </p>
                <p class="spot-card-price">{spot.price}</p>
            </div>
        </div>
    }
}
