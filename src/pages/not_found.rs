//! Fallback Page

use leptos::prelude::*;

use crate::components::NavBar;
use crate::context::use_listing;
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_listing();

    view! {
        <div class="page">
            <NavBar brand=ctx.brand() />
            <main class="not-found">
                <h1>"Page not found"</h1>
                <a href=Route::Home.href() class="btn-primary">"Go home"</a>
            </main>
        </div>
    }
}
