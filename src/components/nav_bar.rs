//! Navigation Bar Component
//!
//! Top bar with the "Find a spot" flyout and a mobile menu.

use leptos::prelude::*;

use crate::navigation::{NavCategory, NavLink, NAV_CATEGORIES, NAV_PAGES};

fn link_list(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="nav-link-list">
            {links.iter().map(|item| view! {
                <li><a href=item.href>{item.name}</a></li>
            }).collect_view()}
        </ul>
    }
}

/// Flyout panel of one navigation category
#[component]
fn CategoryFlyout(category: &'static NavCategory) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="nav-flyout">
            <button
                class=move || if open.get() { "nav-flyout-btn active" } else { "nav-flyout-btn" }
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                {category.name}
            </button>
            <Show when=move || open.get()>
                <div class="nav-flyout-panel">
                    <div class="nav-flyout-column">
                        <p class="nav-flyout-heading">"Featured Cities"</p>
                        {link_list(category.featured)}
                    </div>
                    <div class="nav-flyout-column">
                        <p class="nav-flyout-heading">"Categories"</p>
                        {link_list(category.categories)}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Site navigation bar
#[component]
pub fn NavBar(#[prop(into)] brand: String) -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <header class="nav-bar">
            <nav class="nav-bar-inner">
                <button
                    class="nav-menu-btn"
                    aria-label="Open menu"
                    on:click=move |_| set_mobile_open.set(true)
                >
                    "☰"
                </button>

                <a href="/" class="nav-brand">
                    <img src="/logo.png" class="nav-logo" alt="" />
                    <span>{brand}</span>
                </a>

                <div class="nav-desktop">
                    {NAV_CATEGORIES.iter().map(|category| view! {
                        <CategoryFlyout category=category />
                    }).collect_view()}
                    {NAV_PAGES.iter().map(|page| view! {
                        <a href=page.href class="nav-page-link">{page.name}</a>
                    }).collect_view()}
                </div>

                <a href="#" class="nav-account" aria-label="Account">"👤"</a>
            </nav>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="mobile-menu">
                    <button
                        class="mobile-menu-close"
                        aria-label="Close menu"
                        on:click=move |_| set_mobile_open.set(false)
                    >
                        "×"
                    </button>
                    {NAV_CATEGORIES.iter().map(|category| view! {
                        <div class="mobile-menu-section">
                            <p class="nav-flyout-heading">{category.name}</p>
                            {link_list(category.featured)}
                            {link_list(category.categories)}
                        </div>
                    }).collect_view()}
                    <div class="mobile-menu-section">
                        {link_list(NAV_PAGES)}
                    </div>
                    <div class="mobile-menu-section">
                        <a href="#">"Create an account"</a>
                        <a href="#">"Sign in"</a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
