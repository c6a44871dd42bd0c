//! Footer Component

use leptos::prelude::*;

use crate::components::NewsletterForm;
use crate::navigation::{NavLink, FOOTER_CITIES, FOOTER_COMPANY};

fn footer_column(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3>{title}</h3>
            <ul>
                {links.iter().map(|item| view! {
                    <li><a href=item.href>{item.name}</a></li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer(#[prop(into)] brand: String) -> impl IntoView {
    view! {
        <footer class="site-footer" aria-labelledby="footer-heading">
            <h2 id="footer-heading" class="sr-only">"Footer"</h2>
            <div class="footer-grid">
                {footer_column("Cities", FOOTER_CITIES)}
                {footer_column("Company", FOOTER_COMPANY)}
                <NewsletterForm />
            </div>
            <p class="footer-copyright">{format!("© 2024 {}. All Rights Reserved", brand)}</p>
        </footer>
    }
}
