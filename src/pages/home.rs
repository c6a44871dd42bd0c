//! Landing Page

use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::context::use_listing;
use crate::navigation::TESTIMONIALS;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_listing();

    view! {
        <div class="page">
            <NavBar brand=ctx.brand() />

            <main>
                // Hero
                <section class="hero">
                    <div class="hero-text">
                        <h1>"Find the perfect Spot"</h1>
                        <p class="hero-subtitle">"Easy. Quick. Without hustle."</p>
                        <a href=Route::Spots.href() class="btn-primary">"Find a Spot"</a>
                    </div>
                    <div class="hero-image">
                        <img src="/hero.jpg" alt="" />
                    </div>
                </section>

                // Testimonials
                <section class="testimonials" aria-labelledby="testimonial-heading">
                    <h2 id="testimonial-heading">"What are people saying?"</h2>
                    <div class="testimonial-grid">
                        {TESTIMONIALS.iter().map(|testimonial| view! {
                            <blockquote class="testimonial">
                                <p>{testimonial.quote}</p>
                                <cite>{testimonial.attribution}</cite>
                            </blockquote>
                        }).collect_view()}
                    </div>
                </section>

                <section class="early-access">
                    <h3>"Get early access"</h3>
                    <p>
                        "Did you sign up to the newsletter? If so, use the keyword we sent you to get access. "
                        <a href="#">"Go now →"</a>
                    </p>
                </section>
            </main>

            <Footer brand=ctx.brand() />
        </div>
    }
}
