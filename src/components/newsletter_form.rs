//! Newsletter Form Component
//!
//! Sign-up box in the footer. Nothing is sent anywhere.

use leptos::prelude::*;

/// Basic shape check for an email address
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address.");
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("That doesn't look like an email address."),
    }
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);
    let (subscribed, set_subscribed) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get()) {
            Ok(()) => {
                log::info!("newsletter sign-up submitted");
                set_error.set(None);
                set_subscribed.set(true);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <div class="newsletter">
            <h3>"Sign up for our newsletter"</h3>
            <p>"The latest news, articles, and resources, sent to your inbox weekly."</p>
            {move || if subscribed.get() {
                view! { <p class="newsletter-done">"Thanks! Check your inbox."</p> }.into_any()
            } else {
                view! {
                    <div class="newsletter-body">
                        <form class="newsletter-form" on:submit=on_submit>
                            <label for="newsletter-email" class="sr-only">"Email address"</label>
                            <input
                                id="newsletter-email"
                                type="email"
                                placeholder="Email address"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <button type="submit">"Sign up"</button>
                        </form>
                        {move || error.get().map(|msg| view! { <p class="newsletter-error">{msg}</p> })}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("kelly@example.com").is_ok());
        assert!(validate_email("  chris@example.de ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("sarah@localhost").is_err());
    }
}
