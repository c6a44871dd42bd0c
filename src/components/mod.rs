//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod footer;
mod newsletter_form;
mod filter_panel;
mod mobile_filter_dialog;
mod spot_card;

pub use nav_bar::NavBar;
pub use footer::Footer;
pub use newsletter_form::NewsletterForm;
pub use filter_panel::FilterPanel;
pub use mobile_filter_dialog::MobileFilterDialog;
pub use spot_card::SpotCard;
