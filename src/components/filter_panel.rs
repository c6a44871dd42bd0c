//! Filter Panel Component
//!
//! Checkbox sections bound to the listing store. Rendered twice on the
//! listing page (desktop sidebar and mobile dialog), so input ids carry
//! a suffix.

use leptos::prelude::*;

use crate::filters::{FilterSection, FILTER_SECTIONS};
use crate::store::{store_filters, store_is_selected, store_toggle_filter, use_listing_store};

#[component]
fn FilterFieldset(section: &'static FilterSection, id_suffix: &'static str) -> impl IntoView {
    let store = use_listing_store();
    let category = section.category;

    let count_badge = move || {
        let count = store_filters(&store).selected_count(category);
        if count > 0 { format!("({})", count) } else { String::new() }
    };

    view! {
        <fieldset class="filter-section">
            <legend class="filter-section-name">
                {section.name}
                " "
                <span class="filter-count">{count_badge}</span>
            </legend>
            <div class="filter-options">
                {section.options.iter().enumerate().map(|(idx, option)| {
                    let option = *option;
                    let input_id = format!("{}-{}{}", category.id(), idx, id_suffix);
                    view! {
                        <div class="filter-option">
                            <input
                                id=input_id.clone()
                                name=format!("{}[]", category.id())
                                value=option.value()
                                type="checkbox"
                                prop:checked=move || store_is_selected(&store, option)
                                on:change=move |_| store_toggle_filter(&store, option)
                            />
                            <label for=input_id>{option.label()}</label>
                        </div>
                    }
                }).collect_view()}
            </div>
        </fieldset>
    }
}

/// All filter sections
#[component]
pub fn FilterPanel(#[prop(default = "")] id_suffix: &'static str) -> impl IntoView {
    view! {
        <form class="filter-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            {FILTER_SECTIONS.iter().map(|section| view! {
                <FilterFieldset section=section id_suffix=id_suffix />
            }).collect_view()}
        </form>
    }
}
