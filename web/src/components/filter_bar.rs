//! Breed and status selectors above the listing.

use leptos::*;

use crate::listing::view::{FilterBar as FilterBarView, SelectOption};

/// Both selectors.  Each change is reported as the raw option value; an
/// empty string is the "all" choice.
#[component]
pub fn FilterBar(
    #[prop(into)] bar: Signal<FilterBarView>,
    on_breed: Callback<String>,
    on_status: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <FilterSelect
                label="Breed"
                options=Signal::derive(move || bar.with(|b| b.breed_options.clone()))
                selected=Signal::derive(move || bar.with(|b| b.selected_breed.clone()))
                on_change=on_breed
            />
            <FilterSelect
                label="Status"
                options=Signal::derive(move || bar.with(|b| b.status_options.clone()))
                selected=Signal::derive(move || bar.with(|b| b.selected_status.clone()))
                on_change=on_status
            />
        </div>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    options: Signal<Vec<SelectOption>>,
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter">
            <span class="filter-label">{label}</span>
            <select
                class="filter-select"
                prop:value=move || selected.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|opt| opt.value.clone()
                    children=move |opt: SelectOption| {
                        let value = opt.value.clone();
                        view! {
                            <option
                                value=opt.value
                                selected=move || selected.with(|s| *s == value)
                            >
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
