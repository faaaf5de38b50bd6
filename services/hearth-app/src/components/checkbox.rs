//! Labelled checkbox bound to a signal

use leptos::prelude::*;

#[component]
pub fn Checkbox(checked: RwSignal<bool>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <label style="display: inline-flex; align-items: center; gap: 0.4rem; cursor: pointer;">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
