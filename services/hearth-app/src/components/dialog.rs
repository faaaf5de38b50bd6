//! Modal confirmation dialog

use leptos::prelude::*;

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); \
                              display: flex; align-items: center; justify-content: center;";
const PANEL_STYLE: &str = "background: #fff; border-radius: 0.5rem; padding: 1.5rem; \
                           min-width: 320px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);";

/// Dialog shown while `open` is true. Confirm runs `on_confirm` and closes
/// the dialog; Cancel only closes it.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into, default = "Confirm".to_string())] confirm_label: String,
    on_confirm: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div style=BACKDROP_STYLE>
                <div style=PANEL_STYLE role="dialog" aria-modal="true">
                    <h3 style="margin-top: 0;">{title.clone()}</h3>
                    {children()}
                    <div style="display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1rem;">
                        <button on:click=move |_| open.set(false)>"Cancel"</button>
                        <button on:click=move |_| {
                            on_confirm.run(());
                            open.set(false);
                        }>{confirm_label.clone()}</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
