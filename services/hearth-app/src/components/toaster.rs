//! Toast stack component

use crate::components::badge::merge_style;
use crate::toast::{use_toaster, ToastContext};
use leptos::prelude::*;

const STACK_STYLE: &str = "position: fixed; bottom: 1rem; right: 1rem; display: flex; \
                           flex-direction: column; gap: 0.5rem; z-index: 100;";

/// Renders the toasts queued through [`crate::toast::ToastContext`].
/// Clicking a toast dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
    use_toaster().map(|ToastContext(queue)| {
        view! {
            <div style=STACK_STYLE role="status">
                {move || {
                    queue
                        .with(|q| q.iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|toast| {
                            let id = toast.id;
                            let style = merge_style(
                                &toast.kind.severity().badge_style(),
                                Some("cursor: pointer; padding: 0.75em 1em; font-size: 0.95em;"),
                            );
                            view! {
                                <div
                                    style=style
                                    on:click=move |_| {
                                        queue.update(|q| {
                                            q.dismiss(id);
                                        });
                                    }
                                >
                                    {toast.message}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        }
    })
}
