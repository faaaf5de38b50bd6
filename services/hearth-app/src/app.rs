//! Main App component

use crate::api::{fetch_summary, SummaryResponse};
use crate::components::bill_table::BillTable;
use crate::components::summary_cards::SummaryCards;
use crate::components::toaster::Toaster;
use crate::toast::provide_toaster;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    let version = RwSignal::new(0u32);
    let summary = Resource::new(
        move || version.get(),
        |_| async move { fetch_summary().await.unwrap_or_default() },
    );
    let currency = Signal::derive(move || {
        summary
            .get()
            .map(|s: SummaryResponse| s.currency)
            .unwrap_or_default()
    });

    view! {
        <Title text="Hearth" />
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"Household Bills"</h1>
            <SummaryCards summary=summary />
            <BillTable version=version currency=currency />
            <Toaster />
        </main>
    }
}
