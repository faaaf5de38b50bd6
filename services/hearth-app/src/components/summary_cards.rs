//! Household summary cards

use crate::api::{format_amount, SummaryResponse};
use crate::components::badge::Badge;
use crate::status::PaymentStatus;
use leptos::prelude::*;

const CARD_STYLE: &str = "flex: 1; padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.5rem;";

/// Count per payment status plus the amount still owed
#[component]
pub fn SummaryCards(summary: Resource<SummaryResponse>) -> impl IntoView {
    view! {
        <section>
            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    summary.get().map(|s| {
                        let counts = [
                            (PaymentStatus::Paid, s.paid),
                            (PaymentStatus::Overdue, s.overdue),
                            (PaymentStatus::UpcomingDue, s.upcoming_due),
                        ];
                        view! {
                            <div style="display: flex; gap: 1rem; margin-bottom: 1rem;">
                                <div style=CARD_STYLE>
                                    <div>"Outstanding"</div>
                                    <strong>{format_amount(s.outstanding_cents, &s.currency)}</strong>
                                    <div style="color: #6c757d;">{format!("{} bills", s.total_bills)}</div>
                                </div>
                                {counts.into_iter().map(|(status, count)| {
                                    view! {
                                        <div style=CARD_STYLE>
                                            <Badge severity=status.severity()>
                                                {status.label()}
                                            </Badge>
                                            <div><strong>{count}</strong></div>
                                        </div>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
