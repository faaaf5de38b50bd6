//! Household bills table component

use crate::api::{fetch_bills, format_amount, mark_bill_paid, BillResponse};
use crate::components::checkbox::Checkbox;
use crate::components::dialog::ConfirmDialog;
use crate::components::status_tag::StatusTag;
use crate::status::PaymentStatus;
use crate::toast::{use_toaster, ToastContext};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Bills to show given the state of the "Show paid bills" checkbox
pub fn visible_bills(bills: Vec<BillResponse>, show_paid: bool) -> Vec<BillResponse> {
    if show_paid {
        return bills;
    }
    bills
        .into_iter()
        .filter(|b| b.status.parse::<PaymentStatus>() != Ok(PaymentStatus::Paid))
        .collect()
}

/// Sends the mark-paid request for the bill awaiting confirmation
fn confirm_mark_paid(
    pending: Option<BillResponse>,
    toaster: Option<ToastContext>,
    version: RwSignal<u32>,
) {
    let Some(bill) = pending else {
        if let Some(t) = toaster {
            t.warning("No bill selected");
        }
        return;
    };
    spawn_local(async move {
        match mark_bill_paid(&bill.id).await {
            Ok(()) => {
                if let Some(t) = toaster {
                    t.success(format!("{} marked as paid", bill.name));
                }
                version.update(|v| *v += 1);
            }
            Err(e) => {
                if let Some(t) = toaster {
                    t.error(format!("Could not update {}: {}", bill.name, e));
                }
            }
        }
    });
}

/// Fetches /api/bills and displays one row per bill with its status tag.
///
/// Bumping `version` refetches; the table bumps it itself after a bill has
/// been marked as paid.
#[component]
pub fn BillTable(version: RwSignal<u32>, #[prop(into)] currency: Signal<String>) -> impl IntoView {
    let show_paid = RwSignal::new(true);
    let dialog_open = RwSignal::new(false);
    let pending = RwSignal::new(None::<BillResponse>);
    let toaster = use_toaster();

    let bills = Resource::new(
        move || version.get(),
        |_| async move { fetch_bills().await.unwrap_or_default() },
    );

    let confirm = Callback::new(move |_: ()| {
        confirm_mark_paid(pending.get_untracked(), toaster, version);
    });

    view! {
        <section>
            <h2>"Bills"</h2>
            <Checkbox checked=show_paid label="Show paid bills" />
            <Suspense fallback=move || view! { <p>"Loading bills..."</p> }>
                {move || {
                    bills.get().map(|data| {
                        let data = visible_bills(data, show_paid.get());
                        if data.is_empty() {
                            view! { <p>"No bills to show."</p> }.into_any()
                        } else {
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Bill"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Payee"</th>
                                            <th style="padding: 0.5rem; text-align: right;">"Amount"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Due"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                                            <th style="padding: 0.5rem;"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data.into_iter().map(|b| {
                                            let amount = format_amount(b.amount_cents, &currency.get());
                                            let unpaid = b.status.parse::<PaymentStatus>() != Ok(PaymentStatus::Paid);
                                            let row = b.clone();
                                            view! {
                                                <tr style="border-bottom: 1px solid #dee2e6;">
                                                    <td style="padding: 0.5rem;">{b.name}</td>
                                                    <td style="padding: 0.5rem;">{b.payee.unwrap_or_default()}</td>
                                                    <td style="padding: 0.5rem; text-align: right;">{amount}</td>
                                                    <td style="padding: 0.5rem;">{b.due_date}</td>
                                                    <td style="padding: 0.5rem;">
                                                        <StatusTag status=b.status />
                                                    </td>
                                                    <td style="padding: 0.5rem;">
                                                        {unpaid.then(|| view! {
                                                            <button on:click=move |_| {
                                                                pending.set(Some(row.clone()));
                                                                dialog_open.set(true);
                                                            }>"Mark paid"</button>
                                                        })}
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
            <ConfirmDialog open=dialog_open title="Mark bill as paid" confirm_label="Mark paid" on_confirm=confirm>
                <p>
                    {move || {
                        pending
                            .get()
                            .map(|b| format!("Record \"{}\" as paid?", b.name))
                            .unwrap_or_default()
                    }}
                </p>
            </ConfirmDialog>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{provide_toaster, ToastKind};

    fn bill(id: &str, status: &str) -> BillResponse {
        BillResponse {
            id: id.to_string(),
            name: id.to_string(),
            payee: None,
            amount_cents: 1000,
            due_date: "2026-11-01".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn confirm_without_pending_bill_warns() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = provide_toaster();
            let version = RwSignal::new(0u32);
            confirm_mark_paid(None, Some(toaster), version);
            let toasts: Vec<_> = toaster.0.with_untracked(|q| q.iter().cloned().collect());
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].kind, ToastKind::Warning);
            assert_eq!(version.get_untracked(), 0);
        });
    }

    #[test]
    fn show_paid_keeps_everything() {
        let bills = vec![bill("a", "Paid"), bill("b", "Overdue")];
        assert_eq!(visible_bills(bills.clone(), true), bills);
    }

    #[test]
    fn hide_paid_filters_paid_only() {
        let bills = vec![
            bill("a", "Paid"),
            bill("b", "Overdue"),
            bill("c", "UpcomingDue"),
            bill("d", "Disputed"),
        ];
        let ids: Vec<_> = visible_bills(bills, false)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }
}
