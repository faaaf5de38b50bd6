//! Web dashboard with JSON API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use hearth_app::api::{format_amount, BillResponse};
use hearth_app::classify;
use hearth_app::components::status_tag::status_tag_style;
use tower_http::cors::CorsLayer;

use crate::error::HearthError;
use crate::state::StateHandle;

/// Source of the current date used to derive bill statuses
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().date_naive())
}

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub state: StateHandle,
    pub clock: Clock,
}

/// Build the dashboard axum router using the local date
pub fn build_router(state: StateHandle) -> Router {
    build_router_with_clock(state, local_clock())
}

pub fn build_router_with_clock(state: StateHandle, clock: Clock) -> Router {
    let dashboard_state = DashboardState { state, clock };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/bills", get(bills_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/bills/{id}/paid", post(mark_paid_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

/// Allow any origin to call the API
pub fn with_permissive_cors(router: Router) -> Router {
    router.layer(CorsLayer::permissive())
}

impl IntoResponse for HearthError {
    fn into_response(self) -> Response {
        let status = match &self {
            HearthError::BillNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Status badge markup, styled exactly like the frontend `StatusTag`
fn status_badge_html(status: &str) -> String {
    let presentation = classify(status);
    format!(
        r#"<span style="{}" data-severity="{}">{}</span>"#,
        status_tag_style(status, None),
        presentation.severity,
        escape_html(&presentation.label)
    )
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let today = (dashboard.clock)();
    let state = dashboard.state.read().await;
    let summary = state.summary(today);
    let currency = &state.household.currency;

    let bill_rows: String = state
        .bills
        .iter()
        .map(|b| {
            let status = b.status(today).to_string();
            format!(
                r#"<tr style="border-bottom: 1px solid #dee2e6;">
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem; text-align: right;">{}</td>
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem;">{}</td>
                </tr>"#,
                escape_html(&b.name),
                escape_html(b.payee.as_deref().unwrap_or("")),
                escape_html(&format_amount(b.amount_cents, currency)),
                b.due_date.format("%Y-%m-%d"),
                status_badge_html(&status)
            )
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta http-equiv="refresh" content="60">
    <title>{household} - Household Bills</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
    <h1>Household Bills</h1>
    <p>{household}: {outstanding} outstanding across {total} bills ({paid} paid, {overdue} overdue, {upcoming} upcoming)</p>
    <section>
        <h2>Bills</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="border-bottom: 2px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">Bill</th>
                    <th style="padding: 0.5rem; text-align: left;">Payee</th>
                    <th style="padding: 0.5rem; text-align: right;">Amount</th>
                    <th style="padding: 0.5rem; text-align: left;">Due</th>
                    <th style="padding: 0.5rem; text-align: left;">Status</th>
                </tr>
            </thead>
            <tbody id="bill-body">{bill_rows}</tbody>
        </table>
    </section>
</body>
</html>"#,
        household = escape_html(&summary.household),
        outstanding = escape_html(&format_amount(summary.outstanding_cents, &summary.currency)),
        total = summary.total_bills,
        paid = summary.paid,
        overdue = summary.overdue,
        upcoming = summary.upcoming_due,
        bill_rows = bill_rows,
    );

    Html(html)
}

async fn bills_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let today = (dashboard.clock)();
    let state = dashboard.state.read().await;

    let bills: Vec<BillResponse> = state.bills.iter().map(|b| b.to_response(today)).collect();

    Json(bills)
}

async fn summary_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let today = (dashboard.clock)();
    let state = dashboard.state.read().await;

    Json(state.summary(today))
}

async fn mark_paid_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HearthError> {
    let mut state = dashboard.state.write().await;
    if state.mark_paid(&id) {
        tracing::debug!("Bill {} marked as paid", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::warn!("Attempt to mark unknown bill {} as paid", id);
        Err(HearthError::BillNotFound(id))
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
