//! BDD step definitions for dashboard feature

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use chrono::NaiveDate;
use cucumber::{given, then, when};
use tower::ServiceExt;

use hearth::bill::Bill;
use hearth::config::HouseholdConfig;
use hearth::dashboard::{build_router_with_clock, Clock};
use hearth::state::new_state_handle;

use crate::world::HearthWorld;

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("invalid date")
}

fn today() -> Clock {
    Arc::new(|| NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

#[given("an empty household")]
fn empty_household(world: &mut HearthWorld) {
    world.dashboard_state = Some(new_state_handle(HouseholdConfig::default(), vec![]));
}

#[given(expr = "an unpaid bill {string} of {int} cents due {string}")]
async fn unpaid_bill(world: &mut HearthWorld, id: String, amount_cents: i64, due: String) {
    add_bill(world, id, amount_cents, due, false).await;
}

#[given(expr = "a paid bill {string} of {int} cents due {string}")]
async fn paid_bill(world: &mut HearthWorld, id: String, amount_cents: i64, due: String) {
    add_bill(world, id, amount_cents, due, true).await;
}

async fn add_bill(world: &mut HearthWorld, id: String, amount_cents: i64, due: String, paid: bool) {
    let handle = world
        .dashboard_state
        .get_or_insert_with(|| new_state_handle(HouseholdConfig::default(), vec![]));
    let mut s = handle.write().await;
    s.bills.push(Bill {
        name: id.clone(),
        id,
        payee: None,
        amount_cents,
        due_date: parse_date(&due),
        paid,
    });
}

async fn send(world: &mut HearthWorld, method: Method, uri: &str) {
    let state = world
        .dashboard_state
        .as_ref()
        .expect("state not set")
        .clone();
    let app = build_router_with_clock(state, today());
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[when(expr = "{string} is requested")]
async fn get_request(world: &mut HearthWorld, uri: String) {
    send(world, Method::GET, &uri).await;
}

#[when(expr = "bill {string} is marked as paid")]
async fn mark_paid(world: &mut HearthWorld, id: String) {
    send(world, Method::POST, &format!("/api/bills/{}/paid", id)).await;
}

#[then(expr = "the response status should be {int}")]
fn response_status_is(world: &mut HearthWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut HearthWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the page should show a {string} badge labelled {string}")]
fn page_shows_badge(world: &mut HearthWorld, severity: String, label: String) {
    let body = world.response_body.as_ref().expect("no response body");
    let expected = format!(r#"data-severity="{}">{}</span>"#, severity, label);
    assert!(
        body.contains(&expected),
        "Expected page to contain badge '{}'.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "bill {string} should have status {string}")]
fn bill_has_status(world: &mut HearthWorld, id: String, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    let bills: Vec<serde_json::Value> = serde_json::from_str(body).expect("not a JSON array");
    let bill = bills
        .iter()
        .find(|b| b["id"] == id.as_str())
        .unwrap_or_else(|| panic!("bill {} not in response", id));
    assert_eq!(bill["status"], expected.as_str());
}

#[then(expr = "the summary field {string} should be {int}")]
fn summary_field_is(world: &mut HearthWorld, field: String, expected: i64) {
    let body = world.response_body.as_ref().expect("no response body");
    let summary: serde_json::Value = serde_json::from_str(body).expect("not JSON");
    assert_eq!(summary[field.as_str()].as_i64(), Some(expected));
}
