//! Client-side API helpers
//!
//! These types mirror the server-side JSON response structures and are
//! shared between SSR and client-side hydration. The fetch helpers forward
//! straight to the backend endpoints.

use serde::{Deserialize, Serialize};

/// Bill as returned by /api/bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub payee: Option<String>,
    pub amount_cents: i64,
    pub due_date: String,
    pub status: String,
}

/// Household totals as returned by /api/summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub household: String,
    pub currency: String,
    pub total_bills: usize,
    pub paid: usize,
    pub overdue: usize,
    pub upcoming_due: usize,
    pub outstanding_cents: i64,
}

/// Format minor currency units, e.g. `USD 1,250.05`
pub fn format_amount(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let amount = format!("{}{}.{:02}", sign, grouped, abs % 100);
    if currency.is_empty() {
        amount
    } else {
        format!("{} {}", currency, amount)
    }
}

pub async fn fetch_bills() -> Result<Vec<BillResponse>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/bills").await
    }

    #[cfg(not(feature = "hydrate"))]
    {
        Ok(vec![])
    }
}

pub async fn fetch_summary() -> Result<SummaryResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/summary").await
    }

    #[cfg(not(feature = "hydrate"))]
    {
        Ok(SummaryResponse::default())
    }
}

/// `id` goes into the URL path as-is; the service only accepts ids made of
/// URL-unreserved characters.
pub async fn mark_bill_paid(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/bills/{}/paid", origin()?, id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(format!("server returned {}", resp.status()))
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn origin() -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    window.location().origin().map_err(|e| format!("{:?}", e))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", origin()?, path);

    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;

    resp.json().await.map_err(|e| format!("{}", e))
}
