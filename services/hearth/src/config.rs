//! Configuration types for the hearth service

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub household: HouseholdConfig,
    #[serde(default)]
    pub bills: Vec<BillConfig>,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Display settings for the household
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdConfig {
    #[serde(default = "default_household_name")]
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            name: default_household_name(),
            currency: default_currency(),
        }
    }
}

/// A bill loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub payee: Option<String>,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub paid: bool,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin API calls, e.g. from a separately served frontend
    #[serde(default)]
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            permissive_cors: false,
        }
    }
}

impl Config {
    /// Reject configurations the dashboard cannot serve unambiguously
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for bill in &self.bills {
            if bill.id.trim().is_empty() {
                return Err(crate::HearthError::Config(format!(
                    "Bill {:?} has an empty id",
                    bill.name
                )));
            }
            if let Some(c) = bill.id.chars().find(|c| !is_unreserved(*c)) {
                return Err(crate::HearthError::Config(format!(
                    "Bill id {:?} contains {:?}; ids may only use letters, digits, '-', '_', '.' and '~'",
                    bill.id, c
                )));
            }
            if bill.amount_cents < 0 {
                return Err(crate::HearthError::Config(format!(
                    "Bill {:?} has a negative amount",
                    bill.id
                )));
            }
            if !seen.insert(bill.id.as_str()) {
                return Err(crate::HearthError::Config(format!(
                    "Duplicate bill id {:?}",
                    bill.id
                )));
            }
        }
        Ok(())
    }
}

/// Characters that appear unchanged in a URL path segment
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

fn default_household_name() -> String {
    "Household".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::HearthError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
