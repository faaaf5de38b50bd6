//! BDD step definitions for hearth service

pub mod dashboard_steps;
pub mod status_steps;
