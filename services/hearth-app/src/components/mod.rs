//! Dashboard components and UI primitives

pub mod badge;
pub mod bill_table;
pub mod checkbox;
pub mod dialog;
pub mod status_tag;
pub mod summary_cards;
pub mod toaster;
