//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and the dashboard for
//! terminal display.

pub mod dashboard;
pub mod expense;

pub use dashboard::{format_bar, format_dashboard, format_percentage};
pub use expense::{format_expense_details, format_expense_table};
