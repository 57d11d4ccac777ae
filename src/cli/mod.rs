//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod pin;
pub mod suggest;

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{WellspaceError, WellspaceResult};

pub use budget::{handle_goal_command, handle_income_command, GoalCommands, IncomeCommands};
pub use dashboard::handle_dashboard_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use pin::{handle_pin_command, require_unlocked, PinCommands};
pub use suggest::handle_suggest_command;

/// Print a prompt and read one trimmed line from stdin
///
/// Returns `None` at end of input.
pub(crate) fn prompt_line(prompt: &str) -> WellspaceResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question; anything but "y"/"yes" is no
pub(crate) fn confirm(prompt: &str) -> WellspaceResult<bool> {
    let answer = prompt_line(&format!("{} (y/N): ", prompt))?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(input: &str) -> WellspaceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        WellspaceError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Parse an optional date argument, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> WellspaceResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
