//! Income and savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::WellspaceResult;
use crate::reports::DashboardReport;
use crate::services::{parse_amount, BudgetService};
use crate::storage::Storage;

use super::parse_date_or_today;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set total income (e.g., "250000" or "250,000.00")
    Set {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show total income and the resulting balance
    Show,
}

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set the savings goal; 0 clears it
    Set {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the savings goal and how far the balance is from it
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> WellspaceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = service.set_income(parse_amount(&amount)?)?;
            println!("Total income set to {}", income.format_with_symbol(symbol));
        }

        IncomeCommands::Show => {
            let report = DashboardReport::from_storage(storage, parse_date_or_today(None)?, 0)?;
            println!("Total Income:   {:>16}", report.income.format_with_symbol(symbol));
            println!(
                "Total Expenses: {:>16}",
                report.total_expenses.format_with_symbol(symbol)
            );
            println!("{}", "-".repeat(33));
            println!("Balance:        {:>16}", report.balance.format_with_symbol(symbol));
        }
    }

    Ok(())
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> WellspaceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Set { amount } => {
            let goal = service.set_savings_goal(parse_amount(&amount)?)?;
            if goal.is_zero() {
                println!("Savings goal cleared.");
            } else {
                println!("Savings goal set to {}", goal.format_with_symbol(symbol));
            }
        }

        GoalCommands::Show => {
            let report = DashboardReport::from_storage(storage, parse_date_or_today(None)?, 0)?;
            if report.savings_goal.is_positive() {
                println!(
                    "Savings Goal: {}",
                    report.savings_goal.format_with_symbol(symbol)
                );
                println!("Balance:      {}", report.balance.format_with_symbol(symbol));
            }
            println!("{}", report.goal_message(symbol));
        }
    }

    Ok(())
}
