//! Expense CLI commands
//!
//! Implements CLI commands for recording, editing, and listing expenses.

use std::time::Duration;

use clap::Subcommand;

use crate::advisor::{self, PendingSuggestion};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{WellspaceError, WellspaceResult};
use crate::services::{parse_amount, CreateExpenseInput, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

use super::{confirm, parse_date, parse_date_or_today, prompt_line};

/// Extra time given to the worker beyond the HTTP timeout
const SUGGESTION_GRACE: Duration = Duration::from_millis(500);

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount spent (e.g., "2500" or "2,500.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category; suggested and prompted for when omitted
        #[arg(short, long)]
        category: Option<String>,

        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Don't ask the category advisor
        #[arg(long)]
        no_suggest: bool,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID or unique ID prefix
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique ID prefix
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense in full
    Show {
        /// Expense ID or unique ID prefix
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> WellspaceResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
            no_suggest,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            if description.trim().is_empty() {
                return Err(WellspaceError::Validation(
                    "Expense description cannot be empty".into(),
                ));
            }

            let category = match category {
                Some(category) => category,
                None if no_suggest => prompt_category()?,
                None => match start_suggestion(settings, &description) {
                    Some(pending) => prompt_category_with_suggestion(settings, pending)?,
                    None => prompt_category()?,
                },
            };

            let expense = service.create(CreateExpenseInput {
                description,
                amount,
                category,
                date,
            })?;

            println!(
                "Recorded: {} [{}] {} ({})",
                expense.description,
                expense.category,
                expense.amount.format_with_symbol(symbol),
                expense.id.short()
            );
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let input = UpdateExpenseInput {
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let expense = service.update(&id, input)?;
            println!("Updated expense {}", expense.id.short());
            print!("{}", format_expense_details(&expense, symbol, date_format));
        }

        ExpenseCommands::Delete { id, yes } => {
            let expense = service.get(&id)?;

            if !yes {
                println!(
                    "Delete '{}' ({})?",
                    expense.description,
                    expense.amount.format_with_symbol(symbol)
                );
                println!("This action cannot be undone.");
                if !confirm("Continue?")? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let deleted = service.delete(expense.id.as_str())?;
            println!("Deleted expense: {}", deleted.description);
        }

        ExpenseCommands::List { limit } => {
            let mut expenses = service.list()?;
            let total = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_table(&expenses, symbol, date_format));
            if expenses.len() < total {
                println!("Showing {} of {} expenses", expenses.len(), total);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense, symbol, date_format));
        }
    }

    Ok(())
}

/// Start a background category request; any setup failure is just no
/// suggestion
fn start_suggestion(settings: &Settings, description: &str) -> Option<PendingSuggestion> {
    match advisor::from_settings(&settings.advisor) {
        Ok(advisor) => Some(PendingSuggestion::spawn(advisor, description)),
        Err(err) => {
            tracing::debug!(error = %err, "category advisor unavailable");
            None
        }
    }
}

/// Prompt for a category while the suggestion is in flight
///
/// Typed input wins and the request is discarded. Blank input waits for the
/// suggestion; if none arrives the user is asked again.
fn prompt_category_with_suggestion(
    settings: &Settings,
    pending: PendingSuggestion,
) -> WellspaceResult<String> {
    let typed = prompt_line("Category (leave blank for a suggestion): ")?.unwrap_or_default();
    if !typed.trim().is_empty() {
        pending.discard();
        return required_category(&typed);
    }

    println!("Waiting for a category suggestion...");
    let deadline = Duration::from_secs(settings.advisor.timeout_secs.max(1)) + SUGGESTION_GRACE;
    match pending.wait(deadline) {
        Some(suggestion) => {
            println!("Suggested category: {}", suggestion.category);
            Ok(suggestion.category)
        }
        None => {
            println!("No suggestion available.");
            prompt_category()
        }
    }
}

fn prompt_category() -> WellspaceResult<String> {
    let typed = prompt_line("Category: ")?.unwrap_or_default();
    required_category(&typed)
}

fn required_category(typed: &str) -> WellspaceResult<String> {
    let typed = typed.trim();
    if typed.is_empty() {
        return Err(WellspaceError::Validation(
            "A category is required (pass --category or type one at the prompt)".into(),
        ));
    }
    Ok(typed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WellspacePaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WellspacePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, description: &str, amount: &str, category: &str, date: &str) {
        handle_expense_command(
            storage,
            &Settings::default(),
            ExpenseCommands::Add {
                description: description.into(),
                amount: amount.into(),
                category: Some(category.into()),
                date: Some(date.into()),
                no_suggest: true,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_required_category() {
        assert_eq!(required_category(" Rent ").unwrap(), "Rent");
        assert!(required_category("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_no_suggestion_when_disabled() {
        let mut settings = Settings::default();
        settings.advisor.enabled = false;
        assert!(start_suggestion(&settings, "Lunch").is_none());
    }

    #[test]
    fn test_add_and_edit() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Lunch", "1,500", "Food", "2024-01-05");

        let expenses = storage.expenses.get_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_units(1500));

        handle_expense_command(
            &storage,
            &Settings::default(),
            ExpenseCommands::Edit {
                id: expenses[0].id.short().to_string(),
                description: None,
                amount: Some("2000.50".into()),
                category: None,
                date: None,
            },
        )
        .unwrap();

        let updated = storage.expenses.get_all().unwrap();
        assert_eq!(updated[0].amount, Money::from_cents(200_050));
        assert_eq!(updated[0].category, "Food");
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        for (amount, date) in [("abc", "2024-01-05"), ("-5", "2024-01-05"), ("5", "05/01/2024")] {
            let err = handle_expense_command(
                &storage,
                &settings,
                ExpenseCommands::Add {
                    description: "Lunch".into(),
                    amount: amount.into(),
                    category: Some("Food".into()),
                    date: Some(date.into()),
                    no_suggest: true,
                },
            )
            .unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_with_yes() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Bus", "300", "Transport", "2024-01-20");
        let id = storage.expenses.get_all().unwrap()[0].id.clone();

        handle_expense_command(
            &storage,
            &Settings::default(),
            ExpenseCommands::Delete {
                id: id.to_string(),
                yes: true,
            },
        )
        .unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let err = handle_expense_command(
            &storage,
            &Settings::default(),
            ExpenseCommands::Show { id: "nope".into() },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
