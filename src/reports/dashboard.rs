//! Dashboard Report
//!
//! Everything the dashboard shows, derived in one pass from the expense list,
//! income, and savings goal.

use chrono::NaiveDate;

use crate::error::WellspaceResult;
use crate::models::{Expense, Money};
use crate::services::expense::sort_for_display;
use crate::storage::Storage;

use super::aggregate::{
    balance, category_totals, goal_status, monthly_expenses, total_expenses, GoalStatus,
};

/// One slice of the spending-by-category chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Date the monthly figure was computed for
    pub reference_date: NaiveDate,
    pub income: Money,
    pub total_expenses: Money,
    pub savings_goal: Money,
    pub balance: Money,
    pub goal: GoalStatus,
    pub monthly_expenses: Money,
    /// Spending by category in first-seen order
    pub categories: Vec<CategoryShare>,
    /// Most recent expenses first
    pub recent: Vec<Expense>,
    pub expense_count: usize,
}

impl DashboardReport {
    /// Build the report from raw state
    pub fn generate(
        expenses: &[Expense],
        income: Money,
        savings_goal: Money,
        reference_date: NaiveDate,
        recent_limit: usize,
    ) -> Self {
        let total = total_expenses(expenses);
        let balance = balance(income, total);

        let categories = category_totals(expenses)
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percentage: percentage_of(amount, total),
                category,
                total: amount,
            })
            .collect();

        let mut recent = sort_for_display(expenses);
        recent.truncate(recent_limit);

        Self {
            reference_date,
            income,
            total_expenses: total,
            savings_goal,
            balance,
            goal: goal_status(savings_goal, balance),
            monthly_expenses: monthly_expenses(expenses, reference_date),
            categories,
            recent,
            expense_count: expenses.len(),
        }
    }

    /// Build the report from persisted state
    pub fn from_storage(
        storage: &Storage,
        reference_date: NaiveDate,
        recent_limit: usize,
    ) -> WellspaceResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let income = storage.income.get()?;
        let savings_goal = storage.savings_goal.get()?;

        Ok(Self::generate(
            &expenses,
            income,
            savings_goal,
            reference_date,
            recent_limit,
        ))
    }

    /// Goal line under the balance card
    pub fn goal_message(&self, currency_symbol: &str) -> String {
        match self.goal {
            GoalStatus::Unset => "Set a savings goal!".to_string(),
            GoalStatus::Remaining(gap) => format!(
                "{} away from your goal",
                gap.format_with_symbol(currency_symbol)
            ),
        }
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}
