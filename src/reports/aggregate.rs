//! Expense aggregation
//!
//! Pure functions deriving totals from the expense list. Nothing here is
//! cached; callers recompute from the full list every time. The "current
//! month" is always an explicit reference date.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::models::{Expense, Money};

/// Sum of all expense amounts (zero for an empty list)
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Income minus total expenses; may be negative
pub fn balance(income: Money, total_expenses: Money) -> Money {
    income - total_expenses
}

/// Sum of expenses dated in the same calendar month and year as `reference`
pub fn monthly_expenses(expenses: &[Expense], reference: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.is_in_month(reference.year(), reference.month()))
        .map(|e| e.amount)
        .sum()
}

/// Totals grouped by category, in first-seen order
///
/// Categories are compared exactly: "Food" and "food" are different groups.
pub fn category_totals(expenses: &[Expense]) -> IndexMap<String, Money> {
    let mut totals: IndexMap<String, Money> = IndexMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Shortfall between the savings goal and the balance, never negative
pub fn goal_gap(savings_goal: Money, balance: Money) -> Money {
    let gap = savings_goal - balance;
    if gap.is_positive() {
        gap
    } else {
        Money::zero()
    }
}

/// Where the balance stands relative to the savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    /// No goal set (goal <= 0)
    Unset,
    /// Amount still missing; zero means the goal is reached
    Remaining(Money),
}

impl GoalStatus {
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Remaining(gap) if gap.is_zero())
    }
}

/// Goal status, treating a non-positive goal as unset
pub fn goal_status(savings_goal: Money, balance: Money) -> GoalStatus {
    if !savings_goal.is_positive() {
        GoalStatus::Unset
    } else {
        GoalStatus::Remaining(goal_gap(savings_goal, balance))
    }
}
