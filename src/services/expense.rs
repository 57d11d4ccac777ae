//! Expense service
//!
//! List operations over the expense list (upsert, remove, display order) and
//! the service that applies them to persisted state.

use chrono::NaiveDate;

use crate::error::{WellspaceError, WellspaceResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Replace the expense with the same id, or append it
///
/// Untouched entries keep their relative order.
pub fn upsert(list: &[Expense], expense: Expense) -> Vec<Expense> {
    let mut updated = list.to_vec();
    match updated.iter_mut().find(|e| e.id == expense.id) {
        Some(existing) => *existing = expense,
        None => updated.push(expense),
    }
    updated
}

/// Drop the expense with the given id; an unknown id leaves the list as is
pub fn remove(list: &[Expense], id: &ExpenseId) -> Vec<Expense> {
    list.iter().filter(|e| &e.id != id).cloned().collect()
}

/// Newest date first; same-day entries keep insertion order
pub fn sort_for_display(list: &[Expense]) -> Vec<Expense> {
    let mut sorted = list.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

/// Fields to change on an existing expense
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateExpenseInput {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(&self, input: CreateExpenseInput) -> WellspaceResult<Expense> {
        let expense = Expense::new(input.description, input.amount, input.category, input.date);
        self.save(expense)
    }

    /// Validate and upsert an expense
    pub fn save(&self, expense: Expense) -> WellspaceResult<Expense> {
        expense
            .validate()
            .map_err(|e| WellspaceError::Validation(e.to_string()))?;

        let saved = expense.clone();
        self.storage.expenses.apply(|list| upsert(list, expense))?;

        tracing::info!(id = %saved.id, category = %saved.category, amount = %saved.amount, "saved expense");
        Ok(saved)
    }

    /// Apply changes to an existing expense, identified by id or unique prefix
    pub fn update(&self, identifier: &str, input: UpdateExpenseInput) -> WellspaceResult<Expense> {
        if input.is_empty() {
            return Err(WellspaceError::Validation(
                "Nothing to update: pass at least one field to change".into(),
            ));
        }

        let mut expense = self.storage.expenses.find(identifier)?;

        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }
        if let Some(amount) = input.amount {
            expense.amount = amount;
        }
        if let Some(category) = input.category {
            expense.category = category.trim().to_string();
        }
        if let Some(date) = input.date {
            expense.date = date;
        }

        self.save(expense)
    }

    /// Delete an expense, identified by id or unique prefix
    pub fn delete(&self, identifier: &str) -> WellspaceResult<Expense> {
        let expense = self.storage.expenses.find(identifier)?;
        self.storage.expenses.apply(|list| remove(list, &expense.id))?;

        tracing::info!(id = %expense.id, "deleted expense");
        Ok(expense)
    }

    pub fn get(&self, identifier: &str) -> WellspaceResult<Expense> {
        self.storage.expenses.find(identifier)
    }

    /// All expenses in display order
    pub fn list(&self) -> WellspaceResult<Vec<Expense>> {
        Ok(sort_for_display(&self.storage.expenses.get_all()?))
    }
}
