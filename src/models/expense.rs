//! Expense model
//!
//! A single record of money spent. Expenses are owned by the persisted
//! expense list and carry no references to other entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::MAX_CATEGORY_LEN;
use super::ids::ExpenseId;
use super::money::Money;

/// Maximum accepted description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Free-form category label, compared case-sensitively
    pub category: String,

    /// Calendar date of the expense (ISO-8601)
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::with_id(ExpenseId::new(), description, amount, category, date)
    }

    /// Create an expense with a known id
    pub fn with_id(
        id: impl Into<ExpenseId>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into().trim().to_string(),
            amount,
            category: category.into().trim().to_string(),
            date,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ExpenseValidationError::EmptyId);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(
                self.description.chars().count(),
            ));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.category.chars().count() > MAX_CATEGORY_LEN {
            return Err(ExpenseValidationError::CategoryTooLong(
                self.category.chars().count(),
            ));
        }

        Ok(())
    }

    /// Check whether the expense falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyId,
    EmptyDescription,
    DescriptionTooLong(usize),
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
    CategoryTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Expense id cannot be empty"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description is too long ({} characters, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount is too large (got {}, max {})",
                amount,
                Money::MAX_AMOUNT
            ),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::CategoryTooLong(len) => write!(
                f,
                "Category is too long ({} characters, max {})",
                len, MAX_CATEGORY_LEN
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
