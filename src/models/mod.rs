//! Core data models for WellSpace
//!
//! Expenses, their identifiers, category labels, and the money type shared
//! by expenses, income, and the savings goal.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{canonical_label, KNOWN_CATEGORIES};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
