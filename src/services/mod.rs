//! Service layer for WellSpace
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and list operations.

pub mod budget;
pub mod expense;

pub use budget::{parse_amount, BudgetService};
pub use expense::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
