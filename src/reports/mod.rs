//! Reports for WellSpace
//!
//! - `aggregate`: pure totals over the expense list
//! - `dashboard`: the combined figures shown by `wellspace dashboard`

pub mod aggregate;
pub mod dashboard;

pub use aggregate::{
    balance, category_totals, goal_gap, goal_status, monthly_expenses, total_expenses, GoalStatus,
};
pub use dashboard::{CategoryShare, DashboardReport};
