//! Storage layer for WellSpace
//!
//! Each piece of state lives in its own JSON file with atomic writes. There is
//! no transaction spanning files: the expense list, income, and savings goal
//! are independent slots.

pub mod budget;
pub mod cell;
pub mod expenses;
pub mod file_io;
pub mod pin;

pub use budget::AmountRepository;
pub use cell::JsonCell;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or, write_json_atomic};
pub use pin::{PinRepository, StoredPin};

use crate::config::paths::WellspacePaths;
use crate::error::WellspaceError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: WellspacePaths,
    pub expenses: ExpenseRepository,
    pub income: AmountRepository,
    pub savings_goal: AmountRepository,
    pub pin: PinRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: WellspacePaths) -> Result<Self, WellspaceError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: AmountRepository::income(paths.income_file()),
            savings_goal: AmountRepository::savings_goal(paths.savings_goal_file()),
            pin: PinRepository::new(paths.pin_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &WellspacePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), WellspaceError> {
        self.pin.load()?;
        self.expenses.load()?;
        self.income.load()?;
        self.savings_goal.load()?;
        tracing::debug!(data_dir = %self.paths.data_dir().display(), "storage loaded");
        Ok(())
    }
}
