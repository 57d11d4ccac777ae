//! Budget scalar repositories
//!
//! Income and the savings goal are independent amounts, each persisted in its
//! own file as a bare JSON number (minor units). Nothing links them to each
//! other or to the expense list.

use std::path::PathBuf;

use crate::error::WellspaceError;
use crate::models::Money;

use super::cell::JsonCell;

/// Repository for a single persisted amount
pub struct AmountRepository {
    name: &'static str,
    cell: JsonCell<Money>,
}

impl AmountRepository {
    pub fn new(name: &'static str, path: PathBuf) -> Self {
        Self {
            name,
            cell: JsonCell::new(path, Money::zero),
        }
    }

    /// Repository for the monthly income
    pub fn income(path: PathBuf) -> Self {
        Self::new("income", path)
    }

    /// Repository for the savings goal
    pub fn savings_goal(path: PathBuf) -> Self {
        Self::new("savings goal", path)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Load from disk (missing file means zero)
    pub fn load(&self) -> Result<(), WellspaceError> {
        self.cell.load()
    }

    pub fn get(&self) -> Result<Money, WellspaceError> {
        self.cell.get()
    }

    /// Persist a new amount
    pub fn set(&self, amount: Money) -> Result<(), WellspaceError> {
        self.cell.replace(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = AmountRepository::income(temp_dir.path().join("income.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Money::zero());
        assert_eq!(repo.name(), "income");
    }

    #[test]
    fn test_set_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings_goal.json");

        AmountRepository::savings_goal(path.clone())
            .set(Money::from_units(200))
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "20000");

        let repo = AmountRepository::savings_goal(path);
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Money::from_units(200));
    }

    #[test]
    fn test_income_and_goal_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let income = AmountRepository::income(temp_dir.path().join("income.json"));
        let goal = AmountRepository::savings_goal(temp_dir.path().join("savings_goal.json"));

        income.set(Money::from_units(500)).unwrap();
        goal.load().unwrap();
        assert_eq!(goal.get().unwrap(), Money::zero());
    }
}
