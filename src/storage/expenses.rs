//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list to expenses.json. The file
//! holds a bare JSON array in insertion order.

use std::path::PathBuf;

use crate::error::WellspaceError;
use crate::models::{Expense, ExpenseId};

use super::cell::JsonCell;

/// Repository for the persisted expense list
pub struct ExpenseRepository {
    cell: JsonCell<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            cell: JsonCell::new(path, Vec::new),
        }
    }

    /// Load expenses from disk (missing file means no expenses)
    pub fn load(&self) -> Result<(), WellspaceError> {
        self.cell.load()
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, WellspaceError> {
        self.cell.get()
    }

    pub fn get(&self, id: &ExpenseId) -> Result<Option<Expense>, WellspaceError> {
        Ok(self.cell.get()?.into_iter().find(|e| &e.id == id))
    }

    /// Resolve an id given in full or as a unique prefix
    pub fn find(&self, identifier: &str) -> Result<Expense, WellspaceError> {
        let identifier = identifier.trim();
        let expenses = self.cell.get()?;

        if let Some(exact) = expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(exact.clone());
        }

        let mut matches: Vec<Expense> = expenses
            .into_iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Err(WellspaceError::expense_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(WellspaceError::Ambiguous {
                entity_type: "Expense",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// Replace the list with `f(current)` after persisting it
    pub fn apply<F>(&self, f: F) -> Result<Vec<Expense>, WellspaceError>
    where
        F: FnOnce(&[Expense]) -> Vec<Expense>,
    {
        self.cell.update(|current| f(current.as_slice()))
    }

    pub fn count(&self) -> Result<usize, WellspaceError> {
        Ok(self.cell.get()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(id: &str) -> Expense {
        Expense::with_id(
            id,
            "Lunch",
            Money::from_units(10),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_save_and_load_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        {
            let repo = ExpenseRepository::new(path.clone());
            repo.apply(|_| vec![expense("b"), expense("a"), expense("c")])
                .unwrap();
        }

        let repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        let ids: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_file_is_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path.clone());
        repo.apply(|_| vec![expense("1")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "1");
    }

    #[test]
    fn test_find_by_exact_and_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo.apply(|_| vec![expense("abc1"), expense("abd2"), expense("ab")])
            .unwrap();

        assert_eq!(repo.find("ab").unwrap().id.as_str(), "ab");
        assert_eq!(repo.find("abc").unwrap().id.as_str(), "abc1");
        assert!(repo.find("zzz").unwrap_err().is_not_found());
        assert!(matches!(
            repo.find("abd2x"),
            Err(WellspaceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_ambiguous_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo.apply(|_| vec![expense("abc1"), expense("abc2")]).unwrap();

        assert!(matches!(
            repo.find("abc"),
            Err(WellspaceError::Ambiguous { matches: 2, .. })
        ));
    }

    #[test]
    fn test_get_and_count() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        assert_eq!(repo.count().unwrap(), 0);

        repo.apply(|_| vec![expense("1")]).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get(&ExpenseId::from("1")).unwrap().is_some());
        assert!(repo.get(&ExpenseId::from("2")).unwrap().is_none());
    }
}
