//! Budget service
//!
//! Income and savings goal management. Both are plain non-negative amounts
//! with no relation to each other.

use crate::error::{WellspaceError, WellspaceResult};
use crate::models::Money;
use crate::storage::{AmountRepository, Storage};

/// Parse a user-entered amount, rejecting negatives and anything above
/// [`Money::MAX_AMOUNT`]
pub fn parse_amount(input: &str) -> WellspaceResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| WellspaceError::Validation(format!("Invalid amount: {}", e)))?;

    if amount.is_negative() {
        return Err(WellspaceError::Validation(format!(
            "Amount cannot be negative: {}",
            input.trim()
        )));
    }

    if amount > Money::MAX_AMOUNT {
        return Err(WellspaceError::Validation(format!(
            "Amount is too large: {} (max {})",
            input.trim(),
            Money::MAX_AMOUNT
        )));
    }

    Ok(amount)
}

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn income(&self) -> WellspaceResult<Money> {
        self.storage.income.get()
    }

    pub fn set_income(&self, amount: Money) -> WellspaceResult<Money> {
        set_non_negative(&self.storage.income, amount)
    }

    pub fn savings_goal(&self) -> WellspaceResult<Money> {
        self.storage.savings_goal.get()
    }

    /// Set the savings goal; zero clears it
    pub fn set_savings_goal(&self, amount: Money) -> WellspaceResult<Money> {
        set_non_negative(&self.storage.savings_goal, amount)
    }
}

fn set_non_negative(repo: &AmountRepository, amount: Money) -> WellspaceResult<Money> {
    if amount.is_negative() {
        return Err(WellspaceError::Validation(format!(
            "The {} cannot be negative",
            repo.name()
        )));
    }

    if amount > Money::MAX_AMOUNT {
        return Err(WellspaceError::Validation(format!(
            "The {} cannot exceed {}",
            repo.name(),
            Money::MAX_AMOUNT
        )));
    }

    repo.set(amount)?;
    tracing::info!(slot = repo.name(), %amount, "updated budget amount");
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WellspacePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WellspacePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,500.25").unwrap(), Money::from_cents(150025));
        assert!(parse_amount("-3").unwrap_err().is_validation());
        assert!(parse_amount("lots").unwrap_err().is_validation());
        assert!(parse_amount("--5").unwrap_err().is_validation());
        assert!(parse_amount("10.999").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_upper_bound() {
        assert_eq!(
            parse_amount("1,000,000,000,000").unwrap(),
            Money::MAX_AMOUNT
        );
        let err = parse_amount("90000000000000000").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_amount_above_max_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .set_savings_goal(Money::MAX_AMOUNT + Money::from_cents(1))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.savings_goal().unwrap(), Money::zero());
    }

    #[test]
    fn test_set_income_and_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_income(Money::from_units(200)).unwrap();
        service.set_savings_goal(Money::from_units(50)).unwrap();

        assert_eq!(service.income().unwrap(), Money::from_units(200));
        assert_eq!(service.savings_goal().unwrap(), Money::from_units(50));
    }

    #[test]
    fn test_negative_rejected_and_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.set_income(Money::from_units(10)).unwrap();

        let err = service.set_income(Money::from_units(-1)).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: The income cannot be negative");
        assert_eq!(service.income().unwrap(), Money::from_units(10));
    }
}
