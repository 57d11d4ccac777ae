//! Dashboard display formatting
//!
//! Text rendering of the dashboard: summary cards, spending by category as a
//! bar chart, and recent expenses.

use crate::models::Money;
use crate::reports::DashboardReport;

use super::expense::{format_expense_table, truncate};

const BAR_WIDTH: usize = 24;
const RULE_WIDTH: usize = 60;

/// Format a percentage with adaptive precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Simple horizontal bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the whole dashboard
pub fn format_dashboard(report: &DashboardReport, currency_symbol: &str, date_format: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let mut output = String::new();

    output.push_str("WellSpace Dashboard\n");
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');

    output.push_str(&format!("Total Income:        {:>20}\n", money(report.income)));
    output.push_str(&format!(
        "Total Expenses:      {:>20}\n",
        money(report.total_expenses)
    ));
    output.push_str(&format!("Savings Goal:        {:>20}\n", money(report.savings_goal)));
    output.push_str(&format!(
        "Expenses this month: {:>20}  ({})\n",
        money(report.monthly_expenses),
        report.reference_date.format("%B %Y")
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!("Balance:             {:>20}\n", money(report.balance)));

    let marker = if report.goal.is_reached() { " ✓" } else { "" };
    output.push_str(&format!("{}{}\n", report.goal_message(currency_symbol), marker));

    output.push('\n');
    output.push_str("Spending by Category\n");
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    if report.categories.is_empty() {
        output.push_str("No expenses yet.\n");
    } else {
        let max = report
            .categories
            .iter()
            .map(|c| c.percentage)
            .fold(0.0_f64, f64::max);

        for share in &report.categories {
            output.push_str(&format!(
                "{:<14} {} {:>6} {:>14}\n",
                truncate(&share.category, 14),
                format_bar(share.percentage, max, BAR_WIDTH),
                format_percentage(share.percentage),
                money(share.total)
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Recent Expenses ({} of {})\n",
        report.recent.len(),
        report.expense_count
    ));
    output.push_str(&format_expense_table(&report.recent, currency_symbol, date_format));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(goal: Money) -> DashboardReport {
        let expenses = vec![
            Expense::with_id("1", "Lunch", Money::from_units(50), "Food", date(2024, 1, 5)),
            Expense::with_id("2", "Bus", Money::from_units(30), "Transport", date(2024, 1, 20)),
        ];
        DashboardReport::generate(&expenses, Money::from_units(200), goal, date(2024, 1, 31), 10)
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(62.5), "62%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
        assert_eq!(format_bar(200.0, 100.0, 2), "██");
    }

    #[test]
    fn test_dashboard_contents() {
        let output = format_dashboard(&report(Money::from_units(200)), "₦", "%Y-%m-%d");

        assert!(output.contains("₦200.00"));
        assert!(output.contains("₦80.00"));
        assert!(output.contains("₦120.00"));
        assert!(output.contains("January 2024"));
        assert!(output.contains("₦80.00 away from your goal"));
        assert!(output.contains("Food"));
        assert!(output.contains("Transport"));
        assert!(output.contains("Recent Expenses (2 of 2)"));
    }

    #[test]
    fn test_dashboard_without_goal() {
        let output = format_dashboard(&report(Money::zero()), "₦", "%Y-%m-%d");
        assert!(output.contains("Set a savings goal!"));
    }

    #[test]
    fn test_goal_reached_marker() {
        let output = format_dashboard(&report(Money::from_units(100)), "₦", "%Y-%m-%d");
        assert!(output.contains("₦0.00 away from your goal ✓"));
    }

    #[test]
    fn test_empty_dashboard() {
        let report = DashboardReport::generate(&[], Money::zero(), Money::zero(), date(2024, 1, 1), 10);
        let output = format_dashboard(&report, "₦", "%Y-%m-%d");
        assert!(output.contains("No expenses yet."));
        assert!(output.contains("No expenses recorded yet."));
    }
}
