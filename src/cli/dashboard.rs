//! Dashboard CLI command

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::WellspaceResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Print the dashboard; `date` picks the month for the monthly figure
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<&str>,
) -> WellspaceResult<()> {
    let reference_date = parse_date_or_today(date)?;
    let report =
        DashboardReport::from_storage(storage, reference_date, settings.recent_expense_limit)?;

    print!(
        "{}",
        format_dashboard(&report, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
