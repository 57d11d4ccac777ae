//! Category suggestion CLI command
//!
//! Unlike `expense add`, a failed suggestion here is reported as an error.

use crate::advisor;
use crate::config::settings::Settings;
use crate::error::WellspaceResult;

pub fn handle_suggest_command(settings: &Settings, description: &str) -> WellspaceResult<()> {
    let advisor = advisor::from_settings(&settings.advisor)?;
    let suggestion = advisor.suggest(description)?;

    println!("Suggested category: {}", suggestion.category);
    Ok(())
}
