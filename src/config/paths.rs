//! Path management for WellSpace
//!
//! ## Path Resolution Order
//!
//! 1. `WELLSPACE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `wellspace` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WellspaceError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WELLSPACE_DATA_DIR";

/// Manages all paths used by WellSpace
#[derive(Debug, Clone)]
pub struct WellspacePaths {
    /// Base directory for all WellSpace data
    base_dir: PathBuf,
}

impl WellspacePaths {
    /// Create a new WellspacePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, WellspaceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WellspacePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    pub fn savings_goal_file(&self) -> PathBuf {
        self.data_dir().join("savings_goal.json")
    }

    /// Get the path to the hashed PIN
    pub fn pin_file(&self) -> PathBuf {
        self.data_dir().join("pin.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WellspaceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WellspaceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WellspaceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if WellSpace has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, WellspaceError> {
    ProjectDirs::from("", "", "wellspace")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            WellspaceError::Config(format!(
                "Could not determine a home directory; set {} instead",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WellspacePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WellspacePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WellspacePaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data");

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.expenses_file(), data.join("expenses.json"));
        assert_eq!(paths.income_file(), data.join("income.json"));
        assert_eq!(paths.savings_goal_file(), data.join("savings_goal.json"));
        assert_eq!(paths.pin_file(), data.join("pin.json"));
    }
}
