//! Configuration module for WellSpace
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Category advisor connection settings

pub mod paths;
pub mod settings;

pub use paths::WellspacePaths;
pub use settings::{AdvisorSettings, Settings};
