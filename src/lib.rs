//! WellSpace - PIN-protected personal expense tracker
//!
//! This library provides the core functionality for the WellSpace command
//! line application: recording expenses, tracking income against a savings
//! goal, and suggesting expense categories with a generative model.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregates and the dashboard
//! - `auth`: PIN gate
//! - `advisor`: Category suggestions
//! - `display` and `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use wellspace::config::{paths::WellspacePaths, settings::Settings};
//!
//! let paths = WellspacePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod advisor;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::WellspaceError;
