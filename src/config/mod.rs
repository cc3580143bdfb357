//! Configuration module for Dogwood
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DogwoodPaths;
pub use settings::{ExportFormat, Settings};
