//! Dogwood - terminal catalogue for a government design system
//!
//! This library holds the catalogue data and the logic behind the `dogwood`
//! command: component lookups and filters, pattern, template and colour
//! listings, and the benefit application wizard state machine.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Catalogue records and the wizard step model
//! - `registry`: The built-in catalogue tables
//! - `services`: Lookups, filters and the wizard controller
//! - `audit`: Audit log of wizard sessions
//! - `display`: Plain-text formatting for terminal output
//! - `export`: JSON, YAML and CSV export and import
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use dogwood::models::{BenefitStep, WizardAction};
//! use dogwood::services::{ComponentCatalogue, WizardController};
//!
//! let catalogue = ComponentCatalogue::builtin();
//! assert!(catalogue.get_entry("button").is_some());
//!
//! let mut wizard: WizardController = WizardController::new();
//! wizard.apply(WizardAction::Next);
//! assert_eq!(wizard.current(), BenefitStep::Household);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod services;
pub mod tui;

pub use error::DogwoodError;
