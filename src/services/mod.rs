//! Service layer for Dogwood
//!
//! Services borrow the read-only registry and answer the questions the
//! host surfaces ask: component lookups and filters, listings, token
//! lookups, and the wizard state machine.

pub mod catalogue;
pub mod pattern;
pub mod template;
pub mod tokens;
pub mod wizard;

pub use catalogue::{ComponentCatalogue, ComponentFilter, ComponentPage};
pub use pattern::PatternService;
pub use template::{TemplateGroup, TemplateService};
pub use tokens::{ColorToken, TokenService};
pub use wizard::{confirmation_number, WizardController, WizardSession};
