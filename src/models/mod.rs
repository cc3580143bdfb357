//! Core data models for Dogwood
//!
//! This module contains the data structures of the design-system catalogue:
//! component records, documentation entries and their previews, pattern and
//! template listings, colour tokens, and the wizard step model.

pub mod color;
pub mod component;
pub mod entry;
pub mod ids;
pub mod listing;
pub mod preview;
pub mod wizard;

pub use color::{ColorFamily, ColorScale, Shade};
pub use component::{ComponentCategory, ComponentMeta, ComponentStatus, Tier};
pub use entry::{CatalogueEntry, PropDef, VariantPreview};
pub use ids::SessionId;
pub use listing::{PatternMeta, TemplateCategory, TemplateMeta};
pub use preview::{Preview, PreviewElement};
pub use wizard::{BenefitStep, StepStatus, Transition, WizardAction, WizardStep};
