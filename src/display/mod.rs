//! Display formatting for terminal output
//!
//! Formats catalogue data and wizard screens as plain text: `tabled` tables
//! for listings, hand-laid detail views for single records.

pub mod color;
pub mod component;
pub mod listing;
pub mod preview;
pub mod wizard;

pub use color::{format_color_families, format_color_family, format_color_token};
pub use component::{format_category_counts, format_component_page, format_component_table};
pub use listing::{format_pattern_details, format_pattern_list, format_template_groups};
pub use preview::format_preview;
pub use wizard::{action_label, format_step_indicator, format_wizard_screen};
