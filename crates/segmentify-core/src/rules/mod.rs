//! Segment rule sections.
//!
//! A section is a `[segment:<name>]` block: a `@Home` preamble, labelled rules,
//! a catch-all sink and an end comment. Data-driven sections are rendered from a
//! sorted tally and close with an analysis comment block; static sections are
//! fixed text.

mod render;
mod section;
mod templates;

pub use render::{rule_for, write_data_section, write_static_section, Rule};
pub use section::{SectionKind, SectionPlan};
pub use templates::static_body;
