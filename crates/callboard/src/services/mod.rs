//! Pipeline Services
//!
//! The stages between a raw feed payload and the presentation layer:
//! normalize -> {filter (table), analytics (stats/charts)} -> view.

pub mod analytics;
pub mod filter;
pub mod normalize;
pub mod view;
