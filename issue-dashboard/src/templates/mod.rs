//! Template rendering using Handlebars.
//!
//! The dashboard page is rendered with HTML escaping; the markdown report
//! is rendered verbatim.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, Escaping, TemplateRenderer};

/// Dashboard page template.
pub const DASHBOARD_TEMPLATE: &str = include_str!("../../assets/dashboard.html.hbs");

/// Markdown report template.
pub const REPORT_TEMPLATE: &str = include_str!("../../assets/report.md.hbs");
