//! High-level business logic composing repositories and rules.

pub mod report;
pub mod timeline;
pub mod validation;

pub use report::ReportService;
pub use validation::{validate_scenario, FieldError};
