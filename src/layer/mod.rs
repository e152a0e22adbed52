//! Tower layers for task services

pub mod validation;

pub use validation::{TaskValidationLayer, TaskValidationService};
