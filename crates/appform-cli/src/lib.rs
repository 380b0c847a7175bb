//! CLI library components for the application-form validator.

pub mod logging;
pub mod replay;
