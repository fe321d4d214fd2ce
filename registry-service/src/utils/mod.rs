//! Utility functions
//!
//! Stateless string helpers. Neither module depends on the registry.

pub mod formatting;
pub mod validation;
