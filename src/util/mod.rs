//! Shared utilities: constants, error types and formatting helpers.

pub mod constants;
pub mod error;
pub mod format;
