//! Utilities for schema_naming
//!
//! This module provides helper functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{camel_case, camel_join, non_empty, snake_case, snake_join};
