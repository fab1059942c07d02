//! Common utilities module
//!
//! This module contains shared utilities used across the classification pipeline.

pub mod error;

pub use error::{ClassificationError, Result};
