//! Utility functions and types for the betting strategy.

pub mod error;
mod logging;

pub use error::{Error, Result};
pub use logging::{crate_filter, init_logging, LOG_ENV, LOG_STYLE_ENV};
#[cfg(test)]
pub(crate) use logging::init_test_logging;
