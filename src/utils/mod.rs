//! Utility modules
//!
//! Provides logging initialization and timestamp helpers.

pub mod logging;
pub mod time;

pub use logging::init_logging;
