//! Shared utilities for permchain.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_elapsed;
