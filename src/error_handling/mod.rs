//! Error handling.
//!
//! Per-probe conditions (empty answers, malformed lines, oracle timeouts)
//! are not errors and never surface here; the types below cover the fatal
//! cases only.

mod types;

pub use types::{HostnameError, InitializationError};
