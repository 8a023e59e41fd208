//! Initialization of shared resources: logger, DNS resolver, HTTP client.

mod client;
mod logger;
mod resolver;

pub use client::init_http_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
