//! API client implementation.

mod config;
mod fetch;

pub use config::ClientConfig;
pub use fetch::ApiClient;
