//! Media API HTTP client.
//!
//! This module provides the request pipeline every resource operation uses:
//!
//! - **Build** the endpoint URL from the configured prefix and a path
//! - **Encode** query parameters and request bodies
//! - **Send** through a pluggable [`HttpClient`]
//! - **Capture** the raw response onto a typed result
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - MediaClient and the generic request pipeline
//! ├── transport - HttpClient trait and the reqwest implementation
//! ├── config    - Client configuration
//! └── utils     - Utility functions
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MediaClient`] | Client with typed resource operations |
//! | [`HttpClient`] | Transport executing built requests |
//! | [`ClientConfig`] | Client configuration options |
//! | [`RequestBody`] | JSON or form body of a request |
//!
//! # Examples
//!
//! ```
//! use mediakit_http::client::{ClientConfig, MediaClient};
//!
//! // Default configuration
//! let client = MediaClient::new();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     request_timeout_ms: 10_000,
//!     enable_logging: false,
//!     ..ClientConfig::new("https://media.example.com/v1/")
//! };
//! let client = MediaClient::with_config(config);
//! ```

mod config;
mod fetch;
mod transport;
mod utils;

pub use config::ClientConfig;
pub use fetch::{MediaClient, RequestBody};
pub use transport::HttpClient;
pub use utils::*;
