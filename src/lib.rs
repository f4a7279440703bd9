//! # mediakit_http: typed HTTP binding for a media-management API
//!
//! Callers describe requests as ordinary `serde` structs; this crate turns them
//! into HTTP requests and turns responses back into typed results that keep the
//! raw status, headers and body they came from.
//!
//! ## Overview
//!
//! The request pipeline is built from four small pieces:
//!
//! 1. **Parameter encoding** - any `Serialize` struct becomes ordered query
//!    parameters; arrays expand to `name[0]`, `name[1]`, strings are sent raw
//! 2. **Path building** - heterogeneous segments are joined with empty
//!    segments dropped, so optional path parts need no branching
//! 3. **Response metadata capture** - every response type carries a write-once
//!    [`Response`] holder filled through the [`MetaSetter`] capability
//! 4. **Error parsing** - failure bodies decode into [`ApiError`], or surface
//!    the decode failure itself
//!
//! ## Client Usage
//!
//! ```ignore
//! use mediakit_http::client::{ClientConfig, MediaClient};
//! use mediakit_http::media::{AssetSort, AssetsParam};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MediaClient::with_config(ClientConfig::new("https://media.example.com/v1/"));
//!
//!     let params = AssetsParam {
//!         tags: vec!["beach".to_string(), "summer".to_string()],
//!         sort: Some(AssetSort::DescCreated),
//!         ..Default::default()
//!     };
//!     let assets = client.assets(&params).await?;
//!
//!     for asset in &assets.data {
//!         println!("{} {}", asset.file_id, asset.url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//!
//! ```
//! use mediakit_http::build_path;
//! use mediakit_http::protocol::{is_base64_data, struct_to_params};
//! use serde_json::json;
//!
//! let params = struct_to_params(&json!({"tags": ["a", "b"], "path": "/"})).unwrap();
//! assert_eq!(params.get("tags[1]"), Some("b"));
//! assert_eq!(params.get("path"), Some("/"));
//!
//! let version: Option<&str> = None;
//! assert_eq!(build_path!("files", "123", "versions", version.unwrap_or_default()), "files/123/versions");
//!
//! assert!(is_base64_data("data:image/png;base64,iVBORw0KGgo="));
//! ```
//!
//! ## Module Structure
//!
//! - **[protocol]** - Parameter encoding, path building and input classification
//! - **[response]** - Response metadata and the response capability
//! - **[error]** - Error types and the error body parser
//! - **[client]** - HTTP client, transport and configuration
//! - **[media]** - Media library operations and their types

pub mod client;
pub mod error;
pub mod media;
pub mod protocol;
pub mod response;

pub use client::{ClientConfig, HttpClient, MediaClient};
pub use error::{parse_error, ApiError, MediaError, Result};
pub use protocol::{build_path, struct_to_params, QueryParams};
pub use response::{set_response_meta, ApiResponse, HasResponse, MetaSetter, Response, ResponseMetaData};
