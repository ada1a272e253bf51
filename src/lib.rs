//! # tdx-mcp
//!
//! tdx-mcp is an MCP (Model Context Protocol) server for the TeamDynamix
//! (TDX) ticketing web API.
//!
//! It exposes TDX ticket operations as MCP tools, enabling AI assistants
//! to search tickets, read their details and activity feeds, and look up
//! forms and assignable resources.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with secret redaction
//! - [`tdx_client`] - Authenticated HTTP client with token caching
//! - [`server`] - MCP server implementation with tool routing
//! - [`models`] - Data models for TDX API requests and responses
//! - [`tools`] - Tool inputs and handlers
//!
//! ## Authentication
//!
//! The client logs in lazily on the first request, using either
//! username/password (`login`) or BEID/web services key (`loginadmin`).
//! The returned bearer token is cached for 23 hours and renewed on the
//! first request after that.
//!
//! ## Security Considerations
//!
//! Passwords, web services keys and bearer tokens are stored only in memory
//! and are:
//! - Never logged at any log level
//! - Redacted from all error messages
//! - Not included in any tool responses
//!
//! ## Example
//!
//! Using the [`TdxClient`](tdx_client::TdxClient) directly:
//!
//! ```ignore
//! use tdx_mcp::config::Config;
//! use tdx_mcp::tdx_client::TdxClient;
//!
//! async fn example() -> Result<(), tdx_mcp::error::TdxError> {
//!     let config = Config::from_env()?;
//!     let client = TdxClient::new(&config)?;
//!
//!     if let Some(feed) = client.get("/tickets/12345/feed").await? {
//!         println!("{}", feed);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tdx_client;
pub mod tools;
