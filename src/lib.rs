//! Travel MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a fixed
//! catalog of travel-domain tools: destination lookup, travel tips, flight
//! search, weather forecasts, and attraction/restaurant search.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: the static, read-only destination/tip knowledge store
//!   - **providers**: clients for the upstream travel APIs (flights, weather, places)
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
