//! Core utilities for the ESPN Fantasy Football client
//!
//! - `config`: league id / credential resolution from args and environment
//! - `filters`: `x-fantasy-filter` header payloads
//! - `http`: credentials and per-request configuration

pub mod config;
pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{resolve_league_id, ClientConfig};
pub use filters::{free_agent_filter, FantasyFilter, IntoHeaderValue, Val};
pub use http::{build_request_config, Credentials, RequestConfig};
