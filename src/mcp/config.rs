//! Environment-based configuration for the HR MCP server.
//!
//! Values are read once (after `.env` has been loaded) and memoised:
//! - `HR_BIND_ADDRESS`: socket address to listen on, default `0.0.0.0:8080`
//! - `HR_MCP_PATH`: path the MCP service is mounted under, default `/mcp`
//! - `HR_LOG_FORMAT`: `text` (default) or `json`

use std::{env, net::SocketAddr, sync::LazyLock};

use crate::mcp::error::HrError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MCP_PATH: &str = "/mcp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub static BIND_ADDRESS: LazyLock<Result<SocketAddr, HrError>> =
    LazyLock::new(|| parse_bind_address(env::var("HR_BIND_ADDRESS").ok().as_deref()));

pub static MCP_PATH: LazyLock<Result<String, HrError>> =
    LazyLock::new(|| parse_mcp_path(env::var("HR_MCP_PATH").ok().as_deref()));

pub static LOG_FORMAT: LazyLock<Result<LogFormat, HrError>> =
    LazyLock::new(|| parse_log_format(env::var("HR_LOG_FORMAT").ok().as_deref()));

/// # Errors
/// `InvalidConfig` when the value is not a socket address.
pub fn parse_bind_address(raw: Option<&str>) -> Result<SocketAddr, HrError> {
    let raw = raw.map_or(DEFAULT_BIND_ADDRESS, str::trim);
    raw.parse().map_err(|e| {
        HrError::InvalidConfig(format!("HR_BIND_ADDRESS '{raw}' is not a socket address: {e}"))
    })
}

/// # Errors
/// `InvalidConfig` when the path does not start with `/`.
pub fn parse_mcp_path(raw: Option<&str>) -> Result<String, HrError> {
    let path = raw.map_or(DEFAULT_MCP_PATH, str::trim);
    if !path.starts_with('/') || path.len() < 2 {
        return Err(HrError::InvalidConfig(format!(
            "HR_MCP_PATH '{path}' must start with '/' and name a path"
        )));
    }
    Ok(path.trim_end_matches('/').to_string())
}

/// # Errors
/// `InvalidConfig` for anything other than `text` or `json`.
pub fn parse_log_format(raw: Option<&str>) -> Result<LogFormat, HrError> {
    match raw.map(|value| value.trim().to_lowercase()).as_deref() {
        None | Some("" | "text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(HrError::InvalidConfig(format!(
            "HR_LOG_FORMAT '{other}' must be 'text' or 'json'"
        ))),
    }
}
