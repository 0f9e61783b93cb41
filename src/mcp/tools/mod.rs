//! MCP tools answering HR questions from the embedded dataset.
//!
//! Each module implements one family of queries:
//! - `company`: company profile, holiday schedule, HR contacts
//! - `policy`: single policy lookup and the policy catalog
//! - `department`: single department lookup and the department roster
//! - `employee`: roster search and employee details
//! - `vacation`: vacation accrual from a hire date
//!
//! Handlers are plain functions over `&Dataset` returning text; `respond`
//! turns their outcome into a `CallToolResult`.

pub mod company;
pub mod department;
pub mod employee;
pub mod policy;
pub mod vacation;

use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
};
use tracing::warn;

use crate::mcp::error::HrError;

/// Wraps a handler outcome as a single text item.
///
/// Lookup misses and malformed input are answered as text so the caller can
/// correct itself; only unrecoverable errors become protocol errors.
///
/// # Errors
/// Returns `ErrorData` for errors that are not [`HrError::is_recoverable`].
pub fn respond(outcome: Result<String, HrError>) -> Result<CallToolResult, ErrorData> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(err) if err.is_recoverable() => {
            warn!(%err, "query answered with a recoverable error");
            Ok(CallToolResult::success(vec![Content::text(err.to_string())]))
        }
        Err(err) => Err(err.into()),
    }
}
