//! Error types for the HR MCP implementation.
//!
//! This module contains the custom error types used across the HR server.
//! It provides:
//! - `HrError`: lookup misses, malformed input, dataset integrity and configuration failures
//! - `HrError::is_recoverable`: which errors are answered to the caller as plain text
//! - Conversion to RMCP's `ErrorData` for everything else

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Policy '{}' not found. Available policies: {}", .key, .available.join(", "))]
    PolicyNotFound { key: String, available: Vec<String> },

    #[error("Department '{}' not found. Available departments: {}", .key, .available.join(", "))]
    DepartmentNotFound { key: String, available: Vec<String> },

    #[error("Employee with ID '{0}' not found")]
    EmployeeNotFound(String),

    #[error("Invalid date format '{0}'. Please use YYYY-MM-DD format.")]
    InvalidDate(String),

    #[error("Employee {employee} references unknown department '{department}'")]
    UnknownDepartment { employee: String, department: String },

    #[error("Duplicate employee ID: {0}")]
    DuplicateEmployee(String),

    #[error("Duplicate policy key: {0}")]
    DuplicatePolicy(String),

    #[error("Duplicate department key: {0}")]
    DuplicateDepartment(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HrError {
    /// Whether the error is an expected outcome of a query that the caller
    /// should receive as an ordinary text answer.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PolicyNotFound { .. }
                | Self::DepartmentNotFound { .. }
                | Self::EmployeeNotFound(_)
                | Self::InvalidDate(_)
        )
    }
}

impl From<HrError> for ErrorData {
    fn from(err: HrError) -> Self {
        match err {
            HrError::PolicyNotFound { .. }
            | HrError::DepartmentNotFound { .. }
            | HrError::EmployeeNotFound(_)
            | HrError::InvalidDate(_) => {
                Self::new(ErrorCode::INVALID_PARAMS, err.to_string(), None)
            }
            HrError::UnknownDepartment { .. }
            | HrError::DuplicateEmployee(_)
            | HrError::DuplicatePolicy(_)
            | HrError::DuplicateDepartment(_)
            | HrError::InvalidConfig(_) => {
                Self::new(ErrorCode::INTERNAL_ERROR, err.to_string(), None)
            }
            HrError::Internal(e) => Self::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None),
        }
    }
}
