//! Tools for searching the employee roster and reading a single record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mcp::{
    dataset::Dataset,
    error::HrError,
    format,
    matching::{self, catalog_key},
};

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct EmployeeSearchRequest {
    #[schemars(
        description = "Name, employee ID, department or role to search for, e.g. engineering"
    )]
    pub search_term: String,
}

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct EmployeeRequest {
    #[schemars(description = "The employee's ID, e.g. EMP001")]
    pub employee_id: String,
}

/// Zero matches is an ordinary answer, not an error.
#[must_use]
pub fn search_employee(dataset: &Dataset, search_term: &str) -> String {
    let hits = matching::search_employees(dataset, search_term);
    debug!(matches = hits.len(), "employee search");
    format::search_results(dataset, &catalog_key(search_term), &hits)
}

/// # Errors
/// `EmployeeNotFound` with the normalised id when no employee has it.
pub fn get_employee_details(dataset: &Dataset, employee_id: &str) -> Result<String, HrError> {
    let id = matching::employee_id(employee_id);
    debug!(%id, "employee lookup");
    matching::find_employee(dataset, &id)
        .map(|employee| format::employee(dataset, employee))
        .ok_or(HrError::EmployeeNotFound(id))
}
