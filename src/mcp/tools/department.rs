//! Tools for the department catalog.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mcp::{dataset::Dataset, error::HrError, format, matching::catalog_key};

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct DepartmentRequest {
    #[schemars(
        description = "Department name: engineering, sales, marketing, hr, finance or operations"
    )]
    pub department: String,
}

/// # Errors
/// `DepartmentNotFound` listing every known key when nothing matches.
pub fn get_department_info(dataset: &Dataset, department: &str) -> Result<String, HrError> {
    let key = catalog_key(department);
    debug!(%key, "department lookup");
    dataset
        .department(&key)
        .map(format::department)
        .ok_or_else(|| HrError::DepartmentNotFound {
            available: dataset.department_keys().map(str::to_string).collect(),
            key,
        })
}

#[must_use]
pub fn list_departments(dataset: &Dataset) -> String {
    format::department_list(dataset.departments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::dataset::tests::seeded;

    #[test]
    fn finds_department_case_insensitively() {
        let dataset = seeded();
        let text = get_department_info(&dataset, "  HR").unwrap();
        assert_eq!(text, "Department: Human Resources\nManager: David Kim\nNumber of Employees: 8");
    }

    #[test]
    fn unknown_department_lists_alternatives() {
        let dataset = seeded();
        let err = get_department_info(&dataset, "Legal").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Department 'legal' not found. Available departments: engineering, sales, marketing, hr, finance, operations"
        );
    }

    #[test]
    fn listing_follows_catalog_order() {
        let dataset = seeded();
        let text = list_departments(&dataset);
        let names: Vec<_> = text
            .lines()
            .skip(1)
            .filter_map(|line| line.strip_prefix("- ")?.split(':').next())
            .collect();
        assert_eq!(
            names,
            ["Engineering", "Sales", "Marketing", "Human Resources", "Finance", "Operations"]
        );
        assert_eq!(text, list_departments(&dataset));
    }
}
