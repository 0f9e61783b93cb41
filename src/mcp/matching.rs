//! Input normalisation and roster search.
//!
//! Catalog lookups are exact on the canonical key: trimmed, then lowercased for
//! policies and departments or uppercased for employee ids. Employee search is a
//! plain case-insensitive substring test over name, id, department key and role,
//! with no ranking.

use crate::mcp::dataset::{Dataset, Employee};

/// An empty (or all-whitespace) search term matches the whole roster, since
/// every string contains the empty string.
pub const EMPTY_SEARCH_MATCHES_ALL: bool = true;

#[must_use]
pub fn catalog_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn employee_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[must_use]
pub fn find_employee<'a>(dataset: &'a Dataset, id: &str) -> Option<&'a Employee> {
    dataset.employees().iter().find(|employee| employee.id == id)
}

/// Employees with `term` in any searchable field, in roster order.
#[must_use]
pub fn search_employees<'a>(dataset: &'a Dataset, term: &str) -> Vec<&'a Employee> {
    let needle = catalog_key(term);
    if needle.is_empty() && !EMPTY_SEARCH_MATCHES_ALL {
        return Vec::new();
    }
    dataset
        .employees()
        .iter()
        .filter(|employee| {
            [
                employee.name.as_str(),
                employee.id.as_str(),
                employee.department.as_str(),
                employee.role.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::dataset::tests::seeded;

    fn ids(employees: &[&Employee]) -> Vec<String> {
        employees.iter().map(|employee| employee.id.clone()).collect()
    }

    #[test]
    fn normalises_keys() {
        assert_eq!(catalog_key(" Vacation_Policy "), "vacation_policy");
        assert_eq!(employee_id("\temp001\n"), "EMP001");
    }

    #[test]
    fn finds_employee_by_canonical_id_only() {
        let dataset = seeded();
        assert_eq!(find_employee(&dataset, "EMP003").unwrap().name, "Alex Thompson");
        assert!(find_employee(&dataset, "emp003").is_none());
        assert!(find_employee(&dataset, "EMP999").is_none());
    }

    #[test]
    fn search_covers_every_field() {
        let dataset = seeded();
        assert_eq!(ids(&search_employees(&dataset, "garcia")), ["EMP004"]);
        assert_eq!(ids(&search_employees(&dataset, "emp002")), ["EMP002"]);
        assert_eq!(ids(&search_employees(&dataset, "Finance")), ["EMP005"]);
        assert_eq!(ids(&search_employees(&dataset, "specialist")), ["EMP003"]);
    }

    #[test]
    fn engineering_matches_department_and_role() {
        let dataset = seeded();
        let expected: Vec<String> = dataset
            .employees()
            .iter()
            .filter(|e| {
                [&e.name, &e.id, &e.department, &e.role]
                    .iter()
                    .any(|f| f.to_lowercase().contains("engineering"))
            })
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(ids(&search_employees(&dataset, "engineering")), expected);
        assert_eq!(expected, ["EMP001"]);
    }

    #[test]
    fn substring_matches_keep_roster_order() {
        let dataset = seeded();
        let found = ids(&search_employees(&dataset, "ER"));
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
        assert_eq!(found, ["EMP001", "EMP004", "EMP005"]);
    }

    #[test]
    fn empty_term_matches_everyone() {
        let dataset = seeded();
        assert!(EMPTY_SEARCH_MATCHES_ALL);
        assert_eq!(search_employees(&dataset, "").len(), dataset.employees().len());
        assert_eq!(search_employees(&dataset, "   ").len(), dataset.employees().len());
    }

    #[test]
    fn unmatched_term_is_empty() {
        let dataset = seeded();
        assert!(search_employees(&dataset, "astronaut").is_empty());
    }
}
