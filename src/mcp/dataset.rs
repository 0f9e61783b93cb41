//! Embedded, read-only HR dataset.
//!
//! The dataset is built once at startup (see [`Dataset::seed`]) and shared by
//! every session through an `Arc`. Nothing mutates it afterwards.
//!
//! Catalogs keep insertion order, which is the order used when listing.

use std::collections::HashSet;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::mcp::{error::HrError, tenure::parse_hire_date};

#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub name: String,
    pub founded: String,
    pub headcount: u32,
    pub headquarters: String,
    pub industry: String,
}

#[derive(Debug, Clone)]
pub struct Policy {
    pub key: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Department {
    pub key: String,
    pub name: String,
    pub manager: String,
    pub headcount: u32,
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub manager: String,
}

#[derive(Debug)]
pub struct Dataset {
    company: CompanyProfile,
    policies: IndexMap<String, Policy>,
    departments: IndexMap<String, Department>,
    employees: Vec<Employee>,
}

impl Dataset {
    /// Assembles a dataset, canonicalising keys and checking referential integrity.
    ///
    /// # Errors
    /// * `DuplicatePolicy` / `DuplicateDepartment` if two catalog keys differ only in case
    /// * `UnknownDepartment` if an employee points at a department key that is not in the catalog
    /// * `DuplicateEmployee` if two employees share an id (compared case-insensitively)
    pub fn new(
        company: CompanyProfile,
        policies: Vec<Policy>,
        departments: Vec<Department>,
        employees: Vec<Employee>,
    ) -> Result<Self, HrError> {
        let mut policy_catalog = IndexMap::with_capacity(policies.len());
        for mut policy in policies {
            policy.key = policy.key.to_lowercase();
            if policy_catalog.contains_key(&policy.key) {
                return Err(HrError::DuplicatePolicy(policy.key));
            }
            policy_catalog.insert(policy.key.clone(), policy);
        }

        let mut department_catalog = IndexMap::with_capacity(departments.len());
        for mut department in departments {
            department.key = department.key.to_lowercase();
            if department_catalog.contains_key(&department.key) {
                return Err(HrError::DuplicateDepartment(department.key));
            }
            department_catalog.insert(department.key.clone(), department);
        }

        let mut seen = HashSet::with_capacity(employees.len());
        let employees = employees
            .into_iter()
            .map(|mut employee| {
                employee.id = employee.id.to_uppercase();
                employee.department = employee.department.to_lowercase();
                if !department_catalog.contains_key(&employee.department) {
                    return Err(HrError::UnknownDepartment {
                        employee: employee.id,
                        department: employee.department,
                    });
                }
                if !seen.insert(employee.id.clone()) {
                    return Err(HrError::DuplicateEmployee(employee.id));
                }
                Ok(employee)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            company,
            policies: policy_catalog,
            departments: department_catalog,
            employees,
        })
    }

    /// The dataset shipped with the server.
    ///
    /// # Errors
    /// Fails only if the embedded tables are inconsistent.
    pub fn seed() -> Result<Self, HrError> {
        let company = CompanyProfile {
            name: "TechCorp Solutions".to_string(),
            founded: "2015".to_string(),
            headcount: 250,
            headquarters: "San Francisco, CA".to_string(),
            industry: "Technology Solutions".to_string(),
        };

        let policies = SEED_POLICIES
            .iter()
            .map(|(key, title, content)| Policy {
                key: (*key).to_string(),
                title: (*title).to_string(),
                content: (*content).to_string(),
            })
            .collect();

        let departments = SEED_DEPARTMENTS
            .iter()
            .map(|(key, name, manager, headcount)| Department {
                key: (*key).to_string(),
                name: (*name).to_string(),
                manager: (*manager).to_string(),
                headcount: *headcount,
            })
            .collect();

        let employees = SEED_EMPLOYEES
            .iter()
            .map(|(id, name, department, role, hire_date, manager)| {
                Ok::<_, HrError>(Employee {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                    department: (*department).to_string(),
                    role: (*role).to_string(),
                    hire_date: parse_hire_date(hire_date)?,
                    manager: (*manager).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(company, policies, departments, employees)
    }

    #[must_use]
    pub const fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Looks up a policy by canonical (lowercase) key.
    #[must_use]
    pub fn policy(&self, key: &str) -> Option<&Policy> {
        self.policies.get(key)
    }

    pub fn policies(&self) -> impl Iterator<Item = (&str, &Policy)> {
        self.policies.iter().map(|(key, policy)| (key.as_str(), policy))
    }

    pub fn policy_keys(&self) -> impl Iterator<Item = &str> {
        self.policies.keys().map(String::as_str)
    }

    /// Looks up a department by canonical (lowercase) key.
    #[must_use]
    pub fn department(&self, key: &str) -> Option<&Department> {
        self.departments.get(key)
    }

    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    pub fn department_keys(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Display name for a department key, falling back to the key itself.
    #[must_use]
    pub fn department_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.department(key).map_or(key, |department| department.name.as_str())
    }
}

const SEED_POLICIES: &[(&str, &str, &str)] = &[
    (
        "vacation_policy",
        "Vacation Policy",
        "Employees accrue 15 days of vacation per year for the first 2 years, 20 days for years 3-5, and 25 days after 5 years of service. Vacation must be requested at least 2 weeks in advance for approval.",
    ),
    (
        "sick_leave",
        "Sick Leave Policy",
        "Employees receive 10 sick days per year. Sick leave can be used for personal illness, medical appointments, or caring for immediate family members. No advance notice required for unexpected illness.",
    ),
    (
        "remote_work",
        "Remote Work Policy",
        "Employees may work remotely up to 3 days per week with manager approval. Full remote work arrangements require VP approval and are evaluated case-by-case.",
    ),
    (
        "dress_code",
        "Dress Code Policy",
        "Business casual is the standard dress code. On client meeting days, business professional attire is expected. Casual Friday allows jeans and casual tops.",
    ),
    (
        "benefits_overview",
        "Benefits Overview",
        "Full-time employees receive health insurance (80% company paid), dental and vision coverage, 401k with 4% company match, life insurance, and flexible spending accounts.",
    ),
];

const SEED_DEPARTMENTS: &[(&str, &str, &str, u32)] = &[
    ("engineering", "Engineering", "Sarah Chen", 45),
    ("sales", "Sales", "Mike Rodriguez", 30),
    ("marketing", "Marketing", "Lisa Park", 15),
    ("hr", "Human Resources", "David Kim", 8),
    ("finance", "Finance", "Jennifer Walsh", 12),
    ("operations", "Operations", "Tom Anderson", 20),
];

const SEED_EMPLOYEES: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("EMP001", "John Smith", "engineering", "Senior Software Engineer", "2022-03-15", "Sarah Chen"),
    ("EMP002", "Emily Johnson", "sales", "Account Executive", "2023-01-10", "Mike Rodriguez"),
    ("EMP003", "Alex Thompson", "marketing", "Marketing Specialist", "2021-09-20", "Lisa Park"),
    ("EMP004", "Maria Garcia", "hr", "HR Generalist", "2020-05-12", "David Kim"),
    ("EMP005", "Robert Wilson", "finance", "Financial Analyst", "2022-11-08", "Jennifer Walsh"),
];

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn seeded() -> Dataset {
        Dataset::seed().expect("embedded dataset is consistent")
    }

    fn employee(id: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Test Person".to_string(),
            department: department.to_string(),
            role: "Tester".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            manager: "Someone".to_string(),
        }
    }

    fn one_department() -> Vec<Department> {
        vec![Department {
            key: "Engineering".to_string(),
            name: "Engineering".to_string(),
            manager: "Sarah Chen".to_string(),
            headcount: 1,
        }]
    }

    #[test]
    fn seed_preserves_catalog_order() {
        let dataset = seeded();
        let policy_keys: Vec<_> = dataset.policy_keys().collect();
        assert_eq!(
            policy_keys,
            ["vacation_policy", "sick_leave", "remote_work", "dress_code", "benefits_overview"]
        );
        let department_keys: Vec<_> = dataset.department_keys().collect();
        assert_eq!(
            department_keys,
            ["engineering", "sales", "marketing", "hr", "finance", "operations"]
        );
        assert_eq!(dataset.employees().len(), 5);
        assert_eq!(dataset.employees()[0].id, "EMP001");
    }

    #[test]
    fn keys_are_canonicalised_on_load() {
        let dataset = Dataset::new(
            seeded().company().clone(),
            vec![Policy {
                key: "Dress_Code".to_string(),
                title: "Dress Code Policy".to_string(),
                content: "Smart casual.".to_string(),
            }],
            one_department(),
            vec![employee("emp042", "ENGINEERING")],
        )
        .unwrap();

        assert_eq!(dataset.policy("dress_code").unwrap().title, "Dress Code Policy");
        assert!(dataset.department("engineering").is_some());
        assert_eq!(dataset.employees()[0].id, "EMP042");
        assert_eq!(dataset.employees()[0].department, "engineering");
    }

    #[test]
    fn rejects_employee_in_unknown_department() {
        let err = Dataset::new(
            seeded().company().clone(),
            Vec::new(),
            one_department(),
            vec![employee("EMP001", "legal")],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HrError::UnknownDepartment { ref employee, ref department }
                if employee == "EMP001" && department == "legal"
        ));
    }

    #[test]
    fn rejects_duplicate_employee_ids() {
        let err = Dataset::new(
            seeded().company().clone(),
            Vec::new(),
            one_department(),
            vec![employee("EMP001", "engineering"), employee("emp001", "engineering")],
        )
        .unwrap_err();
        assert!(matches!(err, HrError::DuplicateEmployee(ref id) if id == "EMP001"));
    }

    #[test]
    fn rejects_policy_keys_differing_only_in_case() {
        let policy = |key: &str| Policy {
            key: key.to_string(),
            title: "Dress Code Policy".to_string(),
            content: "Smart casual.".to_string(),
        };
        let err = Dataset::new(
            seeded().company().clone(),
            vec![policy("Dress_Code"), policy("dress_code")],
            one_department(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, HrError::DuplicatePolicy(ref key) if key == "dress_code"));
    }

    #[test]
    fn rejects_duplicate_department_keys() {
        let mut departments = one_department();
        departments.extend(one_department().into_iter().map(|mut department| {
            department.key = "ENGINEERING".to_string();
            department
        }));
        let err = Dataset::new(seeded().company().clone(), Vec::new(), departments, Vec::new())
            .unwrap_err();
        assert!(matches!(err, HrError::DuplicateDepartment(ref key) if key == "engineering"));
    }

    #[test]
    fn department_name_falls_back_to_key() {
        let dataset = seeded();
        assert_eq!(dataset.department_name("hr"), "Human Resources");
        assert_eq!(dataset.department_name("legal"), "legal");
    }
}
