//! Fixed text templates for every answer the server gives.
//!
//! Not-found and invalid-input answers are the `Display` text of
//! [`HrError`](crate::mcp::error::HrError); everything else is rendered here.

use crate::mcp::{
    dataset::{CompanyProfile, Dataset, Department, Employee, Policy},
    tenure::Tenure,
};

const TIER_POLICY: &str =
    "Policy: 15 days for 0-2 years, 20 days for 2-5 years, 25 days for 5+ years";

/// `heading` followed by one `- item` line per entry.
fn bulleted(heading: &str, items: impl IntoIterator<Item = String>) -> String {
    let lines: Vec<String> = items.into_iter().map(|item| format!("- {item}")).collect();
    format!("{heading}\n{}", lines.join("\n"))
}

#[must_use]
pub fn company(profile: &CompanyProfile) -> String {
    format!(
        "Company: {}\nFounded: {}\nEmployees: {}\nHeadquarters: {}\nIndustry: {}",
        profile.name, profile.founded, profile.headcount, profile.headquarters, profile.industry
    )
}

#[must_use]
pub fn policy(policy: &Policy) -> String {
    format!("{}:\n\n{}", policy.title, policy.content)
}

#[must_use]
pub fn policy_list<'a>(policies: impl IntoIterator<Item = (&'a str, &'a Policy)>) -> String {
    bulleted(
        "Available HR Policies:",
        policies.into_iter().map(|(key, policy)| format!("{key}: {}", policy.title)),
    )
}

#[must_use]
pub fn department(department: &Department) -> String {
    format!(
        "Department: {}\nManager: {}\nNumber of Employees: {}",
        department.name, department.manager, department.headcount
    )
}

#[must_use]
pub fn department_list<'a>(departments: impl IntoIterator<Item = &'a Department>) -> String {
    bulleted(
        "Company Departments:",
        departments.into_iter().map(|department| {
            format!(
                "{}: {} employees, managed by {}",
                department.name, department.headcount, department.manager
            )
        }),
    )
}

/// Search hits, or the neutral "no results" line when there are none.
#[must_use]
pub fn search_results(dataset: &Dataset, term: &str, employees: &[&Employee]) -> String {
    if employees.is_empty() {
        return format!("No employees found matching '{term}'");
    }
    bulleted(
        "Search Results:",
        employees.iter().map(|employee| {
            format!(
                "{} ({}) - {} in {}",
                employee.name,
                employee.id,
                employee.role,
                dataset.department_name(&employee.department)
            )
        }),
    )
}

#[must_use]
pub fn employee(dataset: &Dataset, employee: &Employee) -> String {
    format!(
        "Employee Details:\nName: {}\nID: {}\nRole: {}\nDepartment: {}\nManager: {}\n\
         Hire Date: {}",
        employee.name,
        employee.id,
        employee.role,
        dataset.department_name(&employee.department),
        employee.manager,
        employee.hire_date.format("%Y-%m-%d")
    )
}

#[must_use]
pub fn vacation(tenure: &Tenure) -> String {
    format!(
        "Years of Service: {:.1} years\nAnnual Vacation Days: {} days\n\n{TIER_POLICY}",
        tenure.years_of_service,
        tenure.vacation_days()
    )
}

/// Fixed-date holidays carry `year`; floating ones are described by rule only.
#[must_use]
pub fn holiday_schedule(year: i32) -> String {
    let holidays = [
        format!("New Year's Day - January 1, {year}"),
        "Martin Luther King Jr. Day - Third Monday in January".to_string(),
        "Presidents' Day - Third Monday in February".to_string(),
        "Memorial Day - Last Monday in May".to_string(),
        format!("Independence Day - July 4, {year}"),
        "Labor Day - First Monday in September".to_string(),
        "Thanksgiving - Fourth Thursday in November".to_string(),
        "Black Friday - Day after Thanksgiving".to_string(),
        format!("Christmas Eve - December 24, {year}"),
        format!("Christmas Day - December 25, {year}"),
        format!("New Year's Eve - December 31, {year}"),
    ];

    bulleted(&format!("Company Holiday Schedule {year}:\n"), holidays)
}

#[must_use]
pub const fn hr_contacts() -> &'static str {
    "HR Department Contacts:

General HR Inquiries:
- Email: hr@techcorpsolutions.com
- Phone: (555) 123-4567

HR Team:
- David Kim (HR Manager): david.kim@techcorpsolutions.com
- Maria Garcia (HR Generalist): maria.garcia@techcorpsolutions.com
- Susan Lee (Recruiter): susan.lee@techcorpsolutions.com

Office Hours: Monday-Friday, 9:00 AM - 5:00 PM PST"
}
