//! Company-wide answers that take no arguments: the company profile, this
//! year's holiday schedule and the HR contact block.

use chrono::{Datelike, Local};

use crate::mcp::{dataset::Dataset, format};

#[must_use]
pub fn get_company_info(dataset: &Dataset) -> String {
    format::company(dataset.company())
}

/// Holiday schedule for the current local year, read on every call.
#[must_use]
pub fn get_holiday_schedule() -> String {
    format::holiday_schedule(Local::now().year())
}

#[must_use]
pub fn get_hr_contacts() -> String {
    format::hr_contacts().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::dataset::tests::seeded;

    #[test]
    fn company_info_names_the_company() {
        let text = get_company_info(&seeded());
        assert!(text.starts_with("Company: TechCorp Solutions\n"));
        assert!(text.contains("Employees: 250"));
    }

    #[test]
    fn holiday_schedule_uses_current_year() {
        let year = Local::now().year();
        let text = get_holiday_schedule();
        assert!(text.contains(&format!("Independence Day - July 4, {year}")));
        assert!(text.contains("Memorial Day - Last Monday in May"));
    }

    #[test]
    fn contacts_list_general_inbox() {
        assert!(get_hr_contacts().contains("hr@techcorpsolutions.com"));
    }
}
