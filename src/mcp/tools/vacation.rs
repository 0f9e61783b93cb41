//! Tool for working out annual vacation days from a hire date.
//!
//! Years of service are (today - hire date) in days divided by 365.25:
//! - under 2 years: 15 days
//! - 2 up to 5 years: 20 days
//! - 5 years and over: 25 days

use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mcp::{
    error::HrError,
    format,
    tenure::{Tenure, parse_hire_date},
};

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct VacationRequest {
    #[schemars(description = "Employee hire date in YYYY-MM-DD format, e.g. 2022-03-15")]
    pub hire_date: String,
}

/// # Errors
/// `InvalidDate` when `hire_date` is not a real `YYYY-MM-DD` date.
pub fn calculate_vacation_days(hire_date: &str) -> Result<String, HrError> {
    calculate_vacation_days_on(hire_date, Local::now().date_naive())
}

/// Same as [`calculate_vacation_days`] with an explicit "today".
///
/// # Errors
/// `InvalidDate` when `hire_date` is not a real `YYYY-MM-DD` date.
pub fn calculate_vacation_days_on(hire_date: &str, today: NaiveDate) -> Result<String, HrError> {
    let hired = parse_hire_date(hire_date)?;
    let tenure = Tenure::between(hired, today);
    debug!(
        %hired,
        years = tenure.years_of_service,
        days = tenure.vacation_days(),
        "vacation accrual"
    );
    Ok(format::vacation(&tenure))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn reports_years_and_days() {
        // 1021 days / 365.25 = 2.795...
        let text = calculate_vacation_days_on("2024-01-01", today()).unwrap();
        assert!(text.starts_with("Years of Service: 2.8 years\nAnnual Vacation Days: 20 days\n"));
        assert!(text.ends_with(
            "Policy: 15 days for 0-2 years, 20 days for 2-5 years, 25 days for 5+ years"
        ));
    }

    #[test]
    fn two_years_of_service_is_second_tier() {
        // 731 days, 2.001 years.
        let text = calculate_vacation_days_on("2024-10-17", today()).unwrap();
        assert!(text.starts_with("Years of Service: 2.0 years\nAnnual Vacation Days: 20 days"));

        // 730 days is 1.998 years, still the first tier.
        let text = calculate_vacation_days_on("2024-10-18", today()).unwrap();
        assert!(text.starts_with("Years of Service: 2.0 years\nAnnual Vacation Days: 15 days"));
    }

    #[test]
    fn recent_and_long_tenures() {
        let text = calculate_vacation_days_on("2026-01-10", today()).unwrap();
        assert!(text.contains("Annual Vacation Days: 15 days"));
        let text = calculate_vacation_days_on("2015-06-01", today()).unwrap();
        assert!(text.contains("Annual Vacation Days: 25 days"));
    }

    #[test]
    fn malformed_dates_are_reported_not_raised() {
        for raw in ["not-a-date", "2024-13-40"] {
            let err = calculate_vacation_days_on(raw, today()).unwrap_err();
            assert!(err.is_recoverable());
            assert_eq!(
                err.to_string(),
                format!("Invalid date format '{raw}'. Please use YYYY-MM-DD format.")
            );
        }
    }

    #[test]
    fn uses_wall_clock_by_default() {
        assert!(calculate_vacation_days("2000-01-01").unwrap().contains("25 days"));
    }
}
