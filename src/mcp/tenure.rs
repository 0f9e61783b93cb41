//! Years-of-service arithmetic and the vacation accrual tiers.

use chrono::NaiveDate;

use crate::mcp::error::HrError;

const DAYS_PER_YEAR: f64 = 365.25;

/// Annual vacation bracket, chosen by fractional years of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacationTier {
    /// Under 2 years.
    Starter,
    /// From 2 up to (not including) 5 years.
    Established,
    /// 5 years and over.
    Senior,
}

impl VacationTier {
    #[must_use]
    pub fn for_years(years_of_service: f64) -> Self {
        if years_of_service < 2.0 {
            Self::Starter
        } else if years_of_service < 5.0 {
            Self::Established
        } else {
            Self::Senior
        }
    }

    #[must_use]
    pub const fn vacation_days(self) -> u32 {
        match self {
            Self::Starter => 15,
            Self::Established => 20,
            Self::Senior => 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tenure {
    pub years_of_service: f64,
    pub tier: VacationTier,
}

impl Tenure {
    /// Service from `hire_date` up to `today`. A hire date in the future gives
    /// negative years and lands in the first tier.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn between(hire_date: NaiveDate, today: NaiveDate) -> Self {
        let days = (today - hire_date).num_days();
        let years_of_service = days as f64 / DAYS_PER_YEAR;
        Self {
            years_of_service,
            tier: VacationTier::for_years(years_of_service),
        }
    }

    #[must_use]
    pub const fn vacation_days(&self) -> u32 {
        self.tier.vacation_days()
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// chrono alone accepts unpadded fields and signed years, so the shape is
/// checked first.
///
/// # Errors
/// `InvalidDate` carrying the trimmed input when the shape is wrong or the date does not exist.
pub fn parse_hire_date(raw: &str) -> Result<NaiveDate, HrError> {
    let input = raw.trim();
    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(HrError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| HrError::InvalidDate(input.to_string()))
}
