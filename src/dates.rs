//! Calendar math shared by the deposit and eligibility calculators
//!
//! Elapsed time is measured in milliseconds and converted with fixed
//! average-length divisors (365.25-day years, 30.44-day months). The
//! divisors are part of the numeric contract and must not be replaced
//! with exact calendar arithmetic.

use chrono::NaiveDate;

/// Milliseconds in a day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Average days per year, including leap years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average days per month
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Elapsed time between two dates in 365.25-day years
///
/// Negative when `to` precedes `from`.
pub fn elapsed_years(from: NaiveDate, to: NaiveDate) -> f64 {
    millis_between(from, to) / (MS_PER_DAY * DAYS_PER_YEAR)
}

/// Elapsed time between two dates in 30.44-day months
///
/// Negative when `to` precedes `from`.
pub fn elapsed_months(from: NaiveDate, to: NaiveDate) -> f64 {
    millis_between(from, to) / (MS_PER_DAY * DAYS_PER_MONTH)
}

fn millis_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_milliseconds() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_elapsed_years_four_year_span() {
        // 2015-06-01 to 2019-06-01 spans 1461 days (one leap year),
        // which is exactly 4.0 years on a 365.25-day basis
        let years = elapsed_years(date(2015, 6, 1), date(2019, 6, 1));
        assert_relative_eq!(years, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_elapsed_months_sixty_day_span() {
        let months = elapsed_months(date(2020, 1, 1), date(2020, 3, 1));
        assert_relative_eq!(months, 60.0 / 30.44, epsilon = 1e-9);
    }

    #[test]
    fn test_reversed_dates_are_negative() {
        assert!(elapsed_years(date(2020, 1, 1), date(2019, 1, 1)) < 0.0);
        assert!(elapsed_months(date(2020, 1, 1), date(2019, 1, 1)) < 0.0);
    }

    #[test]
    fn test_same_date_is_zero() {
        assert_eq!(elapsed_years(date(2020, 1, 1), date(2020, 1, 1)), 0.0);
        assert_eq!(elapsed_months(date(2020, 1, 1), date(2020, 1, 1)), 0.0);
    }
}
