//! Minimum retirement age determination
//!
//! The minimum retirement age (MRA) depends on birth year: 55 for anyone
//! born before 1949, rising in two-month steps to 56 for the 1954 to
//! 1964 cohort, then again in two-month steps to 57 for anyone born
//! in 1970 or later.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;

/// Retirement age available under special provisions (law enforcement,
/// firefighters, air traffic controllers)
pub const SPECIAL_PROVISION_AGE: u32 = 50;

/// Inputs for an MRA determination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MraInput {
    pub date_of_birth: NaiveDate,
    /// Start of covered federal service
    pub start_date: NaiveDate,
    #[serde(default)]
    pub has_military_service: bool,
    #[serde(default)]
    pub has_special_provisions: bool,
}

/// Outcome of an MRA determination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MraResult {
    pub mra_years: u32,
    pub mra_months: u32,
    pub retirement_eligibility_date: NaiveDate,
    pub years_of_service_needed: u32,
    pub months_of_service_needed: u32,
    pub already_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_provision_age: Option<u32>,
    pub can_retire_at: String,
}

/// MRA for a birth year, as whole years plus residual months
pub fn mra_for_birth_year(birth_year: i32) -> (u32, u32) {
    match birth_year {
        i32::MIN..=1948 => (55, 0),
        1949 => (55, 2),
        1950 => (55, 4),
        1951 => (55, 6),
        1952 => (55, 8),
        1953 => (55, 10),
        1954..=1964 => (56, 0),
        1965 => (56, 2),
        1966 => (56, 4),
        1967 => (56, 6),
        1968 => (56, 8),
        1969 => (56, 10),
        _ => (57, 0),
    }
}

/// Determine the MRA and eligibility date as of the current local date
pub fn calculate_mra(input: &MraInput) -> MraResult {
    calculate_mra_as_of(input, Local::now().date_naive())
}

/// Determine the MRA and eligibility date as of an explicit date
pub fn calculate_mra_as_of(input: &MraInput, as_of: NaiveDate) -> MraResult {
    let (mra_years, mra_months) = mra_for_birth_year(input.date_of_birth.year());

    // Month-end birthdays clamp toward the end of the shifted month.
    let retirement_eligibility_date = input
        .date_of_birth
        .checked_add_months(Months::new(mra_years * 12 + mra_months))
        .unwrap_or(input.date_of_birth);

    let total_months =
        dates::elapsed_months(input.start_date, retirement_eligibility_date).max(0.0);
    let years_of_service_needed = (total_months / 12.0).floor() as u32;
    let months_of_service_needed = (total_months % 12.0).floor() as u32;

    let already_eligible = as_of >= retirement_eligibility_date;
    let special_provision_age = input.has_special_provisions.then_some(SPECIAL_PROVISION_AGE);

    let can_retire_at = if input.has_special_provisions {
        format!(
            "age {} with 20 years of covered service, or the MRA with 30 years",
            SPECIAL_PROVISION_AGE
        )
    } else if input.has_military_service {
        format!(
            "MRA of {}y {}m with 30 years of service, counting bought-back military time",
            mra_years, mra_months
        )
    } else {
        format!(
            "MRA of {}y {}m with 30 years of service",
            mra_years, mra_months
        )
    };

    MraResult {
        mra_years,
        mra_months,
        retirement_eligibility_date,
        years_of_service_needed,
        months_of_service_needed,
        already_eligible,
        special_provision_age,
        can_retire_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn test_input(dob: NaiveDate, start: NaiveDate) -> MraInput {
        MraInput {
            date_of_birth: dob,
            start_date: start,
            has_military_service: false,
            has_special_provisions: false,
        }
    }

    #[test]
    fn test_mra_bands() {
        assert_eq!(mra_for_birth_year(1947), (55, 0));
        assert_eq!(mra_for_birth_year(1948), (55, 0));
        assert_eq!(mra_for_birth_year(1949), (55, 2));
        assert_eq!(mra_for_birth_year(1953), (55, 10));
        assert_eq!(mra_for_birth_year(1954), (56, 0));
        assert_eq!(mra_for_birth_year(1960), (56, 0));
        assert_eq!(mra_for_birth_year(1964), (56, 0));
        assert_eq!(mra_for_birth_year(1965), (56, 2));
        assert_eq!(mra_for_birth_year(1969), (56, 10));
        assert_eq!(mra_for_birth_year(1970), (57, 0));
        assert_eq!(mra_for_birth_year(1975), (57, 0));
    }

    #[test]
    fn test_eligibility_date_whole_years() {
        let input = test_input(date(1960, 5, 15), date(1990, 1, 1));
        let result = calculate_mra_as_of(&input, date(2024, 1, 1));

        assert_eq!(result.mra_years, 56);
        assert_eq!(result.mra_months, 0);
        assert_eq!(result.retirement_eligibility_date, date(2016, 5, 15));
    }

    #[test]
    fn test_eligibility_date_clamps_month_end() {
        // 1949-12-31 plus 55y 2m lands in February, which has no day 31.
        let input = test_input(date(1949, 12, 31), date(1980, 1, 1));
        let result = calculate_mra_as_of(&input, date(2024, 1, 1));

        assert_eq!(result.retirement_eligibility_date, date(2005, 2, 28));
    }

    #[test]
    fn test_service_needed_countdown() {
        let input = test_input(date(1970, 1, 1), date(2000, 1, 1));
        let result = calculate_mra_as_of(&input, date(2024, 1, 1));

        assert_eq!(result.retirement_eligibility_date, date(2027, 1, 1));
        assert_eq!(result.years_of_service_needed, 26);
        assert_eq!(result.months_of_service_needed, 11);
    }

    #[test]
    fn test_already_eligible_flag() {
        let input = test_input(date(1970, 1, 1), date(2000, 1, 1));

        let before = calculate_mra_as_of(&input, date(2026, 1, 1));
        assert!(!before.already_eligible);

        let after = calculate_mra_as_of(&input, date(2030, 1, 1));
        assert!(after.already_eligible);
    }

    #[test]
    fn test_start_after_eligibility_clamps_to_zero() {
        // Covered service starting after the MRA date leaves nothing to count down.
        let input = test_input(date(1960, 5, 15), date(2020, 1, 1));
        let result = calculate_mra_as_of(&input, date(2024, 1, 1));

        assert_eq!(result.years_of_service_needed, 0);
        assert_eq!(result.months_of_service_needed, 0);
        assert!(result.already_eligible);
    }

    #[test]
    fn test_special_provisions() {
        let mut input = test_input(date(1968, 9, 20), date(2016, 4, 15));
        input.has_special_provisions = true;

        let result = calculate_mra_as_of(&input, date(2024, 1, 1));
        assert_eq!(result.special_provision_age, Some(SPECIAL_PROVISION_AGE));
        assert!(result.can_retire_at.contains("age 50"));
    }

    #[test]
    fn test_military_service_wording() {
        let mut input = test_input(date(1968, 9, 20), date(2016, 4, 15));
        input.has_military_service = true;

        let result = calculate_mra_as_of(&input, date(2024, 1, 1));
        assert_eq!(result.special_provision_age, None);
        assert!(result.can_retire_at.contains("bought-back military time"));
        assert!(result.can_retire_at.contains("56y 8m"));
    }
}
