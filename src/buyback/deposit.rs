//! Deposit principal integration across calendar years
//!
//! The deposit owed for a service span is the sum over calendar years of
//! base pay x served fraction of the year x the plan deposit rate. Year
//! fractions are month-based: the entry year counts the months from entry
//! through December, the exit year counts January through the exit month,
//! and interior years count in full.

use chrono::{Datelike, NaiveDate};

use crate::dates;
use crate::service::{GradePeriod, RetirementPlan};
use crate::tables::MilitaryPayTable;

use super::result::PeriodDeposit;

/// Deposit principal for one contiguous span at a single grade
///
/// A span whose end precedes its start integrates over an empty year
/// range and contributes zero; range validation is the caller's job.
pub fn period_deposit(
    pay: &MilitaryPayTable,
    plan: RetirementPlan,
    grade: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> f64 {
    let mut total = 0.0;
    for year in from.year()..=to.year() {
        let fraction = year_fraction(from, to, year);
        total += pay.base_pay(grade, year) * fraction * plan.deposit_rate(year);
    }
    total
}

/// Deposit principal and per-period breakdown for a list of grade spans
///
/// Breakdown years use elapsed wall-clock time on a 365.25-day basis,
/// which intentionally differs from the calendar-year fractions driving
/// the deposit itself.
pub fn multi_period_deposit(
    pay: &MilitaryPayTable,
    plan: RetirementPlan,
    periods: &[GradePeriod],
) -> (f64, Vec<PeriodDeposit>) {
    let mut total = 0.0;
    let mut breakdown = Vec::with_capacity(periods.len());

    for period in periods {
        let deposit = period_deposit(pay, plan, &period.grade, period.from_date, period.to_date);
        total += deposit;
        breakdown.push(PeriodDeposit {
            grade: period.grade.clone(),
            years: dates::elapsed_years(period.from_date, period.to_date),
            deposit,
        });
    }

    (total, breakdown)
}

/// Fraction of a calendar year served within the span
///
/// The entry-year branch wins when a span starts and ends in the same
/// calendar year.
fn year_fraction(from: NaiveDate, to: NaiveDate, year: i32) -> f64 {
    if year == from.year() {
        (12.0 - from.month0() as f64) / 12.0
    } else if year == to.year() {
        (to.month0() as f64 + 1.0) / 12.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RateTables;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_year_fractions() {
        let from = date(2020, 3, 15);
        let to = date(2022, 10, 1);

        // March entry: 10 of 12 months remain
        assert!((year_fraction(from, to, 2020) - 10.0 / 12.0).abs() < 1e-12);
        // Interior year counts in full
        assert_eq!(year_fraction(from, to, 2021), 1.0);
        // October exit: 10 of 12 months served
        assert!((year_fraction(from, to, 2022) - 10.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_year_span_uses_entry_fraction() {
        let from = date(2020, 3, 1);
        let to = date(2020, 5, 31);

        // Entry-year branch wins: (12 - 2) / 12, not (4 + 1) / 12
        assert!((year_fraction(from, to, 2020) - 10.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_period_known_value() {
        let tables = RateTables::default_published();

        // e5 from 2020-03-15 to 2022-10-01 under FERS:
        //   2020: 37379 * 10/12 * 0.03 = 934.475
        //   2021: 37379 *  1   * 0.03 = 1121.37   (floor lookup to 2020)
        //   2022: 39455 * 10/12 * 0.03 = 986.375
        let total = period_deposit(
            &tables.pay,
            RetirementPlan::Fers,
            "e5",
            date(2020, 3, 15),
            date(2022, 10, 1),
        );
        assert!((total - 3042.22).abs() < 1e-6, "got {}", total);
    }

    #[test]
    fn test_deposit_uses_exception_year_rates() {
        let tables = RateTables::default_published();

        // e5 across 1999-2000 under FERS:
        //   1999: 17028 * 1 * 0.0325 = 553.41   (floor lookup to 1995)
        //   2000: 20766 * 1 * 0.0340 = 706.044
        let total = period_deposit(
            &tables.pay,
            RetirementPlan::Fers,
            "e5",
            date(1999, 1, 1),
            date(2000, 12, 31),
        );
        assert!((total - 1259.454).abs() < 1e-6, "got {}", total);
    }

    #[test]
    fn test_reversed_span_contributes_zero() {
        let tables = RateTables::default_published();

        let total = period_deposit(
            &tables.pay,
            RetirementPlan::Fers,
            "e5",
            date(2022, 1, 1),
            date(2020, 1, 1),
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_multi_period_sums_and_breaks_down() {
        let tables = RateTables::default_published();
        let periods = vec![
            GradePeriod {
                grade: "e3".to_string(),
                from_date: date(2010, 1, 15),
                to_date: date(2012, 6, 30),
            },
            GradePeriod {
                grade: "e5".to_string(),
                from_date: date(2012, 7, 1),
                to_date: date(2015, 12, 31),
            },
        ];

        let (total, breakdown) = multi_period_deposit(&tables.pay, RetirementPlan::Fers, &periods);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].grade, "e3");
        assert_eq!(breakdown[1].grade, "e5");

        let sum: f64 = breakdown.iter().map(|p| p.deposit).sum();
        assert!((total - sum).abs() < 1e-9);

        // Breakdown years are wall-clock on a 365.25-day basis
        let expected_years = dates::elapsed_years(date(2010, 1, 15), date(2012, 6, 30));
        assert!((breakdown[0].years - expected_years).abs() < 1e-9);
    }

    #[test]
    fn test_empty_period_list() {
        let tables = RateTables::default_published();

        let (total, breakdown) = multi_period_deposit(&tables.pay, RetirementPlan::Fers, &[]);
        assert_eq!(total, 0.0);
        assert!(breakdown.is_empty());
    }
}
