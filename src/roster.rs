//! Roster runner for efficient batch buy-back estimates
//!
//! Builds the rate tables once, then allows running many estimates
//! without re-reading CSV files.

use chrono::NaiveDate;

use crate::buyback::{BuyBackEngine, MilitaryBuyBackResult};
use crate::service::{MilitaryBuyBackInput, RosterEntry};
use crate::tables::{RateTables, TableError};

/// Pre-loaded runner for efficient batch buy-back estimates
///
/// # Example
/// ```ignore
/// let runner = RosterRunner::from_csv()?;
///
/// // Run the same veteran against several payment horizons
/// for result in runner.run_payment_horizons(&input, &[5.0, 10.0, 15.0], as_of) {
///     println!("{:.2}/month", result.monthly_payment_option);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RosterRunner {
    engine: BuyBackEngine,
}

impl RosterRunner {
    /// Create runner with the published in-memory tables
    pub fn new() -> Self {
        Self {
            engine: BuyBackEngine::new(RateTables::default_published()),
        }
    }

    /// Create runner by loading tables from CSV files
    pub fn from_csv() -> Result<Self, TableError> {
        Ok(Self {
            engine: BuyBackEngine::new(RateTables::from_csv()?),
        })
    }

    /// Create runner from a specific tables directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, TableError> {
        Ok(Self {
            engine: BuyBackEngine::new(RateTables::from_csv_path(path)?),
        })
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: RateTables) -> Self {
        Self {
            engine: BuyBackEngine::new(tables),
        }
    }

    /// Run a single estimate as of the given date
    pub fn run(&self, input: &MilitaryBuyBackInput, as_of: NaiveDate) -> MilitaryBuyBackResult {
        self.engine.calculate_as_of(input, as_of)
    }

    /// Run estimates for a whole roster, preserving entry order
    pub fn run_batch(
        &self,
        entries: &[RosterEntry],
        as_of: NaiveDate,
    ) -> Vec<MilitaryBuyBackResult> {
        entries
            .iter()
            .map(|entry| self.engine.calculate_as_of(&entry.input, as_of))
            .collect()
    }

    /// Run one veteran against several payment horizons (years to retirement)
    pub fn run_payment_horizons(
        &self,
        input: &MilitaryBuyBackInput,
        horizons: &[f64],
        as_of: NaiveDate,
    ) -> Vec<MilitaryBuyBackResult> {
        horizons
            .iter()
            .map(|&years| {
                let mut scenario = input.clone();
                scenario.years_to_retirement = years;
                self.engine.calculate_as_of(&scenario, as_of)
            })
            .collect()
    }

    /// Get reference to the underlying engine for inspection
    pub fn engine(&self) -> &BuyBackEngine {
        &self.engine
    }

    /// Get mutable reference to the engine for table customization
    pub fn engine_mut(&mut self) -> &mut BuyBackEngine {
        &mut self.engine
    }
}

impl Default for RosterRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::RetirementPlan;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn test_input(grade: &str) -> MilitaryBuyBackInput {
        MilitaryBuyBackInput {
            branch: "navy".to_string(),
            pay_entry_date: date(2010, 1, 10),
            separation_date: date(2014, 1, 10),
            separation_grade: grade.to_string(),
            fed_start_date: date(2014, 3, 1),
            retirement_plan: RetirementPlan::Fers,
            years_to_retirement: 12.0,
            annual_base_pay: 76_000.0,
            grade_periods: None,
        }
    }

    #[test]
    fn test_roster_batch_preserves_order() {
        let runner = RosterRunner::new();
        let entries = vec![
            RosterEntry {
                employee_id: 11,
                input: test_input("e4"),
            },
            RosterEntry {
                employee_id: 12,
                input: test_input("e7"),
            },
        ];

        let results = runner.run_batch(&entries, date(2024, 6, 30));
        assert_eq!(results.len(), 2);

        // A more senior separation grade earns more pay, so it owes a larger deposit
        assert!(results[1].base_deposit > results[0].base_deposit);
    }

    #[test]
    fn test_payment_horizons_share_deposit() {
        let runner = RosterRunner::new();
        let input = test_input("e5");

        let results =
            runner.run_payment_horizons(&input, &[5.0, 10.0, 15.0], date(2024, 6, 30));
        assert_eq!(results.len(), 3);

        // Same deposit, spread over a longer horizon, means a smaller payment
        assert!((results[0].deposit_amount - results[1].deposit_amount).abs() < 1e-9);
        assert!((results[1].deposit_amount - results[2].deposit_amount).abs() < 1e-9);
        assert!(results[0].monthly_payment_option > results[1].monthly_payment_option);
        assert!(results[1].monthly_payment_option > results[2].monthly_payment_option);
    }
}
