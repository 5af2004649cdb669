//! Buy-back orchestration over the deposit and interest calculators

use chrono::{Datelike, Local, NaiveDate};

use crate::dates;
use crate::service::MilitaryBuyBackInput;
use crate::tables::RateTables;

use super::deposit;
use super::interest;
use super::result::{MilitaryBuyBackResult, RecommendationTier};

/// Retirement horizon in years for the lifetime benefit projection
pub const LIFETIME_HORIZON_YEARS: f64 = 20.0;

/// Buy-back calculation engine over a set of rate tables
#[derive(Debug, Clone)]
pub struct BuyBackEngine {
    tables: RateTables,
}

impl BuyBackEngine {
    /// Create an engine over the given rate tables
    pub fn new(tables: RateTables) -> Self {
        Self { tables }
    }

    /// Run a calculation as of the current local date
    pub fn calculate(&self, input: &MilitaryBuyBackInput) -> MilitaryBuyBackResult {
        self.calculate_as_of(input, Local::now().date_naive())
    }

    /// Run a calculation as of an explicit date
    ///
    /// The as-of date fixes the interest accrual endpoint, which keeps
    /// results reproducible across test runs and batch reruns.
    pub fn calculate_as_of(
        &self,
        input: &MilitaryBuyBackInput,
        as_of: NaiveDate,
    ) -> MilitaryBuyBackResult {
        let total_military_service =
            dates::elapsed_years(input.pay_entry_date, input.separation_date);

        let (base_deposit, period_breakdown) = match input.grade_periods.as_deref() {
            Some(periods) => {
                let (total, breakdown) =
                    deposit::multi_period_deposit(&self.tables.pay, input.retirement_plan, periods);
                (total, Some(breakdown))
            }
            None => {
                let total = deposit::period_deposit(
                    &self.tables.pay,
                    input.retirement_plan,
                    &input.separation_grade,
                    input.pay_entry_date,
                    input.separation_date,
                );
                (total, None)
            }
        };

        let interest_amount = interest::accrue_interest(
            &self.tables.composite,
            base_deposit,
            input.fed_start_date.year(),
            as_of.year(),
        )
        .max(0.0);
        let deposit_amount = base_deposit + interest_amount;

        let monthly_payment_option = if input.years_to_retirement > 0.0 {
            deposit_amount / (input.years_to_retirement * 12.0)
        } else {
            0.0
        };

        let annuity_increase =
            input.annual_base_pay * total_military_service * input.retirement_plan.annuity_rate();
        let break_even_years = if annuity_increase > 0.0 {
            deposit_amount / annuity_increase
        } else {
            0.0
        };
        let lifetime_benefit = annuity_increase * LIFETIME_HORIZON_YEARS;

        let tier = RecommendationTier::from_break_even(break_even_years);
        let recommendation = tier.render(break_even_years);

        MilitaryBuyBackResult {
            total_military_service,
            base_deposit,
            interest_amount,
            deposit_amount,
            monthly_payment_option,
            annuity_increase,
            break_even_years,
            lifetime_benefit,
            tier,
            recommendation,
            period_breakdown,
        }
    }

    /// Rate tables backing the engine
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Mutable rate tables for sensitivity overrides
    pub fn tables_mut(&mut self) -> &mut RateTables {
        &mut self.tables
    }
}
