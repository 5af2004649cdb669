//! Interest accrual on unpaid deposit balances
//!
//! Interest begins accruing two years after federal hire and compounds
//! once per calendar year at the published composite rate. This is plain
//! sequential annual compounding; there is no day-count proration.

use crate::tables::CompositeRateTable;

/// Years after federal hire before interest begins to accrue
pub const GRACE_PERIOD_YEARS: i32 = 2;

/// Accrued interest on a deposit principal, exclusive of the principal
///
/// Compounds the balance for each calendar year from the end of the
/// grace period up to but not including the current year. Years missing
/// from the rate table compound at the table default.
pub fn accrue_interest(
    rates: &CompositeRateTable,
    principal: f64,
    fed_start_year: i32,
    current_year: i32,
) -> f64 {
    let accrual_start = fed_start_year + GRACE_PERIOD_YEARS;
    if current_year <= accrual_start {
        return 0.0;
    }

    let mut balance = principal;
    for year in accrual_start..current_year {
        balance *= 1.0 + rates.rate_for(year);
    }

    balance - principal
}
