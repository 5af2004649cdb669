//! Military buy-back deposit and interest calculations

mod deposit;
mod engine;
mod interest;
mod result;

pub use deposit::{multi_period_deposit, period_deposit};
pub use engine::{BuyBackEngine, LIFETIME_HORIZON_YEARS};
pub use interest::{accrue_interest, GRACE_PERIOD_YEARS};
pub use result::{MilitaryBuyBackResult, PeriodDeposit, RecommendationTier};
