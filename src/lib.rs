//! Benefits Engine - Federal retirement benefit calculations for military veterans
//!
//! This library provides:
//! - Military buy-back deposit estimates (pay integration plus compound interest)
//! - Multi-period deposits across a grade history
//! - Minimum retirement age determination by birth year
//! - Sick leave conversion to retirement service credit
//! - Roster-level batch estimates

pub mod buyback;
pub mod dates;
pub mod mra;
pub mod roster;
pub mod service;
pub mod sick_leave;
pub mod tables;

// Re-export commonly used types
pub use buyback::{BuyBackEngine, MilitaryBuyBackResult, PeriodDeposit, RecommendationTier};
pub use mra::{calculate_mra, calculate_mra_as_of, MraInput, MraResult};
pub use roster::RosterRunner;
pub use service::loader::{load_roster, load_roster_from_reader};
pub use service::{GradePeriod, MilitaryBuyBackInput, RetirementPlan, RosterEntry};
pub use sick_leave::{calculate_sick_leave, SickLeaveInput, SickLeaveResult};
pub use tables::{CompositeRateTable, MilitaryPayTable, RateTables};
