//! Employee service records and roster loading

mod record;
pub mod loader;

pub use loader::{load_roster, load_roster_from_reader, RosterError};
pub use record::{GradePeriod, MilitaryBuyBackInput, RetirementPlan, RosterEntry};
