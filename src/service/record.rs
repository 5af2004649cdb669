//! Service record structures for buy-back calculations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Federal civilian retirement plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetirementPlan {
    /// Federal Employees Retirement System
    Fers,
    /// Civil Service Retirement System
    Csrs,
}

impl RetirementPlan {
    /// Statutory deposit percentage of military base pay for a year
    ///
    /// 1999 and 2000 carried temporarily raised percentages under both
    /// plans; every other year uses the flat statutory rate.
    pub fn deposit_rate(&self, year: i32) -> f64 {
        match self {
            RetirementPlan::Fers => match year {
                1999 => 0.0325,
                2000 => 0.0340,
                _ => 0.03,
            },
            RetirementPlan::Csrs => match year {
                1999 => 0.0725,
                2000 => 0.0740,
                _ => 0.07,
            },
        }
    }

    /// Annuity multiplier per year of credited service
    ///
    /// The CSRS figure is a blended approximation of the tiered
    /// 1.5/1.75/2.0 percent statutory formula.
    pub fn annuity_rate(&self) -> f64 {
        match self {
            RetirementPlan::Fers => 0.01,
            RetirementPlan::Csrs => 0.0175,
        }
    }

    /// Lower-case identifier matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            RetirementPlan::Fers => "fers",
            RetirementPlan::Csrs => "csrs",
        }
    }
}

/// One contiguous span of military service at a single pay grade
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradePeriod {
    /// Pay grade held during the span
    pub grade: String,

    /// First day of the span
    pub from_date: NaiveDate,

    /// Last day of the span
    pub to_date: NaiveDate,
}

/// Input record for a military buy-back calculation
///
/// Periods in `grade_periods` are assumed chronological and
/// non-overlapping by the caller; the engine does not validate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryBuyBackInput {
    /// Service branch, informational only
    pub branch: String,

    /// First day of military pay
    pub pay_entry_date: NaiveDate,

    /// Military separation date
    pub separation_date: NaiveDate,

    /// Grade held at separation, used for the single-period deposit
    pub separation_grade: String,

    /// Date of federal civilian hire
    pub fed_start_date: NaiveDate,

    /// Retirement plan the deposit credits toward
    pub retirement_plan: RetirementPlan,

    /// Years until the planned retirement date
    pub years_to_retirement: f64,

    /// Current federal salary, used only for the annuity projection
    pub annual_base_pay: f64,

    /// Per-grade service spans; when present the deposit switches to
    /// multi-period mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_periods: Option<Vec<GradePeriod>>,
}

/// One employee row from a buy-back roster
#[derive(Debug, Clone)]
pub struct RosterEntry {
    /// Unique employee identifier
    pub employee_id: u32,

    /// Calculation input for the employee
    pub input: MilitaryBuyBackInput,
}
