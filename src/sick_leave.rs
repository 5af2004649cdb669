//! Unused sick leave converted to retirement service credit
//!
//! Unused sick leave is added to length of service at retirement. One
//! work year is 2087 hours, so the credit is hours / 2087 expressed as
//! whole years and months, and each full year adds one percent to the
//! annuity multiplier.

use serde::{Deserialize, Serialize};

/// Hours in one year of federal service for leave conversion
pub const HOURS_PER_WORK_YEAR: f64 = 2087.0;
/// Hours in one workday
pub const HOURS_PER_DAY: f64 = 8.0;

/// Sick leave balance to convert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickLeaveInput {
    pub hours: f64,
    /// Annual salary used for the benefit estimate, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_salary: Option<f64>,
}

/// Service credit earned from a sick leave balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickLeaveResult {
    pub days_equivalent: u32,
    pub years_credit: u32,
    pub months_credit: u32,
    pub pension_increase_percent: String,
    pub estimated_annual_benefit: f64,
}

/// Convert a sick leave balance into service credit
pub fn calculate_sick_leave(input: &SickLeaveInput) -> SickLeaveResult {
    let years = input.hours / HOURS_PER_WORK_YEAR;
    let months = (years % 1.0) * 12.0;

    // The benefit estimate uses the unrounded year fraction.
    let estimated_annual_benefit = input
        .current_salary
        .map(|salary| salary * years * 0.01)
        .unwrap_or(0.0);

    SickLeaveResult {
        days_equivalent: (input.hours / HOURS_PER_DAY).floor() as u32,
        years_credit: years.floor() as u32,
        months_credit: months.floor() as u32,
        pension_increase_percent: format!("{:.2}%", years),
        estimated_annual_benefit,
    }
}
