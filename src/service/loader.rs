//! Load buy-back rosters from CSV

use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;
use thiserror::Error;

use super::record::{MilitaryBuyBackInput, RetirementPlan, RosterEntry};

/// Error raised while loading a roster CSV
#[derive(Debug, Error)]
pub enum RosterError {
    /// CSV file could not be read or deserialized
    #[error("failed to read roster: {0}")]
    Csv(#[from] csv::Error),

    /// A row held a value the engine cannot interpret
    #[error("roster row for employee {employee_id}: {message}")]
    InvalidRow { employee_id: u32, message: String },
}

/// Raw CSV row matching the roster column layout
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "EmployeeID")]
    employee_id: u32,
    #[serde(rename = "Branch")]
    branch: String,
    #[serde(rename = "PayEntryDate")]
    pay_entry_date: String,
    #[serde(rename = "SeparationDate")]
    separation_date: String,
    #[serde(rename = "SeparationGrade")]
    separation_grade: String,
    #[serde(rename = "FedStartDate")]
    fed_start_date: String,
    #[serde(rename = "RetirementPlan")]
    retirement_plan: String,
    #[serde(rename = "YearsToRetirement")]
    years_to_retirement: f64,
    #[serde(rename = "AnnualBasePay")]
    annual_base_pay: f64,
}

impl CsvRow {
    fn to_entry(self) -> Result<RosterEntry, RosterError> {
        let retirement_plan = match self.retirement_plan.trim().to_lowercase().as_str() {
            "fers" => RetirementPlan::Fers,
            "csrs" => RetirementPlan::Csrs,
            other => {
                return Err(RosterError::InvalidRow {
                    employee_id: self.employee_id,
                    message: format!("unknown retirement plan '{}'", other),
                })
            }
        };

        let pay_entry_date = parse_date(&self.pay_entry_date, self.employee_id)?;
        let separation_date = parse_date(&self.separation_date, self.employee_id)?;
        let fed_start_date = parse_date(&self.fed_start_date, self.employee_id)?;

        Ok(RosterEntry {
            employee_id: self.employee_id,
            input: MilitaryBuyBackInput {
                branch: self.branch,
                pay_entry_date,
                separation_date,
                separation_grade: self.separation_grade,
                fed_start_date,
                retirement_plan,
                years_to_retirement: self.years_to_retirement,
                annual_base_pay: self.annual_base_pay,
                grade_periods: None,
            },
        })
    }
}

fn parse_date(value: &str, employee_id: u32) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| RosterError::InvalidRow {
        employee_id,
        message: format!("bad date '{}': {}", value, e),
    })
}

/// Load all roster entries from a CSV file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterError> {
    let mut reader = Reader::from_path(path)?;
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.to_entry()?);
    }

    Ok(entries)
}

/// Load roster entries from any reader (e.g., string buffer, request body)
pub fn load_roster_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RosterEntry>, RosterError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.to_entry()?);
    }

    Ok(entries)
}
