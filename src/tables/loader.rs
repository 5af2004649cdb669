//! CSV-based rate table loader
//!
//! Loads pay and composite rate overrides from CSV files in data/tables/

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use thiserror::Error;

use super::pay::{grade_index, normalize_grade, DEFAULT_BASE_PAY, GRADE_COUNT};

/// Default path to the rate table directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

const PAY_FILE: &str = "military_pay.csv";
const COMPOSITE_FILE: &str = "composite_rates.csv";

/// Error raised while loading rate table CSVs
#[derive(Debug, Error)]
pub enum TableError {
    /// Table file could not be opened
    #[error("failed to open {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV record could not be read
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A cell held a value that does not parse as a number
    #[error("invalid value in {file}: {message}")]
    InvalidValue { file: String, message: String },
}

/// Load pay rows from military_pay.csv (year,grade,annual_pay)
///
/// Rows are grouped by year. Grades absent from a year keep the fallback
/// pay figure; grades outside the known set are skipped with a warning.
pub fn load_pay_rows(dir: &Path) -> Result<Vec<(i32, [f64; GRADE_COUNT])>, TableError> {
    load_pay_rows_from_reader(open(dir, PAY_FILE)?)
}

/// Load pay rows from any reader (e.g., string buffer, request body)
pub fn load_pay_rows_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<(i32, [f64; GRADE_COUNT])>, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_year: BTreeMap<i32, [f64; GRADE_COUNT]> = BTreeMap::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| TableError::Csv {
            file: PAY_FILE.to_string(),
            source: e,
        })?;
        let year: i32 = parse_field(&record, 0, PAY_FILE)?;
        let grade = normalize_grade(record.get(1).unwrap_or(""));
        let pay: f64 = parse_field(&record, 2, PAY_FILE)?;

        match grade_index(&grade) {
            Some(col) => {
                let row = by_year.entry(year).or_insert([DEFAULT_BASE_PAY; GRADE_COUNT]);
                row[col] = pay;
            }
            None => log::warn!("skipping unknown grade '{}' in {}", grade, PAY_FILE),
        }
    }

    Ok(by_year.into_iter().collect())
}

/// Load composite rates from composite_rates.csv (year,rate)
pub fn load_composite_rates(dir: &Path) -> Result<Vec<(i32, f64)>, TableError> {
    load_composite_rates_from_reader(open(dir, COMPOSITE_FILE)?)
}

/// Load composite rates from any reader
pub fn load_composite_rates_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<(i32, f64)>, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| TableError::Csv {
            file: COMPOSITE_FILE.to_string(),
            source: e,
        })?;
        let year: i32 = parse_field(&record, 0, COMPOSITE_FILE)?;
        let rate: f64 = parse_field(&record, 1, COMPOSITE_FILE)?;
        rates.push((year, rate));
    }

    Ok(rates)
}

fn open(dir: &Path, name: &str) -> Result<File, TableError> {
    File::open(dir.join(name)).map_err(|e| TableError::Io {
        file: name.to_string(),
        source: e,
    })
}

fn parse_field<T>(record: &csv::StringRecord, idx: usize, file: &str) -> Result<T, TableError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    record
        .get(idx)
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|e| TableError::InvalidValue {
            file: file.to_string(),
            message: format!("column {}: {}", idx, e),
        })
}

/// Rate table rows loaded from CSV overrides
pub struct LoadedTables {
    pub pay_rows: Vec<(i32, [f64; GRADE_COUNT])>,
    pub composite_rates: Vec<(i32, f64)>,
}

impl LoadedTables {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, TableError> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(dir: &Path) -> Result<Self, TableError> {
        Ok(Self {
            pay_rows: load_pay_rows(dir)?,
            composite_rates: load_composite_rates(dir)?,
        })
    }
}
