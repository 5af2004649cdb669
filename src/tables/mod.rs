//! Rate tables backing the buy-back calculators

mod interest;
mod pay;
pub mod loader;

pub use interest::{CompositeRateTable, DEFAULT_COMPOSITE_RATE};
pub use loader::{LoadedTables, TableError};
pub use pay::{
    grade_index, normalize_grade, MilitaryPayTable, DEFAULT_BASE_PAY, GRADES, GRADE_COUNT,
    PAY_INFLATION_RATE,
};

use std::path::Path;

/// Container for the rate tables used by the buy-back engine
#[derive(Debug, Clone)]
pub struct RateTables {
    pub pay: MilitaryPayTable,
    pub composite: CompositeRateTable,
}

impl RateTables {
    /// Published tables embedded in the binary
    pub fn default_published() -> Self {
        Self {
            pay: MilitaryPayTable::published(),
            composite: CompositeRateTable::published(),
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self, TableError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, TableError> {
        let loaded = LoadedTables::load_from(path)?;

        Ok(Self {
            pay: MilitaryPayTable::from_loaded(&loaded),
            composite: CompositeRateTable::from_loaded(&loaded),
        })
    }
}
