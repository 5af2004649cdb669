//! OPM composite interest rates for unpaid deposit balances
//!
//! One published rate per calendar year. Lookups are exact-match only:
//! a year missing from the table uses the default rate, with no
//! interpolation between published years.

/// Annual rate substituted for years missing from the table
pub const DEFAULT_COMPOSITE_RATE: f64 = 0.03;

/// Composite interest rate table keyed by calendar year
#[derive(Debug, Clone)]
pub struct CompositeRateTable {
    /// (year, annual rate) pairs, ascending by year
    rates: Vec<(i32, f64)>,

    /// Rate substituted for years missing from the table
    default_rate: f64,
}

impl CompositeRateTable {
    /// Published rate series embedded in the binary
    pub fn published() -> Self {
        Self::from_rates(Self::published_rates())
    }

    /// Create from loaded CSV tables
    pub fn from_loaded(loaded: &super::loader::LoadedTables) -> Self {
        Self::from_rates(loaded.composite_rates.clone())
    }

    /// Create from (year, rate) pairs; pairs are sorted by year internally
    pub fn from_rates(mut rates: Vec<(i32, f64)>) -> Self {
        rates.sort_by_key(|&(year, _)| year);
        Self {
            rates,
            default_rate: DEFAULT_COMPOSITE_RATE,
        }
    }

    /// Annual composite rate for a calendar year
    pub fn rate_for(&self, year: i32) -> f64 {
        self.rates
            .binary_search_by_key(&year, |&(y, _)| y)
            .map(|idx| self.rates[idx].1)
            .unwrap_or(self.default_rate)
    }

    /// Earliest published year
    pub fn earliest_year(&self) -> i32 {
        self.rates.first().map(|&(year, _)| year).unwrap_or(0)
    }

    /// Latest published year
    pub fn latest_year(&self) -> i32 {
        self.rates.last().map(|&(year, _)| year).unwrap_or(0)
    }

    /// Published annual composite rates, 1985-2024
    fn published_rates() -> Vec<(i32, f64)> {
        vec![
            // 1985-1989
            (1985, 0.13), (1986, 0.1125), (1987, 0.09), (1988, 0.0875), (1989, 0.09125),
            // 1990-1999
            (1990, 0.0875), (1991, 0.085), (1992, 0.081), (1993, 0.071), (1994, 0.0625),
            (1995, 0.07), (1996, 0.0688), (1997, 0.0688), (1998, 0.0675), (1999, 0.0575),
            // 2000-2009
            (2000, 0.0588), (2001, 0.0613), (2002, 0.055), (2003, 0.05), (2004, 0.0388),
            (2005, 0.0425), (2006, 0.0413), (2007, 0.0488), (2008, 0.0475), (2009, 0.0375),
            // 2010-2019
            (2010, 0.0313), (2011, 0.0288), (2012, 0.0225), (2013, 0.0163), (2014, 0.0163),
            (2015, 0.02), (2016, 0.02), (2017, 0.0188), (2018, 0.0213), (2019, 0.0275),
            // 2020-2024
            (2020, 0.0225), (2021, 0.01375), (2022, 0.01375), (2023, 0.025), (2024, 0.045),
        ]
    }
}
