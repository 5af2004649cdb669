//! Military base pay table with sparse year coverage
//!
//! The embedded dataset carries published annual base pay for select
//! years between 1980 and 2024. Lookups resolve a requested year to the
//! greatest table year at or below it; years outside the table range are
//! clamped to the nearest edge and adjusted by a flat inflation
//! assumption. Unknown grades fall back to a fixed figure so that one
//! bad grade never aborts a multi-year projection.

/// Number of pay grades tracked per table year
pub const GRADE_COUNT: usize = 24;

/// Grade identifiers in table column order
pub const GRADES: [&str; GRADE_COUNT] = [
    "e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8", "e9",
    "w1", "w2", "w3", "w4", "w5",
    "o1", "o2", "o3", "o4", "o5", "o6", "o7", "o8", "o9", "o10",
];

/// Annual pay substituted for grades missing from the table
pub const DEFAULT_BASE_PAY: f64 = 35_000.0;

/// Flat annual inflation assumption for years outside the table range
pub const PAY_INFLATION_RATE: f64 = 0.025;

/// Normalize a grade identifier for lookup (case-fold, strip hyphens)
pub fn normalize_grade(grade: &str) -> String {
    grade.trim().to_lowercase().replace('-', "")
}

/// Column index of a normalized grade identifier
pub fn grade_index(normalized: &str) -> Option<usize> {
    GRADES.iter().position(|&g| g == normalized)
}

/// Annual base pay by grade and calendar year
#[derive(Debug, Clone)]
pub struct MilitaryPayTable {
    /// Embedded table years, ascending
    years: Vec<i32>,

    /// Annual base pay per table year, columns in GRADES order
    rows: Vec<[f64; GRADE_COUNT]>,

    /// Annual inflation applied outside the embedded year range
    inflation_rate: f64,

    /// Pay figure substituted for unknown grades
    fallback_pay: f64,
}

impl MilitaryPayTable {
    /// Published pay table embedded in the binary
    pub fn published() -> Self {
        Self::from_rows(Self::published_rows())
    }

    /// Create from loaded CSV tables
    pub fn from_loaded(loaded: &super::loader::LoadedTables) -> Self {
        Self::from_rows(loaded.pay_rows.clone())
    }

    /// Create from year rows; rows are sorted by year internally
    pub fn from_rows(mut rows: Vec<(i32, [f64; GRADE_COUNT])>) -> Self {
        rows.sort_by_key(|&(year, _)| year);
        Self {
            years: rows.iter().map(|&(year, _)| year).collect(),
            rows: rows.into_iter().map(|(_, row)| row).collect(),
            inflation_rate: PAY_INFLATION_RATE,
            fallback_pay: DEFAULT_BASE_PAY,
        }
    }

    /// Annual base pay for a grade and calendar year
    ///
    /// Sparse in-range years resolve to the greatest table year at or
    /// below the request with no adjustment. Out-of-range years are
    /// clamped to the nearest edge and scaled by
    /// `(1 + inflation)^(requested - resolved)`, so years past the table
    /// inflate and years before it deflate. Unknown grades return the
    /// fallback figure. Always returns a finite non-negative number.
    pub fn base_pay(&self, grade: &str, year: i32) -> f64 {
        if self.years.is_empty() {
            return self.fallback_pay;
        }

        let normalized = normalize_grade(grade);
        let col = match grade_index(&normalized) {
            Some(col) => col,
            None => return self.fallback_pay,
        };

        let idx = self.floor_index(year);
        let resolved_year = self.years[idx];
        let pay = self.rows[idx][col];

        let earliest = self.years[0];
        let latest = self.years[self.years.len() - 1];
        if year < earliest || year > latest {
            pay * (1.0 + self.inflation_rate).powi(year - resolved_year)
        } else {
            pay
        }
    }

    /// Index of the greatest table year <= the requested year,
    /// or the earliest year when none qualifies
    fn floor_index(&self, year: i32) -> usize {
        self.years.partition_point(|&y| y <= year).saturating_sub(1)
    }

    /// Earliest embedded table year
    pub fn earliest_year(&self) -> i32 {
        self.years.first().copied().unwrap_or(0)
    }

    /// Latest embedded table year
    pub fn latest_year(&self) -> i32 {
        self.years.last().copied().unwrap_or(0)
    }

    /// Embedded table years, ascending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Override the out-of-range inflation assumption
    pub fn set_inflation_rate(&mut self, rate: f64) {
        self.inflation_rate = rate;
    }

    /// Published annual base pay rows from the DoD pay charts
    ///
    /// Columns follow GRADES order: E-1..E-9, W-1..W-5, O-1..O-10.
    fn published_rows() -> Vec<(i32, [f64; GRADE_COUNT])> {
        vec![
            (1980, [
                5783.0, 6476.0, 6998.0, 7787.0, 8722.0, 9904.0, 11474.0, 13170.0, 16090.0,
                10866.0, 12270.0, 13875.0, 15385.0, 17947.0,
                9707.0, 11184.0, 12943.0, 14732.0, 17070.0, 19666.0, 26009.0, 31303.0, 36875.0, 42664.0,
            ]),
            (1985, [
                7711.0, 8635.0, 9331.0, 10382.0, 11629.0, 13205.0, 15298.0, 17559.0, 21454.0,
                14488.0, 16360.0, 18500.0, 20513.0, 23930.0,
                12943.0, 14912.0, 17257.0, 19643.0, 22761.0, 26221.0, 34679.0, 41738.0, 49167.0, 56885.0,
            ]),
            (1990, [
                9364.0, 10486.0, 11330.0, 12607.0, 14121.0, 16034.0, 18576.0, 21322.0, 26051.0,
                17593.0, 19866.0, 22464.0, 24908.0, 29058.0,
                15716.0, 18107.0, 20955.0, 23852.0, 27638.0, 31840.0, 42110.0, 50682.0, 59703.0, 69074.0,
            ]),
            (1995, [
                11291.0, 12644.0, 13663.0, 15203.0, 17028.0, 19336.0, 22401.0, 25712.0, 31414.0,
                21215.0, 23955.0, 27090.0, 30037.0, 35040.0,
                18952.0, 21835.0, 25269.0, 28762.0, 33328.0, 38396.0, 50779.0, 61116.0, 71994.0, 83296.0,
            ]),
            (2000, [
                13770.0, 15420.0, 16662.0, 18540.0, 20766.0, 23580.0, 27318.0, 31356.0, 38310.0,
                25872.0, 29214.0, 33036.0, 36630.0, 42732.0,
                23112.0, 26628.0, 30816.0, 35076.0, 40644.0, 46824.0, 61926.0, 74532.0, 87798.0, 101580.0,
            ]),
            (2005, [
                17075.0, 19121.0, 20661.0, 22990.0, 25750.0, 29239.0, 33874.0, 38881.0, 47504.0,
                32081.0, 36225.0, 40965.0, 45421.0, 52988.0,
                28659.0, 33019.0, 38212.0, 43494.0, 50399.0, 58062.0, 76788.0, 92420.0, 108870.0, 125959.0,
            ]),
            (2010, [
                20380.0, 22822.0, 24660.0, 27439.0, 30734.0, 34898.0, 40431.0, 46407.0, 56699.0,
                38291.0, 43237.0, 48893.0, 54212.0, 63243.0,
                34206.0, 39409.0, 45608.0, 51912.0, 60153.0, 69300.0, 91650.0, 110307.0, 129941.0, 150338.0,
            ]),
            (2015, [
                22583.0, 25289.0, 27326.0, 30406.0, 34056.0, 38671.0, 44802.0, 51424.0, 62828.0,
                42430.0, 47911.0, 54179.0, 60073.0, 70080.0,
                37904.0, 43670.0, 50538.0, 57525.0, 66656.0, 76791.0, 101559.0, 122232.0, 143989.0, 166591.0,
            ]),
            (2020, [
                24786.0, 27756.0, 29992.0, 33372.0, 37379.0, 42444.0, 49172.0, 56441.0, 68958.0,
                46570.0, 52585.0, 59465.0, 65934.0, 76918.0,
                41602.0, 47930.0, 55469.0, 63137.0, 73159.0, 84283.0, 111467.0, 134158.0, 158036.0, 182844.0,
            ]),
            (2022, [
                26163.0, 29298.0, 31658.0, 35226.0, 39455.0, 44802.0, 51904.0, 59576.0, 72789.0,
                49157.0, 55507.0, 62768.0, 69597.0, 81191.0,
                43913.0, 50593.0, 58550.0, 66644.0, 77224.0, 88966.0, 117659.0, 141611.0, 166816.0, 193002.0,
            ]),
            (2024, [
                27540.0, 30840.0, 33324.0, 37080.0, 41532.0, 47160.0, 54636.0, 62712.0, 76620.0,
                51744.0, 58428.0, 66072.0, 73260.0, 85464.0,
                46224.0, 53256.0, 61632.0, 70152.0, 81288.0, 93648.0, 123852.0, 149064.0, 175596.0, 203160.0,
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_published_lookups() {
        let table = MilitaryPayTable::published();

        assert_eq!(table.base_pay("e5", 2024), 41532.0);
        assert_eq!(table.base_pay("o6", 2024), 93648.0);
        assert_eq!(table.base_pay("e1", 1980), 5783.0);
        assert_eq!(table.base_pay("w3", 2000), 33036.0);
        assert_eq!(table.base_pay("o10", 2024), 203160.0);
    }

    #[test]
    fn test_grade_normalization() {
        let table = MilitaryPayTable::published();

        assert_eq!(table.base_pay("E-5", 2024), table.base_pay("e5", 2024));
        assert_eq!(table.base_pay("O-6", 2024), table.base_pay("o6", 2024));
        assert_eq!(table.base_pay(" W4 ", 2020), table.base_pay("w4", 2020));
    }

    #[test]
    fn test_unknown_grade_falls_back() {
        let table = MilitaryPayTable::published();

        assert_eq!(table.base_pay("z9", 2024), DEFAULT_BASE_PAY);
        assert_eq!(table.base_pay("", 2024), DEFAULT_BASE_PAY);
        assert_eq!(table.base_pay("e10", 2024), DEFAULT_BASE_PAY);
    }

    #[test]
    fn test_floor_lookup_over_sparse_years() {
        let table = MilitaryPayTable::published();

        // 1982 resolves down to the 1980 row, with no adjustment
        assert_eq!(table.base_pay("e5", 1982), table.base_pay("e5", 1980));
        // 2021 resolves down to 2020, 2023 down to 2022
        assert_eq!(table.base_pay("e5", 2021), 37379.0);
        assert_eq!(table.base_pay("e5", 2023), 39455.0);
    }

    #[test]
    fn test_future_years_extrapolate() {
        let table = MilitaryPayTable::published();

        let expected = table.base_pay("e5", 2024) * 1.025_f64.powi(2);
        let actual = table.base_pay("e5", 2026);
        assert!((actual - expected).abs() < 1e-6, "got {}", actual);
    }

    #[test]
    fn test_pre_table_years_deflate() {
        let table = MilitaryPayTable::published();

        let expected = table.base_pay("e5", 1980) * 1.025_f64.powi(-2);
        let actual = table.base_pay("e5", 1978);
        assert!((actual - expected).abs() < 1e-6, "got {}", actual);
        assert!(actual > 0.0);
    }

    #[test]
    fn test_inflation_rate_override() {
        let mut table = MilitaryPayTable::published();
        table.set_inflation_rate(0.0);

        assert_eq!(table.base_pay("e5", 2030), table.base_pay("e5", 2024));
    }

    #[test]
    fn test_published_rows_non_decreasing() {
        let table = MilitaryPayTable::published();

        for col in 0..GRADE_COUNT {
            for idx in 1..table.rows.len() {
                assert!(
                    table.rows[idx][col] >= table.rows[idx - 1][col],
                    "{} decreases between {} and {}",
                    GRADES[col],
                    table.years[idx - 1],
                    table.years[idx],
                );
            }
        }
    }

    #[test]
    fn test_rows_sorted_after_construction() {
        let table = MilitaryPayTable::from_rows(vec![
            (2020, [1000.0; GRADE_COUNT]),
            (2000, [500.0; GRADE_COUNT]),
            (2010, [750.0; GRADE_COUNT]),
        ]);

        assert_eq!(table.years(), &[2000, 2010, 2020]);
        assert_eq!(table.base_pay("e1", 2012), 750.0);
    }

    #[test]
    fn test_empty_table_falls_back() {
        let table = MilitaryPayTable::from_rows(Vec::new());
        assert_eq!(table.base_pay("e5", 2024), DEFAULT_BASE_PAY);
    }
}
