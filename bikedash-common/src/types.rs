//! Domain types shared across the dashboard crates

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Season of a daily record, keyed by the dataset's 1-4 season codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Numeric season code as used by the input tables (1-4)
    pub fn code(self) -> u8 {
        match self {
            Self::Spring => 1,
            Self::Summer => 2,
            Self::Fall => 3,
            Self::Winter => 4,
        }
    }

    /// Display name for legends and captions
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    /// Fixed background band color for the seasonal time series
    pub fn band_color(self) -> &'static str {
        match self {
            Self::Spring => "#A0E7E5",
            Self::Summer => "#B4F8C8",
            Self::Fall => "#FFAEBC",
            Self::Winter => "#FBE7C6",
        }
    }

    /// All seasons in code order
    pub fn all() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }
}

impl TryFrom<u8> for Season {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Spring),
            2 => Ok(Self::Summer),
            3 => Ok(Self::Fall),
            4 => Ok(Self::Winter),
            other => Err(format!("invalid season code: {other}")),
        }
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> Self {
        season.code()
    }
}

/// Display label for a weekday code (0 = Monday .. 6 = Sunday)
pub fn weekday_label(weekday: u8) -> &'static str {
    match weekday {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "Unknown",
    }
}

/// One row per calendar day of the bike-sharing dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    /// Weekday code, 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    /// Normalized temperature in [0, 1]
    pub temp: f64,
    /// Normalized windspeed in [0, 1]
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    /// Invariant: total == casual + registered, enforced at load time
    pub total: u32,
}

impl DailyRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month 1-12
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Monthly rollup of daily records for one selected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar month 1-12
    pub month: u32,
    /// Sum of daily totals over the month
    pub total_count: u64,
    /// Number of daily records contributing; always > 0 for materialized rows
    pub record_count: u32,
    pub mean_windspeed: f64,
    /// Most frequent season among the month's records; ties go to the lowest code
    pub season: Season,
    /// total_count / record_count
    pub count_per_hour: f64,
}

/// Per-weekday rollup of casual/registered/total rentals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySummary {
    /// Weekday code, 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    pub total_casual: u64,
    pub total_registered: u64,
    pub total_count: u64,
}

/// Header-labeled table of numeric feature columns, ready for correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub columns: Vec<String>,
    /// Row-major values; every row has columns.len() entries
    pub rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, top to bottom
    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[idx]).collect()
    }
}

/// Symmetric correlation matrix over a fixed set of feature columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major square matrix of Pearson coefficients
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Number of feature columns (matrix side length)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Check the structural invariants: square shape, unit diagonal,
    /// symmetry and all coefficients within [-1, 1].
    pub fn validate(&self) -> Result<(), String> {
        let n = self.labels.len();
        if self.values.len() != n {
            return Err(format!("expected {n} rows, found {}", self.values.len()));
        }
        for (i, row) in self.values.iter().enumerate() {
            if row.len() != n {
                return Err(format!("row {i} has {} columns, expected {n}", row.len()));
            }
        }
        for i in 0..n {
            if self.values[i][i] != 1.0 {
                return Err(format!("diagonal entry {i} is {}, expected 1.0", self.values[i][i]));
            }
            for j in 0..n {
                let v = self.values[i][j];
                if !(-1.0..=1.0).contains(&v) {
                    return Err(format!("coefficient [{i}][{j}] = {v} outside [-1, 1]"));
                }
                if (v - self.values[j][i]).abs() > 1e-9 {
                    return Err(format!("matrix not symmetric at [{i}][{j}]"));
                }
            }
        }
        Ok(())
    }
}

/// Currently chosen reporting year, threaded explicitly through each render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSelection(i32);

impl YearSelection {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    /// Default selection: the first (lowest) available year
    pub fn first_available(years: &[i32]) -> Option<Self> {
        years.iter().min().copied().map(Self)
    }

    pub fn year(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_codes_round_trip() {
        for season in Season::all() {
            assert_eq!(Season::try_from(season.code()).unwrap(), season);
        }
        assert!(Season::try_from(0).is_err());
        assert!(Season::try_from(5).is_err());
    }

    #[test]
    fn test_season_band_colors() {
        assert_eq!(Season::Spring.band_color(), "#A0E7E5");
        assert_eq!(Season::Summer.band_color(), "#B4F8C8");
        assert_eq!(Season::Fall.band_color(), "#FFAEBC");
        assert_eq!(Season::Winter.band_color(), "#FBE7C6");
    }

    #[test]
    fn test_weekday_labels_monday_first() {
        assert_eq!(weekday_label(0), "Monday");
        assert_eq!(weekday_label(4), "Friday");
        assert_eq!(weekday_label(6), "Sunday");
        assert_eq!(weekday_label(7), "Unknown");
    }

    #[test]
    fn test_daily_record_derived_fields() {
        let record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 3, 14).unwrap(),
            season: Season::Spring,
            weekday: 0,
            temp: 0.4,
            windspeed: 0.2,
            casual: 120,
            registered: 880,
            total: 1000,
        };
        assert_eq!(record.year(), 2011);
        assert_eq!(record.month(), 3);
    }

    #[test]
    fn test_correlation_matrix_validation() {
        let ok = CorrelationMatrix {
            labels: vec!["a".into(), "b".into()],
            values: vec![vec![1.0, 0.5], vec![0.5, 1.0]],
        };
        assert!(ok.validate().is_ok());

        let bad_diag = CorrelationMatrix {
            labels: vec!["a".into(), "b".into()],
            values: vec![vec![0.9, 0.5], vec![0.5, 1.0]],
        };
        assert!(bad_diag.validate().is_err());

        let out_of_range = CorrelationMatrix {
            labels: vec!["a".into(), "b".into()],
            values: vec![vec![1.0, 1.5], vec![1.5, 1.0]],
        };
        assert!(out_of_range.validate().is_err());

        let asymmetric = CorrelationMatrix {
            labels: vec!["a".into(), "b".into()],
            values: vec![vec![1.0, 0.5], vec![0.4, 1.0]],
        };
        assert!(asymmetric.validate().is_err());
    }

    #[test]
    fn test_year_selection_defaults_to_lowest() {
        assert_eq!(
            YearSelection::first_available(&[2012, 2011]),
            Some(YearSelection::new(2011))
        );
        assert_eq!(YearSelection::first_available(&[]), None);
    }

    #[test]
    fn test_feature_table_column_access() {
        let table = FeatureTable {
            columns: vec!["temp".into(), "cnt".into()],
            rows: vec![vec![0.1, 100.0], vec![0.2, 200.0]],
        };
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.column(1), vec![100.0, 200.0]);
    }
}
