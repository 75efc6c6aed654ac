//! CSV table loading with typed rows and schema validation

use bikedash_common::{
    DailyRecord, DashboardError, FeatureTable, MonthlySummary, Result, Season,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Date format used by the daily record table
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw daily row as it appears in the input file; extra columns are ignored
#[derive(Debug, Deserialize)]
struct RawDailyRow {
    dteday: String,
    season: u8,
    weekday: u8,
    temp: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

impl RawDailyRow {
    fn into_record(self, line: usize) -> Result<DailyRecord> {
        let date = NaiveDate::parse_from_str(&self.dteday, DATE_FORMAT).map_err(|err| {
            DashboardError::load_with_source(
                format!("row {line}: invalid date '{}'", self.dteday),
                err,
            )
        })?;
        let season = Season::try_from(self.season)
            .map_err(|msg| DashboardError::load(format!("row {line}: {msg}")))?;
        if self.weekday > 6 {
            return Err(DashboardError::load(format!(
                "row {line}: weekday code {} outside 0-6",
                self.weekday
            )));
        }
        // Widen before summing so adversarial counts cannot overflow u32
        if u64::from(self.casual) + u64::from(self.registered) != u64::from(self.cnt) {
            return Err(DashboardError::load(format!(
                "row {line}: cnt {} != casual {} + registered {}",
                self.cnt, self.casual, self.registered
            )));
        }
        Ok(DailyRecord {
            date,
            season,
            weekday: self.weekday,
            temp: self.temp,
            windspeed: self.windspeed,
            casual: self.casual,
            registered: self.registered,
            total: self.cnt,
        })
    }
}

/// Raw monthly summary row for externally precomputed per-year tables
#[derive(Debug, Deserialize)]
struct RawMonthlyRow {
    month: u32,
    total_cnt: u64,
    record_count: u32,
    mean_windspeed: f64,
    season: u8,
    cnt_per_hour: f64,
}

impl RawMonthlyRow {
    fn into_summary(self, line: usize) -> Result<MonthlySummary> {
        if !(1..=12).contains(&self.month) {
            return Err(DashboardError::load(format!(
                "row {line}: month {} outside 1-12",
                self.month
            )));
        }
        if self.record_count == 0 {
            return Err(DashboardError::load(format!(
                "row {line}: record_count must be > 0 for materialized months"
            )));
        }
        let season = Season::try_from(self.season)
            .map_err(|msg| DashboardError::load(format!("row {line}: {msg}")))?;
        Ok(MonthlySummary {
            month: self.month,
            total_count: self.total_cnt,
            record_count: self.record_count,
            mean_windspeed: self.mean_windspeed,
            season,
            count_per_hour: self.cnt_per_hour,
        })
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| {
            DashboardError::load_with_source(
                format!("failed to open table '{}'", path.display()),
                err,
            )
        })
}

/// Read the daily record table. Fails on a missing file, malformed row or
/// an unexpected column set; the invariant cnt == casual + registered is
/// checked per row.
pub fn read_daily_records(path: &Path) -> Result<Vec<DailyRecord>> {
    let mut reader = open_reader(path)?;
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawDailyRow>().enumerate() {
        // Header is line 1, first data row is line 2
        let line = idx + 2;
        let raw = row.map_err(|err| {
            DashboardError::load_with_source(
                format!("'{}' row {line}: malformed daily record", path.display()),
                err,
            )
        })?;
        records.push(raw.into_record(line)?);
    }
    info!(rows = records.len(), path = %path.display(), "loaded daily record table");
    Ok(records)
}

/// Read an externally precomputed monthly summary table for one year.
pub fn read_monthly_summary(path: &Path) -> Result<Vec<MonthlySummary>> {
    let mut reader = open_reader(path)?;
    let mut summaries = Vec::new();
    for (idx, row) in reader.deserialize::<RawMonthlyRow>().enumerate() {
        let line = idx + 2;
        let raw = row.map_err(|err| {
            DashboardError::load_with_source(
                format!("'{}' row {line}: malformed monthly summary", path.display()),
                err,
            )
        })?;
        summaries.push(raw.into_summary(line)?);
    }
    debug!(rows = summaries.len(), path = %path.display(), "loaded monthly summary table");
    Ok(summaries)
}

/// Read a correlation-ready feature table: header-labeled columns where
/// every cell must parse as a float.
pub fn read_feature_table(path: &Path) -> Result<FeatureTable> {
    let mut reader = open_reader(path)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| {
            DashboardError::load_with_source(
                format!("'{}': missing feature table header", path.display()),
                err,
            )
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.is_empty() {
        return Err(DashboardError::load(format!(
            "'{}': feature table has no columns",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record = record.map_err(|err| {
            DashboardError::load_with_source(
                format!("'{}' row {line}: malformed feature row", path.display()),
                err,
            )
        })?;
        let mut row = Vec::with_capacity(columns.len());
        for (col, cell) in record.iter().enumerate() {
            let value: f64 = cell.parse().map_err(|err| {
                DashboardError::load_with_source(
                    format!(
                        "'{}' row {line}, column '{}': non-numeric value '{cell}'",
                        path.display(),
                        columns.get(col).map(String::as_str).unwrap_or("?")
                    ),
                    err,
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    debug!(
        rows = rows.len(),
        cols = columns.len(),
        path = %path.display(),
        "loaded feature table"
    );
    Ok(FeatureTable { columns, rows })
}

/// Distinct years present in the daily table, sorted ascending
pub fn available_years(records: &[DailyRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(DailyRecord::year).collect();
    years.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const DAILY_HEADER: &str = "dteday,season,weekday,temp,windspeed,casual,registered,cnt";

    #[test]
    fn test_read_daily_records() {
        let file = write_csv(&format!(
            "{DAILY_HEADER}\n2011-01-01,1,5,0.344,0.160,331,654,985\n2011-01-02,1,6,0.363,0.249,131,670,801\n"
        ));
        let records = read_daily_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[0].season, Season::Spring);
        assert_eq!(records[0].total, 985);
        assert_eq!(records[1].casual, 131);
    }

    #[test]
    fn test_daily_records_ignore_extra_columns() {
        let header = "instant,dteday,season,yr,mnth,weekday,temp,windspeed,casual,registered,cnt";
        let file = write_csv(&format!(
            "{header}\n1,2011-01-01,1,0,1,5,0.344,0.160,331,654,985\n"
        ));
        let records = read_daily_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].registered, 654);
    }

    #[test]
    fn test_daily_records_reject_count_mismatch() {
        let file = write_csv(&format!(
            "{DAILY_HEADER}\n2011-01-01,1,5,0.344,0.160,331,654,1000\n"
        ));
        let err = read_daily_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("cnt 1000"));
    }

    #[test]
    fn test_daily_records_reject_huge_counts_without_overflow() {
        // casual + registered exceeds u32::MAX; must report the mismatch,
        // not panic under overflow checks
        let file = write_csv(&format!(
            "{DAILY_HEADER}\n2011-01-01,1,5,0.344,0.160,4000000000,4000000000,100\n"
        ));
        let err = read_daily_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("cnt 100"));
    }

    #[test]
    fn test_daily_records_reject_bad_season() {
        let file = write_csv(&format!(
            "{DAILY_HEADER}\n2011-01-01,7,5,0.344,0.160,331,654,985\n"
        ));
        let err = read_daily_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("season code"));
    }

    #[test]
    fn test_daily_records_reject_missing_column() {
        // No cnt column at all
        let file = write_csv("dteday,season,weekday,temp,windspeed,casual,registered\n2011-01-01,1,5,0.344,0.160,331,654\n");
        assert!(read_daily_records(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = read_daily_records(Path::new("/nonexistent/daily.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::Load { .. }));
    }

    #[test]
    fn test_read_monthly_summary() {
        let file = write_csv(
            "month,total_cnt,record_count,mean_windspeed,season,cnt_per_hour\n1,38189,31,0.207,1,1231.9\n2,48215,28,0.212,1,1722.0\n",
        );
        let summaries = read_monthly_summary(file.path()).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].month, 1);
        assert_eq!(summaries[0].total_count, 38189);
        assert_eq!(summaries[1].season, Season::Spring);
    }

    #[test]
    fn test_monthly_summary_rejects_zero_record_count() {
        let file = write_csv(
            "month,total_cnt,record_count,mean_windspeed,season,cnt_per_hour\n1,0,0,0.0,1,0.0\n",
        );
        assert!(read_monthly_summary(file.path()).is_err());
    }

    #[test]
    fn test_read_feature_table() {
        let file = write_csv("temp,windspeed,cnt\n0.3,0.1,985\n0.4,0.2,801\n");
        let table = read_feature_table(file.path()).unwrap();
        assert_eq!(table.columns, vec!["temp", "windspeed", "cnt"]);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.column(2), vec![985.0, 801.0]);
    }

    #[test]
    fn test_feature_table_rejects_non_numeric() {
        let file = write_csv("temp,cnt\n0.3,abc\n");
        let err = read_feature_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn test_available_years_sorted_distinct() {
        let file = write_csv(&format!(
            "{DAILY_HEADER}\n2012-06-01,2,3,0.5,0.1,10,90,100\n2011-01-01,1,5,0.3,0.2,5,45,50\n2012-01-01,1,6,0.3,0.2,5,45,50\n"
        ));
        let records = read_daily_records(file.path()).unwrap();
        assert_eq!(available_years(&records), vec![2011, 2012]);
    }
}
