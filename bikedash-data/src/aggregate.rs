//! Pure aggregation functions over the loaded tables

use bikedash_common::{
    CorrelationMatrix, DailyRecord, DashboardError, FeatureTable, MonthlySummary, Result, Season,
    WeekdaySummary,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct MonthAccumulator {
    total: u64,
    count: u32,
    windspeed_sum: f64,
    /// Occurrences per season code 1-4
    season_counts: [u32; 4],
}

impl MonthAccumulator {
    fn push(&mut self, record: &DailyRecord) {
        self.total += u64::from(record.total);
        self.count += 1;
        self.windspeed_sum += record.windspeed;
        self.season_counts[usize::from(record.season.code()) - 1] += 1;
    }

    /// Most frequent season; ties go to the lowest season code
    fn modal_season(&self) -> Season {
        let mut best_code = 1u8;
        let mut best_count = self.season_counts[0];
        for (idx, &count) in self.season_counts.iter().enumerate().skip(1) {
            if count > best_count {
                best_count = count;
                best_code = idx as u8 + 1;
            }
        }
        // count > 0 by construction, so the mode is always defined
        Season::try_from(best_code).unwrap_or(Season::Spring)
    }
}

/// Roll daily records up into a per-month summary for one year.
///
/// Records outside the target year are ignored; months with no records are
/// absent from the output rather than zero-filled, so a year with no data
/// yields an empty vec. Output is ascending by month.
#[instrument(skip(records))]
pub fn monthly_summary(records: &[DailyRecord], year: i32) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<u32, MonthAccumulator> = BTreeMap::new();

    for record in records.iter().filter(|r| r.year() == year) {
        months.entry(record.month()).or_default().push(record);
    }

    let result: Vec<MonthlySummary> = months
        .into_iter()
        .map(|(month, acc)| MonthlySummary {
            month,
            total_count: acc.total,
            record_count: acc.count,
            mean_windspeed: acc.windspeed_sum / f64::from(acc.count),
            season: acc.modal_season(),
            // record_count > 0 for every materialized month
            count_per_hour: acc.total as f64 / f64::from(acc.count),
        })
        .collect();

    debug!(year, months = result.len(), "aggregated monthly summary");
    result
}

/// Roll daily records up per weekday, Monday-first regardless of input order.
#[instrument(skip(records))]
pub fn weekday_summary(records: &[DailyRecord]) -> Vec<WeekdaySummary> {
    let mut days: BTreeMap<u8, (u64, u64, u64)> = BTreeMap::new();

    for record in records {
        let entry = days.entry(record.weekday).or_default();
        entry.0 += u64::from(record.casual);
        entry.1 += u64::from(record.registered);
        entry.2 += u64::from(record.total);
    }

    let result: Vec<WeekdaySummary> = days
        .into_iter()
        .map(|(weekday, (total_casual, total_registered, total_count))| WeekdaySummary {
            weekday,
            total_casual,
            total_registered,
            total_count,
        })
        .collect();

    debug!(weekdays = result.len(), "aggregated weekday summary");
    result
}

/// Pearson correlation matrix over every pair of feature columns.
///
/// A constant column has no defined correlation with anything; its
/// off-diagonal coefficients are reported as 0. The diagonal is exactly 1.0
/// and all coefficients are clamped to [-1, 1] against floating-point drift.
#[instrument(skip(features))]
pub fn correlation_matrix(features: &FeatureTable) -> Result<CorrelationMatrix> {
    if features.ncols() == 0 {
        return Err(DashboardError::load("feature table has no columns"));
    }
    if features.nrows() < 2 {
        return Err(DashboardError::load(
            "feature table needs at least 2 rows for correlation",
        ));
    }

    let n = features.ncols();
    let rows = features.nrows() as f64;
    let columns: Vec<Vec<f64>> = (0..n).map(|i| features.column(i)).collect();
    let means: Vec<f64> = columns
        .iter()
        .map(|col| col.iter().sum::<f64>() / rows)
        .collect();

    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let mut cov = 0.0;
            let mut var_i = 0.0;
            let mut var_j = 0.0;
            for row in 0..features.nrows() {
                let di = columns[i][row] - means[i];
                let dj = columns[j][row] - means[j];
                cov += di * dj;
                var_i += di * di;
                var_j += dj * dj;
            }
            let denom = (var_i * var_j).sqrt();
            let r = if denom == 0.0 {
                0.0
            } else {
                (cov / denom).clamp(-1.0, 1.0)
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(features = n, "computed correlation matrix");
    Ok(CorrelationMatrix {
        labels: features.columns.clone(),
        values,
    })
}
