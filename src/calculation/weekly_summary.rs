//! Weekly payroll summary.
//!
//! Runs the whole pipeline over a batch of raw shifts: normalize every shift,
//! bucket by employee and week, then detect overlaps and total hours per
//! bucket. The run is all-or-nothing; the first failure aborts the batch.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{NormalizedShift, ReportRow, ShiftRecord, WeekBucket};

use super::overlap_detection::detect_overlaps;
use super::time_normalizer::normalize_shift;
use super::week_bucketer::bucket_by_week;
use super::weekly_hours::calculate_weekly_hours;

/// Produces the report row for a single weekly bucket.
pub fn summarize_bucket(bucket: &WeekBucket, threshold: Decimal) -> ReportRow {
    let overlaps = detect_overlaps(&bucket.shifts);
    let hours = calculate_weekly_hours(&bucket.shifts, &overlaps.invalid_shift_ids, threshold);

    debug!(
        employee_id = bucket.key.employee_id,
        week_start = %bucket.key.week_start,
        shifts = bucket.shifts.len(),
        invalid_shifts = overlaps.invalid_shift_ids.len(),
        total_hours = %hours.total_hours,
        "Summarised weekly bucket"
    );

    ReportRow {
        employee_id: bucket.key.employee_id,
        start_of_week: bucket.key.week_start,
        regular_hours: hours.regular_hours,
        overtime_hours: hours.overtime_hours,
        invalid_shift_ids: overlaps.invalid_shift_ids,
    }
}

/// Normalizes every record, failing on the first malformed timestamp.
fn normalize_all(
    records: &[ShiftRecord],
    config: &PayrollConfig,
) -> EngineResult<Vec<NormalizedShift>> {
    records
        .iter()
        .map(|record| normalize_shift(record, config))
        .collect()
}

/// Converts raw shifts into one report row per employee and week.
///
/// Rows come out ordered by employee, then by week, but callers should not
/// rely on that ordering.
///
/// # Errors
///
/// Any failure is returned as [`EngineError::Processing`] wrapping the cause;
/// no partial report is produced. Use [`EngineError::is_parse_error`] to tell
/// a malformed timestamp apart from other failures.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::process_shifts;
/// use shift_payroll::config::PayrollConfig;
/// use shift_payroll::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let shifts = vec![
///     ShiftRecord::new(1, 123, "2022-08-22T13:00:00Z", "2022-08-22T21:00:00Z"),
///     ShiftRecord::new(2, 123, "2022-08-23T13:00:00Z", "2022-08-23T21:00:00Z"),
/// ];
///
/// let report = process_shifts(&shifts, &PayrollConfig::default()).unwrap();
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].start_of_week.to_string(), "2022-08-21");
/// assert_eq!(report[0].regular_hours, Decimal::from(16));
/// assert!(report[0].invalid_shift_ids.is_empty());
/// ```
pub fn process_shifts(
    records: &[ShiftRecord],
    config: &PayrollConfig,
) -> EngineResult<Vec<ReportRow>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = normalize_all(records, config).map_err(|err| {
        warn!(error = %err, "Shift normalization failed, aborting run");
        EngineError::processing(err)
    })?;

    let threshold = config.overtime_threshold();
    let report: Vec<ReportRow> = bucket_by_week(normalized, config.week_start)
        .iter()
        .map(|bucket| summarize_bucket(bucket, threshold))
        .collect();

    info!(
        shifts = records.len(),
        rows = report.len(),
        timezone = %config.timezone,
        "Processed shifts into weekly summary"
    );

    Ok(report)
}
