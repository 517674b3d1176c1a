//! Timestamp normalization into the payroll timezone.
//!
//! This module parses RFC 3339 shift timestamps, converts them into the
//! configured payroll zone, and applies the DST correction to shifts whose
//! start and end fall on opposite sides of a daylight-saving transition.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, SubsecRound};
use chrono_tz::{OffsetComponents, Tz};
use tracing::debug;

use crate::config::{DstWindow, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{NormalizedShift, ShiftId, ShiftRecord};

/// Seconds from midnight to 23:59:59, the clamp target for DST-crossing shifts.
const END_OF_DAY_SECONDS: i64 = 24 * 60 * 60 - 1;

/// Parses an RFC 3339 timestamp carrying an explicit offset or `Z`.
///
/// # Errors
///
/// Returns [`EngineError::Parse`] naming the shift and field when `value`
/// is not a valid RFC 3339 date-time.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::parse_timestamp;
///
/// let instant = parse_timestamp(1, "StartTime", "2022-08-22T08:00:00Z").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2022-08-22T08:00:00+00:00");
///
/// assert!(parse_timestamp(1, "StartTime", "22/08/2022 08:00").is_err());
/// ```
pub fn parse_timestamp(
    shift_id: ShiftId,
    field: &'static str,
    value: &str,
) -> EngineResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| EngineError::Parse {
        shift_id,
        field,
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Returns true if daylight-saving time is in effect at `local`.
pub fn is_dst_active(local: &DateTime<Tz>) -> bool {
    local.offset().dst_offset() != Duration::zero()
}

/// Computes the local end time of a shift after the DST correction.
///
/// The correction runs in two steps:
///
/// 1. If the start and end have different DST flags, the end is clamped to
///    23:59:59 on the start's local date.
/// 2. Independently of step 1, the original end is checked against the fixed
///    [`DstWindow`]: when the start is at or before the spring-forward instant
///    and the original end is at or after the fall-back instant, one hour is
///    added to the (possibly clamped) end.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::adjust_end_for_dst;
/// use shift_payroll::config::DstWindow;
/// use chrono::DateTime;
/// use chrono_tz::America::Chicago;
///
/// // Crosses the 2023-03-12 spring-forward in Chicago.
/// let start = DateTime::parse_from_rfc3339("2023-03-11T20:00:00-06:00").unwrap().with_timezone(&Chicago);
/// let end = DateTime::parse_from_rfc3339("2023-03-12T10:00:00-05:00").unwrap().with_timezone(&Chicago);
///
/// let adjusted = adjust_end_for_dst(&start, &end, &DstWindow::default());
/// assert_eq!(adjusted.to_string(), "2023-03-11 23:59:59");
/// ```
pub fn adjust_end_for_dst(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    window: &DstWindow,
) -> NaiveDateTime {
    let mut adjusted = end.naive_local();

    if is_dst_active(start) != is_dst_active(end) {
        adjusted = start.date_naive().and_time(NaiveTime::MIN)
            + Duration::seconds(END_OF_DAY_SECONDS);
        debug!(
            original_end = %end.naive_local(),
            clamped_end = %adjusted,
            "Shift crosses a DST boundary, clamping end to end of start day"
        );
    }

    if window.is_spanned_by(start, end) {
        adjusted += Duration::hours(1);
        debug!(adjusted_end = %adjusted, "Shift spans the DST window, adding one hour");
    }

    adjusted
}

/// Normalizes a raw shift into naive local time in the payroll timezone.
///
/// Both endpoints are truncated to whole seconds, so comparisons and sorting
/// see the same values as the `YYYY-MM-DD HH:MM:SS` local form.
///
/// # Errors
///
/// Returns [`EngineError::Parse`] if either timestamp is malformed.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::normalize_shift;
/// use shift_payroll::config::PayrollConfig;
/// use shift_payroll::models::ShiftRecord;
///
/// let record = ShiftRecord::new(1, 123, "2022-08-22T13:00:00Z", "2022-08-22T21:00:00Z");
/// let shift = normalize_shift(&record, &PayrollConfig::default()).unwrap();
///
/// // America/Chicago is UTC-5 in August.
/// assert_eq!(shift.start_time.to_string(), "2022-08-22 08:00:00");
/// assert_eq!(shift.end_time.to_string(), "2022-08-22 16:00:00");
/// ```
pub fn normalize_shift(
    record: &ShiftRecord,
    config: &PayrollConfig,
) -> EngineResult<NormalizedShift> {
    let start = parse_timestamp(record.shift_id, "StartTime", &record.start_time)?
        .with_timezone(&config.timezone);
    let end = parse_timestamp(record.shift_id, "EndTime", &record.end_time)?
        .with_timezone(&config.timezone);

    let end_time = adjust_end_for_dst(&start, &end, &config.dst_window).trunc_subsecs(0);

    Ok(NormalizedShift {
        shift_id: record.shift_id,
        employee_id: record.employee_id,
        start_time: start.naive_local().trunc_subsecs(0),
        end_time,
    })
}
