//! Shift models.
//!
//! [`ShiftRecord`] is the raw punch-clock shape received from a loader or an
//! HTTP body. [`NormalizedShift`] is the same shift after its timestamps have
//! been converted to naive local time in the payroll timezone.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a single shift. Unique within one run.
pub type ShiftId = i64;

/// Identifier of an employee.
pub type EmployeeId = i64;

/// Canonical text form of a normalized timestamp.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw shift record as exported by the timekeeping system.
///
/// Timestamps are kept as the original strings; they are only interpreted
/// during normalization so that a malformed value can be reported against
/// the shift that carried it.
///
/// # Example
///
/// ```
/// use shift_payroll::models::ShiftRecord;
///
/// let json = r#"{
///     "ShiftID": 1,
///     "EmployeeID": 123,
///     "StartTime": "2022-08-22T08:00:00Z",
///     "EndTime": "2022-08-22T16:00:00Z"
/// }"#;
/// let record: ShiftRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.employee_id, 123);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    #[serde(rename = "ShiftID")]
    pub shift_id: ShiftId,
    /// The employee who worked the shift.
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    /// RFC 3339 start timestamp, e.g. `2022-08-22T08:00:00Z`.
    #[serde(rename = "StartTime")]
    pub start_time: String,
    /// RFC 3339 end timestamp.
    #[serde(rename = "EndTime")]
    pub end_time: String,
}

impl ShiftRecord {
    /// Creates a new shift record.
    pub fn new(
        shift_id: ShiftId,
        employee_id: EmployeeId,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            shift_id,
            employee_id,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A shift whose timestamps are naive local times in the payroll timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedShift {
    /// Unique identifier for the shift.
    pub shift_id: ShiftId,
    /// The employee who worked the shift.
    pub employee_id: EmployeeId,
    /// Local start time.
    pub start_time: NaiveDateTime,
    /// Local end time, after any DST adjustment.
    pub end_time: NaiveDateTime,
}

impl NormalizedShift {
    /// Returns the local calendar date the shift started on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns true if this shift's interval intersects `other`'s.
    ///
    /// Touching endpoints do not overlap: a shift ending at 16:00 and another
    /// starting at 16:00 are both kept.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::NormalizedShift;
    /// use chrono::NaiveDateTime;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let morning = NormalizedShift {
    ///     shift_id: 1,
    ///     employee_id: 123,
    ///     start_time: at("2022-08-22 08:00:00"),
    ///     end_time: at("2022-08-22 16:00:00"),
    /// };
    /// let late = NormalizedShift {
    ///     shift_id: 2,
    ///     employee_id: 123,
    ///     start_time: at("2022-08-22 16:00:00"),
    ///     end_time: at("2022-08-22 20:00:00"),
    /// };
    /// assert!(!morning.overlaps(&late));
    /// ```
    pub fn overlaps(&self, other: &NormalizedShift) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Returns the payable duration of the shift in hours.
    ///
    /// The duration is the calendar difference between local start and end.
    /// An inverted shift (end before start) is worth zero hours rather than
    /// a negative amount.
    pub fn duration_hours(&self) -> Decimal {
        let seconds = (self.end_time - self.start_time).num_seconds();
        if seconds <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(seconds) / Decimal::from(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, LOCAL_TIME_FORMAT).unwrap()
    }

    fn make_shift(shift_id: ShiftId, start: &str, end: &str) -> NormalizedShift {
        NormalizedShift {
            shift_id,
            employee_id: 123,
            start_time: make_datetime(start),
            end_time: make_datetime(end),
        }
    }

    #[test]
    fn test_record_deserializes_from_export_keys() {
        let json = r#"[
            {"ShiftID": 1, "EmployeeID": 123, "StartTime": "2022-08-22T08:00:00Z", "EndTime": "2022-08-22T16:00:00Z"},
            {"ShiftID": 2, "EmployeeID": 456, "StartTime": "2022-08-23T08:00:00-05:00", "EndTime": "2022-08-23T16:00:00-05:00"}
        ]"#;

        let records: Vec<ShiftRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ShiftRecord::new(1, 123, "2022-08-22T08:00:00Z", "2022-08-22T16:00:00Z"));
        assert_eq!(records[1].employee_id, 456);
        assert_eq!(records[1].start_time, "2022-08-23T08:00:00-05:00");
    }

    #[test]
    fn test_record_serializes_with_export_keys() {
        let record = ShiftRecord::new(9, 42, "2022-08-22T08:00:00Z", "2022-08-22T16:00:00Z");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["ShiftID"], 9);
        assert_eq!(value["EmployeeID"], 42);
        assert_eq!(value["StartTime"], "2022-08-22T08:00:00Z");
    }

    #[test]
    fn test_record_missing_field_is_rejected() {
        let json = r#"{"ShiftID": 1, "EmployeeID": 123, "StartTime": "2022-08-22T08:00:00Z"}"#;
        let result: Result<ShiftRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_eight_hour_duration() {
        let shift = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00");
        assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
    }

    #[test]
    fn test_overnight_duration() {
        let shift = make_shift(1, "2022-08-21 22:00:00", "2022-08-22 02:00:00");
        assert_eq!(shift.duration_hours(), Decimal::new(4, 0));
    }

    #[test]
    fn test_duration_includes_minutes_and_seconds() {
        // 1h 30m 36s = 1.51h
        let shift = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 09:30:36");
        assert_eq!(shift.duration_hours(), Decimal::new(151, 2));
    }

    #[test]
    fn test_multi_day_duration() {
        let shift = make_shift(1, "2022-08-22 08:00:00", "2022-08-24 10:00:00");
        assert_eq!(shift.duration_hours(), Decimal::new(50, 0));
    }

    #[test]
    fn test_zero_and_inverted_durations_are_zero() {
        let zero = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 08:00:00");
        let inverted = make_shift(2, "2022-08-22 16:00:00", "2022-08-22 08:00:00");

        assert_eq!(zero.duration_hours(), Decimal::ZERO);
        assert_eq!(inverted.duration_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00");
        let b = make_shift(2, "2022-08-22 10:00:00", "2022-08-22 18:00:00");

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_shifts_do_not_overlap() {
        let a = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00");
        let b = make_shift(2, "2022-08-22 16:00:00", "2022-08-22 20:00:00");

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_shift_overlaps() {
        let outer = make_shift(1, "2022-08-22 08:00:00", "2022-08-22 18:00:00");
        let inner = make_shift(2, "2022-08-22 10:00:00", "2022-08-22 12:00:00");

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_start_date() {
        let shift = make_shift(1, "2022-08-21 22:00:00", "2022-08-22 02:00:00");
        assert_eq!(shift.start_date(), NaiveDate::from_ymd_opt(2022, 8, 21).unwrap());
    }
}
