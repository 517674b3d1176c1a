//! Weekly bucket and report row models.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift::{EmployeeId, NormalizedShift, ShiftId};

/// Key of a weekly bucket: one employee in one calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    /// The employee the bucket belongs to.
    pub employee_id: EmployeeId,
    /// First day of the week in the payroll timezone.
    pub week_start: NaiveDate,
}

/// The shifts of one employee in one calendar week.
///
/// Overlap detection and hour summation only ever look inside a single
/// bucket, so a shift can never be invalidated by a shift from another week
/// or another employee, even when shift IDs repeat across buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    /// The bucket key.
    pub key: WeekKey,
    /// The shifts in this bucket, in insertion order.
    pub shifts: Vec<NormalizedShift>,
}

impl WeekBucket {
    /// Creates an empty bucket for the given key.
    pub fn new(key: WeekKey) -> Self {
        Self {
            key,
            shifts: Vec::new(),
        }
    }
}

/// One row of the weekly payroll summary.
///
/// Serializes with the field names of the timekeeping export. Hours are
/// rendered as JSON numbers rounded to two decimal places.
///
/// # Example
///
/// ```
/// use shift_payroll::models::ReportRow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let row = ReportRow {
///     employee_id: 123,
///     start_of_week: NaiveDate::from_ymd_opt(2022, 8, 21).unwrap(),
///     regular_hours: Decimal::new(1600, 2),
///     overtime_hours: Decimal::ZERO,
///     invalid_shift_ids: Default::default(),
/// };
/// let json = serde_json::to_value(&row).unwrap();
/// assert_eq!(json["StartOfWeek"], "2022-08-21");
/// assert_eq!(json["RegularHours"], 16.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee this row summarises.
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    /// First day of the week, formatted `YYYY-MM-DD`.
    #[serde(rename = "StartOfWeek")]
    pub start_of_week: NaiveDate,
    /// Payable hours up to the weekly threshold.
    #[serde(rename = "RegularHours", with = "rust_decimal::serde::float")]
    pub regular_hours: Decimal,
    /// Payable hours beyond the weekly threshold.
    #[serde(rename = "OvertimeHours", with = "rust_decimal::serde::float")]
    pub overtime_hours: Decimal,
    /// Shifts excluded from the total because they overlapped another shift.
    #[serde(rename = "InvalidShiftIDs", alias = "InvalidShifts")]
    pub invalid_shift_ids: BTreeSet<ShiftId>,
}

impl ReportRow {
    /// Returns the key of the bucket this row was produced from.
    pub fn key(&self) -> WeekKey {
        WeekKey {
            employee_id: self.employee_id,
            week_start: self.start_of_week,
        }
    }

    /// Returns regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}
