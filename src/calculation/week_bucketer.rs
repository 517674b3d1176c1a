//! Week detection and bucketing.
//!
//! Groups normalized shifts by employee and by the calendar week their local
//! start time falls in. End times never influence the bucket, so a shift that
//! runs past midnight on the last day of a week stays in the week it started.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::WeekStart;
use crate::models::{NormalizedShift, WeekBucket, WeekKey};

/// Returns the first day of the week containing `local_start`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::start_of_week;
/// use shift_payroll::config::WeekStart;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// // 2022-08-24 is a Wednesday
/// let start = NaiveDateTime::parse_from_str("2022-08-24 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(start_of_week(start, WeekStart::Sunday), NaiveDate::from_ymd_opt(2022, 8, 21).unwrap());
/// assert_eq!(start_of_week(start, WeekStart::Monday), NaiveDate::from_ymd_opt(2022, 8, 22).unwrap());
/// ```
pub fn start_of_week(local_start: NaiveDateTime, week_start: WeekStart) -> NaiveDate {
    let date = local_start.date();
    date - Duration::days(i64::from(week_start.days_into_week(date)))
}

/// Returns the bucket key for a normalized shift.
pub fn week_key(shift: &NormalizedShift, week_start: WeekStart) -> WeekKey {
    WeekKey {
        employee_id: shift.employee_id,
        week_start: start_of_week(shift.start_time, week_start),
    }
}

/// Groups shifts into one bucket per (employee, week).
///
/// Buckets are returned ordered by employee, then by week. Within a bucket,
/// shifts keep the order they were supplied in.
pub fn bucket_by_week(shifts: Vec<NormalizedShift>, week_start: WeekStart) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<WeekKey, WeekBucket> = BTreeMap::new();

    for shift in shifts {
        let key = week_key(&shift, week_start);
        buckets
            .entry(key)
            .or_insert_with(|| WeekBucket::new(key))
            .shifts
            .push(shift);
    }

    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn make_datetime(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn make_shift(shift_id: i64, employee_id: i64, start: &str, end: &str) -> NormalizedShift {
        NormalizedShift {
            shift_id,
            employee_id,
            start_time: make_datetime(start),
            end_time: make_datetime(end),
        }
    }

    #[test]
    fn test_sunday_is_its_own_week_start() {
        let start = make_datetime("2022-08-21 00:00:00");
        assert_eq!(start_of_week(start, WeekStart::Sunday), make_date("2022-08-21"));
    }

    #[test]
    fn test_saturday_late_night_belongs_to_previous_sunday() {
        let start = make_datetime("2022-08-27 23:59:59");
        assert_eq!(start_of_week(start, WeekStart::Sunday), make_date("2022-08-21"));
    }

    #[test]
    fn test_week_start_crosses_month_and_year() {
        // 2022-09-01 is a Thursday
        assert_eq!(
            start_of_week(make_datetime("2022-09-01 09:00:00"), WeekStart::Sunday),
            make_date("2022-08-28")
        );
        // 2023-01-01 is a Sunday, 2022-12-31 a Saturday
        assert_eq!(
            start_of_week(make_datetime("2022-12-31 09:00:00"), WeekStart::Sunday),
            make_date("2022-12-25")
        );
    }

    #[test]
    fn test_week_start_is_always_the_configured_weekday() {
        let mut current = make_datetime("2022-08-01 12:00:00");
        for _ in 0..30 {
            for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                let start = start_of_week(current, week_start);
                assert_eq!(start.weekday(), week_start.weekday());
                assert!(start <= current.date());
                assert!(current.date() - start < Duration::days(7));
            }
            current += Duration::days(1);
        }
    }

    #[test]
    fn test_monday_week_start() {
        let sunday = make_datetime("2022-08-28 10:00:00");
        assert_eq!(start_of_week(sunday, WeekStart::Monday), make_date("2022-08-22"));
        assert_eq!(
            start_of_week(sunday, WeekStart::Monday).weekday(),
            Weekday::Mon
        );
    }

    #[test]
    fn test_bucket_groups_by_employee_and_week() {
        let shifts = vec![
            make_shift(1, 123, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
            make_shift(2, 456, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
            make_shift(3, 123, "2022-08-23 08:00:00", "2022-08-23 16:00:00"),
            make_shift(4, 123, "2022-08-29 08:00:00", "2022-08-29 16:00:00"),
        ];

        let buckets = bucket_by_week(shifts, WeekStart::Sunday);
        assert_eq!(buckets.len(), 3);

        assert_eq!(buckets[0].key.employee_id, 123);
        assert_eq!(buckets[0].key.week_start, make_date("2022-08-21"));
        let ids: Vec<i64> = buckets[0].shifts.iter().map(|s| s.shift_id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(buckets[1].key.employee_id, 123);
        assert_eq!(buckets[1].key.week_start, make_date("2022-08-28"));

        assert_eq!(buckets[2].key.employee_id, 456);
    }

    #[test]
    fn test_bucket_uses_start_time_only() {
        // Saturday night into Sunday morning stays in the starting week.
        let shifts = vec![make_shift(1, 123, "2022-08-27 22:00:00", "2022-08-28 02:00:00")];

        let buckets = bucket_by_week(shifts, WeekStart::Sunday);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].key.week_start, make_date("2022-08-21"));
    }

    #[test]
    fn test_bucket_preserves_input_order_within_week() {
        let shifts = vec![
            make_shift(3, 123, "2022-08-24 08:00:00", "2022-08-24 16:00:00"),
            make_shift(1, 123, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
        ];

        let buckets = bucket_by_week(shifts, WeekStart::Sunday);
        let ids: Vec<i64> = buckets[0].shifts.iter().map(|s| s.shift_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_bucket_empty_input() {
        assert!(bucket_by_week(Vec::new(), WeekStart::Sunday).is_empty());
    }
}
