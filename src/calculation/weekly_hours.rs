//! Weekly hour totals and the regular/overtime split.
//!
//! Sums the duration of every valid shift in a weekly bucket and splits the
//! total at the weekly overtime threshold. Both halves are rounded to two
//! decimal places, half away from zero.

use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{NormalizedShift, ShiftId};

/// Decimal places kept on reported hours.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// The hour breakdown for one weekly bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// Unrounded sum of all valid shift durations.
    pub total_hours: Decimal,
    /// Hours up to the threshold, rounded.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold, rounded.
    pub overtime_hours: Decimal,
    /// IDs of the shifts that were counted, in start-time order.
    pub valid_shift_ids: Vec<ShiftId>,
}

/// Rounds an hour amount to [`HOURS_DECIMAL_PLACES`], half away from zero.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round_hours(Decimal::from_str("7.3333").unwrap()), Decimal::from_str("7.33").unwrap());
/// ```
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits a weekly total into `(regular, overtime)` hours, unrounded.
///
/// Regular hours are capped at `threshold`; overtime is whatever remains and
/// is never negative.
pub fn split_regular_overtime(total_hours: Decimal, threshold: Decimal) -> (Decimal, Decimal) {
    let regular = total_hours.min(threshold);
    let overtime = (total_hours - threshold).max(Decimal::ZERO);
    (regular, overtime)
}

/// Calculates payable hours for a weekly bucket.
///
/// Shifts are ordered by local start time (stable, so equal starts keep
/// their bucket order) and every shift not in `invalid_shift_ids` is summed.
///
/// # Arguments
///
/// * `shifts` - The shifts in the bucket
/// * `invalid_shift_ids` - Shifts excluded by overlap detection
/// * `threshold` - Weekly hours paid at the regular rate
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_weekly_hours;
/// use shift_payroll::models::NormalizedShift;
/// use chrono::{Duration, NaiveDateTime};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
///
/// let monday = NaiveDateTime::parse_from_str("2022-08-22 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shifts: Vec<NormalizedShift> = (0..6)
///     .map(|day| NormalizedShift {
///         shift_id: day,
///         employee_id: 123,
///         start_time: monday + Duration::days(day),
///         end_time: monday + Duration::days(day) + Duration::hours(8),
///     })
///     .collect();
///
/// let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), Decimal::from(40));
/// assert_eq!(hours.regular_hours, Decimal::from(40));
/// assert_eq!(hours.overtime_hours, Decimal::from(8));
/// ```
pub fn calculate_weekly_hours(
    shifts: &[NormalizedShift],
    invalid_shift_ids: &BTreeSet<ShiftId>,
    threshold: Decimal,
) -> WeeklyHours {
    let mut ordered: Vec<&NormalizedShift> = shifts.iter().collect();
    ordered.sort_by_key(|shift| shift.start_time);

    let mut total_hours = Decimal::ZERO;
    let mut valid_shift_ids = Vec::with_capacity(ordered.len());

    for shift in ordered {
        if invalid_shift_ids.contains(&shift.shift_id) {
            continue;
        }
        total_hours += shift.duration_hours();
        valid_shift_ids.push(shift.shift_id);
    }

    let (regular, overtime) = split_regular_overtime(total_hours, threshold);

    WeeklyHours {
        total_hours,
        regular_hours: round_hours(regular),
        overtime_hours: round_hours(overtime),
        valid_shift_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_shift(shift_id: ShiftId, start: &str, end: &str) -> NormalizedShift {
        NormalizedShift {
            shift_id,
            employee_id: 123,
            start_time: make_datetime(start),
            end_time: make_datetime(end),
        }
    }

    fn forty() -> Decimal {
        Decimal::from(40)
    }

    #[test]
    fn test_two_eight_hour_shifts() {
        let shifts = vec![
            make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
            make_shift(2, "2022-08-23 08:00:00", "2022-08-23 16:00:00"),
        ];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.total_hours, dec("16"));
        assert_eq!(hours.regular_hours, dec("16.00"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
        assert_eq!(hours.valid_shift_ids, vec![1, 2]);
    }

    #[test]
    fn test_exactly_forty_hours_has_no_overtime() {
        let shifts: Vec<NormalizedShift> = (0..5)
            .map(|day| {
                let start = make_datetime("2022-08-22 08:00:00") + Duration::days(day);
                NormalizedShift {
                    shift_id: day,
                    employee_id: 123,
                    start_time: start,
                    end_time: start + Duration::hours(8),
                }
            })
            .collect();

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.regular_hours, dec("40"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_shifts_are_excluded() {
        let shifts = vec![
            make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
            make_shift(2, "2022-08-22 10:00:00", "2022-08-22 18:00:00"),
            make_shift(3, "2022-08-23 08:00:00", "2022-08-23 12:00:00"),
        ];

        let invalid = BTreeSet::from([1, 2]);
        let hours = calculate_weekly_hours(&shifts, &invalid, forty());
        assert_eq!(hours.regular_hours, dec("4"));
        assert_eq!(hours.valid_shift_ids, vec![3]);
    }

    #[test]
    fn test_all_invalid_yields_zero() {
        let shifts = vec![
            make_shift(1, "2022-08-22 08:00:00", "2022-08-22 16:00:00"),
            make_shift(2, "2022-08-22 10:00:00", "2022-08-22 18:00:00"),
        ];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::from([1, 2]), forty());
        assert_eq!(hours.total_hours, Decimal::ZERO);
        assert_eq!(hours.regular_hours, Decimal::ZERO);
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
        assert!(hours.valid_shift_ids.is_empty());
    }

    #[test]
    fn test_valid_ids_follow_start_order_with_stable_ties() {
        let shifts = vec![
            make_shift(5, "2022-08-24 08:00:00", "2022-08-24 09:00:00"),
            make_shift(7, "2022-08-22 08:00:00", "2022-08-22 09:00:00"),
            make_shift(6, "2022-08-22 08:00:00", "2022-08-22 08:00:00"),
        ];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.valid_shift_ids, vec![7, 6, 5]);
    }

    #[test]
    fn test_fractional_hours_are_rounded() {
        // 20 minutes = 0.3333... hours
        let shifts = vec![make_shift(1, "2022-08-22 08:00:00", "2022-08-22 08:20:00")];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.regular_hours, dec("0.33"));
    }

    #[test]
    fn test_overtime_rounds_independently() {
        // 40h + 10 minutes
        let shifts = vec![
            make_shift(1, "2022-08-22 00:00:00", "2022-08-23 00:00:00"),
            make_shift(2, "2022-08-23 00:00:00", "2022-08-23 16:10:00"),
        ];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.regular_hours, dec("40"));
        assert_eq!(hours.overtime_hours, dec("0.17"));
    }

    #[test]
    fn test_inverted_shift_contributes_nothing() {
        let shifts = vec![
            make_shift(1, "2022-08-22 16:00:00", "2022-08-22 08:00:00"),
            make_shift(2, "2022-08-23 08:00:00", "2022-08-23 12:00:00"),
        ];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());
        assert_eq!(hours.regular_hours, dec("4"));
        assert_eq!(hours.valid_shift_ids, vec![1, 2]);
    }

    #[test]
    fn test_custom_threshold() {
        let shifts = vec![make_shift(1, "2022-08-22 00:00:00", "2022-08-23 14:00:00")];

        let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), Decimal::from(38));
        assert_eq!(hours.regular_hours, dec("38"));
        assert_eq!(hours.overtime_hours, dec("0"));
    }

    #[test]
    fn test_split_below_and_above_threshold() {
        assert_eq!(split_regular_overtime(dec("12.5"), forty()), (dec("12.5"), Decimal::ZERO));
        assert_eq!(split_regular_overtime(dec("47.25"), forty()), (forty(), dec("7.25")));
    }

    #[test]
    fn test_round_hours_half_away_from_zero() {
        assert_eq!(round_hours(dec("2.345")), dec("2.35"));
        assert_eq!(round_hours(dec("2.344")), dec("2.34"));
        assert_eq!(round_hours(dec("8")), dec("8"));
    }

    proptest! {
        #[test]
        fn prop_regular_never_exceeds_threshold(
            lengths in proptest::collection::vec(0i64..16 * 60 * 60, 0..10)
        ) {
            let base = make_datetime("2022-08-21 00:00:00");
            let shifts: Vec<NormalizedShift> = lengths
                .iter()
                .enumerate()
                .map(|(i, seconds)| {
                    let start = base + Duration::hours(17 * i as i64);
                    NormalizedShift {
                        shift_id: i as ShiftId,
                        employee_id: 123,
                        start_time: start,
                        end_time: start + Duration::seconds(*seconds),
                    }
                })
                .collect();

            let hours = calculate_weekly_hours(&shifts, &BTreeSet::new(), forty());

            prop_assert!(hours.regular_hours <= forty());
            prop_assert!(hours.overtime_hours >= Decimal::ZERO);
            let diff = (hours.regular_hours + hours.overtime_hours - round_hours(hours.total_hours)).abs();
            prop_assert!(diff <= dec("0.01"));
        }
    }
}
