//! Overlapping shift detection.
//!
//! Within one weekly bucket, every unordered pair of shifts is compared once.
//! Both members of any overlapping pair are marked invalid and excluded from
//! the hour total.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{NormalizedShift, ShiftId};

/// The result of checking one bucket for overlapping shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapDetection {
    /// Every shift ID that appears in at least one overlapping pair.
    pub invalid_shift_ids: BTreeSet<ShiftId>,
    /// The overlapping pairs, in the order they were found.
    pub overlapping_pairs: Vec<(ShiftId, ShiftId)>,
}

impl OverlapDetection {
    /// Returns true if `shift_id` was marked invalid.
    pub fn is_invalid(&self, shift_id: ShiftId) -> bool {
        self.invalid_shift_ids.contains(&shift_id)
    }

    /// Returns true if no pair overlapped.
    pub fn is_clean(&self) -> bool {
        self.overlapping_pairs.is_empty()
    }
}

/// Finds every pair of overlapping shifts in a bucket.
///
/// Touching shifts (one ends exactly when the next begins) are not
/// overlapping. The scan is a full pairwise comparison, so the result does
/// not depend on the order of `shifts`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::detect_overlaps;
/// use shift_payroll::models::NormalizedShift;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shifts = vec![
///     NormalizedShift { shift_id: 1, employee_id: 123, start_time: at("2022-08-22 08:00:00"), end_time: at("2022-08-22 16:00:00") },
///     NormalizedShift { shift_id: 2, employee_id: 123, start_time: at("2022-08-22 10:00:00"), end_time: at("2022-08-22 18:00:00") },
///     NormalizedShift { shift_id: 3, employee_id: 123, start_time: at("2022-08-23 08:00:00"), end_time: at("2022-08-23 16:00:00") },
/// ];
///
/// let detection = detect_overlaps(&shifts);
/// assert_eq!(detection.invalid_shift_ids.into_iter().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn detect_overlaps(shifts: &[NormalizedShift]) -> OverlapDetection {
    let mut detection = OverlapDetection::default();

    for (i, first) in shifts.iter().enumerate() {
        for second in &shifts[i + 1..] {
            if first.overlaps(second) {
                debug!(
                    first_shift_id = first.shift_id,
                    second_shift_id = second.shift_id,
                    "Overlapping shifts detected"
                );
                detection.invalid_shift_ids.insert(first.shift_id);
                detection.invalid_shift_ids.insert(second.shift_id);
                detection
                    .overlapping_pairs
                    .push((first.shift_id, second.shift_id));
            }
        }
    }

    detection
}
