//! Calculation logic for the shift payroll engine.
//!
//! This module contains the pipeline stages that turn raw shifts into the
//! weekly summary: timestamp normalization with DST correction, week
//! bucketing, overlap detection, the regular/overtime hour split, and the
//! orchestration that runs them over a batch.

mod overlap_detection;
mod time_normalizer;
mod week_bucketer;
mod weekly_hours;
mod weekly_summary;

pub use overlap_detection::{OverlapDetection, detect_overlaps};
pub use time_normalizer::{adjust_end_for_dst, is_dst_active, normalize_shift, parse_timestamp};
pub use week_bucketer::{bucket_by_week, start_of_week, week_key};
pub use weekly_hours::{
    HOURS_DECIMAL_PLACES, WeeklyHours, calculate_weekly_hours, round_hours,
    split_regular_overtime,
};
pub use weekly_summary::{process_shifts, summarize_bucket};
