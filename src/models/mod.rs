//! Core data models for the shift payroll engine.
//!
//! This module contains the raw and normalized shift types, the weekly
//! bucket, and the report row emitted per bucket.

mod report;
mod shift;

pub use report::{ReportRow, WeekBucket, WeekKey};
pub use shift::{EmployeeId, LOCAL_TIME_FORMAT, NormalizedShift, ShiftId, ShiftRecord};
