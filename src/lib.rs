//! Weekly payroll summary engine for punch-clock shift exports.
//!
//! This crate converts raw employee shift records into a weekly summary: for
//! each employee and calendar week it reports regular hours, overtime hours,
//! and the shifts excluded because they overlapped another shift.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
