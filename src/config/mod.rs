//! Configuration loading and management for the shift payroll engine.
//!
//! This module provides the payroll configuration (target timezone, week
//! start, overtime threshold, DST correction window) and loads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Weeks start on {:?}", loader.config().week_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_OVERTIME_THRESHOLD_HOURS, DEFAULT_TIMEZONE, DstWindow, PayrollConfig, WeekStart,
};
