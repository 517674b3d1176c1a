//! Configuration types for the weekly payroll summary.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file yields the stock payroll configuration.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default payroll timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// Default weekly hours before overtime applies.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: u32 = 40;

/// The weekday a payroll week starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday through Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday through Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the weekday's index in a 0-6 numbering where 0 is this week start.
    pub fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Returns the chrono weekday this week starts on.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// The fixed spring-forward/fall-back instant pair used by the DST correction.
///
/// A shift starting at or before `spring_forward` and ending at or after
/// `fall_back` has one hour added back to its end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DstWindow {
    /// Spring-forward transition instant.
    pub spring_forward: DateTime<Utc>,
    /// Fall-back transition instant.
    pub fall_back: DateTime<Utc>,
}

impl DstWindow {
    /// Creates a window from two instants.
    pub fn new(spring_forward: DateTime<Utc>, fall_back: DateTime<Utc>) -> Self {
        Self {
            spring_forward,
            fall_back,
        }
    }

    /// Returns true if `[start, end]` spans the whole window.
    pub fn is_spanned_by<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> bool {
        *start <= self.spring_forward && *end >= self.fall_back
    }
}

impl Default for DstWindow {
    fn default() -> Self {
        Self {
            spring_forward: utc_instant(2023, 3, 12, 2),
            fall_back: utc_instant(2023, 11, 5, 2),
        }
    }
}

/// Builds a whole-hour UTC instant from known-valid calendar fields.
fn utc_instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// The complete payroll configuration.
///
/// # Example
///
/// ```
/// use shift_payroll::config::{PayrollConfig, WeekStart};
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.timezone.name(), "America/Chicago");
/// assert_eq!(config.week_start, WeekStart::Sunday);
/// assert_eq!(config.overtime_threshold_hours, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// The IANA zone all shifts are normalized into.
    pub timezone: Tz,
    /// The weekday weeks start on.
    pub week_start: WeekStart,
    /// Weekly hours paid at the regular rate; the remainder is overtime.
    pub overtime_threshold_hours: u32,
    /// The DST correction window.
    pub dst_window: DstWindow,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            week_start: WeekStart::default(),
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            dst_window: DstWindow::default(),
        }
    }
}

impl PayrollConfig {
    /// Returns the default configuration with a different timezone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTimezone`] if `zone` is not an IANA zone name.
    pub fn with_timezone(zone: &str) -> EngineResult<Self> {
        let timezone = zone
            .parse::<Tz>()
            .map_err(|_| EngineError::UnknownTimezone {
                zone: zone.to_string(),
            })?;
        Ok(Self {
            timezone,
            ..Self::default()
        })
    }

    /// Returns the overtime threshold as a decimal number of hours.
    pub fn overtime_threshold(&self) -> Decimal {
        Decimal::from(self.overtime_threshold_hours)
    }
}
