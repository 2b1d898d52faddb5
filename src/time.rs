//! Julian day arithmetic used by the NOAA equations.
//!
//! Calendar dates are proleptic Gregorian (as in `chrono`), so the Gregorian
//! correction term is always applied.

use crate::math::floor;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Day Number for the J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per day (1,440)
pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date on the UT time scale.
///
/// The NOAA sunrise equations run on UT directly; no ΔT is involved.
///
/// # Example
/// ```
/// # use solar_day::time::JulianDate;
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let jd = JulianDate::from_date(date);
/// assert_eq!(jd.julian_date(), 2_451_544.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Julian date at 0h UT of a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            jd: calculate_julian_date(date.year(), date.month(), date.day()),
        }
    }

    /// Julian date of a UTC date and time of day.
    #[must_use]
    pub fn from_naive_utc(datetime: NaiveDateTime) -> Self {
        let seconds = f64::from(datetime.num_seconds_from_midnight())
            + f64::from(datetime.nanosecond()) / 1e9;
        Self::from_date(datetime.date()).add_days(seconds / SECONDS_PER_DAY)
    }

    /// Gets the Julian date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Shifts the date by a (possibly fractional) number of days.
    pub(crate) fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// Shifts the date by minutes, the unit the NOAA event times are expressed in.
    pub(crate) fn add_minutes(self, minutes: f64) -> Self {
        self.add_days(minutes / MINUTES_PER_DAY)
    }
}

/// Meeus, "Astronomical Algorithms", chapter 7, for 0h UT.
fn calculate_julian_date(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if m < 3.0 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}
