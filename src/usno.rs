//! USNO sunrise/sunset algorithm.
//!
//! The closed-form procedure from the U.S. Naval Observatory's *Almanac for
//! Computers* (1990). It uses low-precision solar coordinates and no
//! iteration. It usually agrees with [`NoaaCalculator`](crate::NoaaCalculator)
//! to well under a minute at mid latitudes.

#![allow(clippy::unreadable_literal)]

use chrono::{Datelike, NaiveDate};

use crate::calculator::SolarCalculator;
use crate::location::Location;
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, sin, tan,
};
use crate::types::{HoursUtc, SolarEvent};
use crate::zenith::{GEOMETRIC_ZENITH, ZenithPolicy};

/// Degrees of longitude (or hour angle) per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// The USNO Almanac for Computers sunrise/sunset algorithm.
///
/// Solar noon is the midpoint of geometric sunrise and sunset, so it is
/// undefined on days without both.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsnoCalculator {
    zenith_policy: ZenithPolicy,
}

impl UsnoCalculator {
    /// Creates the calculator with a custom zenith policy.
    #[must_use]
    pub const fn new(zenith_policy: ZenithPolicy) -> Self {
        Self { zenith_policy }
    }
}

impl SolarCalculator for UsnoCalculator {
    fn name(&self) -> &'static str {
        "USNO"
    }

    fn zenith_policy(&self) -> &ZenithPolicy {
        &self.zenith_policy
    }

    fn time_of_event_utc(
        &self,
        date: NaiveDate,
        location: &Location,
        effective_zenith: f64,
        event: SolarEvent,
    ) -> Option<HoursUtc> {
        let longitude_hours = location.longitude() / DEGREES_PER_HOUR;
        let rough_local_hour = match event {
            SolarEvent::Sunrise => 6.0,
            SolarEvent::Sunset => 18.0,
        };
        let approx_days =
            f64::from(date.ordinal()) + (rough_local_hour - longitude_hours) / 24.0;

        let mean_anomaly = 0.9856 * approx_days - 3.289;
        let true_longitude = sun_true_longitude(mean_anomaly);
        let right_ascension = sun_right_ascension_hours(true_longitude);

        let sin_declination = 0.39782 * sin(degrees_to_radians(true_longitude));
        let cos_declination = cos(asin(sin_declination));
        let latitude = degrees_to_radians(location.latitude());

        let cos_local_hour_angle = (cos(degrees_to_radians(effective_zenith))
            - sin_declination * sin(latitude))
            / (cos_declination * cos(latitude));
        if !(-1.0..=1.0).contains(&cos_local_hour_angle) {
            return None;
        }

        let hour_angle = radians_to_degrees(acos(cos_local_hour_angle));
        let hour_angle = match event {
            SolarEvent::Sunrise => 360.0 - hour_angle,
            SolarEvent::Sunset => hour_angle,
        } / DEGREES_PER_HOUR;

        let local_mean_time = hour_angle + right_ascension - 0.06571 * approx_days - 6.622;
        Some(HoursUtc::from_hours(local_mean_time - longitude_hours))
    }

    fn utc_noon(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc> {
        let sunrise =
            self.time_of_event_utc(date, location, GEOMETRIC_ZENITH, SolarEvent::Sunrise)?;
        let sunset = self.time_of_event_utc(date, location, GEOMETRIC_ZENITH, SolarEvent::Sunset)?;

        let midpoint = (sunrise.hours() + sunset.hours()) / 2.0;
        // sunset wrapped past 0h UTC
        let noon = if sunset < sunrise {
            midpoint + 12.0
        } else {
            midpoint
        };
        Some(HoursUtc::from_hours(noon))
    }

    fn utc_midnight(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc> {
        self.utc_noon(date, location)
            .map(|noon| HoursUtc::from_hours(noon.hours() + 12.0))
    }
}

/// Sun's true longitude in degrees from its mean anomaly.
fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    normalize_degrees_0_to_360(mean_anomaly + 1.916 * sin(m) + 0.020 * sin(2.0 * m) + 282.634)
}

/// Right ascension in hours, placed in the same quadrant as the true longitude.
fn sun_right_ascension_hours(true_longitude: f64) -> f64 {
    let right_ascension =
        radians_to_degrees(atan(0.91764 * tan(degrees_to_radians(true_longitude))));
    let longitude_quadrant = floor(true_longitude / 90.0) * 90.0;
    let right_ascension_quadrant = floor(right_ascension / 90.0) * 90.0;
    (right_ascension + longitude_quadrant - right_ascension_quadrant) / DEGREES_PER_HOUR
}
