//! NOAA sunrise, sunset and solar position equations.
//!
//! Closed-form solar coordinates from the NOAA Solar Calculator, after
//! Meeus, "Astronomical Algorithms" (2nd ed., chapters 25 and 28). Event
//! times are good to about a minute between ±72° latitude and degrade
//! closer to the poles.
//!
//! All intermediate quantities are functions of the Julian century `t`
//! measured from J2000.0 on the UT scale.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

use crate::calculator::SolarCalculator;
use crate::location::Location;
use crate::math::{
    acos, asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::{JulianDate, MINUTES_PER_DAY};
use crate::types::{HoursUtc, SolarEvent, SolarPosition};
use crate::zenith::ZenithPolicy;
use crate::Result;

/// Minutes from 0h UT to noon at the Greenwich meridian.
const NOON_MINUTES: f64 = 720.0;

/// Minutes from 0h UT to the following midnight at the Greenwich meridian.
const MIDNIGHT_MINUTES: f64 = MINUTES_PER_DAY;

/// Minutes of time per degree of longitude or hour angle.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// The NOAA sunrise/sunset algorithm.
///
/// # Example
/// ```
/// # use solar_day::{Location, NoaaCalculator, SolarCalculator, SolarEvent};
/// # use chrono::NaiveDate;
/// let noaa = NoaaCalculator::default();
/// let nyc = Location::from_time_zone_id("New York", 40.7, -74.0, 0.0, "America/New_York").unwrap();
/// let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
///
/// let sunrise = noaa.utc_event(date, &nyc, 90.0, SolarEvent::Sunrise).unwrap();
/// assert!((sunrise.hours() - 9.416).abs() < 0.01); // 05:25 EDT
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoaaCalculator {
    zenith_policy: ZenithPolicy,
}

impl NoaaCalculator {
    /// Creates the calculator with a custom zenith policy.
    #[must_use]
    pub const fn new(zenith_policy: ZenithPolicy) -> Self {
        Self { zenith_policy }
    }

    /// Topocentric position of the sun's center at `instant`, without refraction.
    ///
    /// # Errors
    /// Returns an error only if the computed angles are not finite.
    pub fn solar_position<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        location: &Location,
    ) -> Result<SolarPosition> {
        let utc = instant.naive_utc();
        let sun = SunCoordinates::at(JulianDate::from_naive_utc(utc));

        let minutes = f64::from(utc.num_seconds_from_midnight()) / 60.0
            + f64::from(utc.nanosecond()) / 60e9;
        let true_solar_time = (minutes
            + sun.equation_of_time
            + MINUTES_PER_DEGREE * location.longitude())
            % MINUTES_PER_DAY;
        let true_solar_time = if true_solar_time < 0.0 {
            true_solar_time + MINUTES_PER_DAY
        } else {
            true_solar_time
        };

        let hour_angle = degrees_to_radians(true_solar_time / MINUTES_PER_DEGREE - 180.0);
        let latitude = degrees_to_radians(location.latitude());
        let declination = degrees_to_radians(sun.declination);

        let cos_zenith = sin(latitude) * sin(declination)
            + cos(latitude) * cos(declination) * cos(hour_angle);
        let zenith = radians_to_degrees(acos(cos_zenith.clamp(-1.0, 1.0)));

        // Meeus 13.5 measures from the south; shift to north-based azimuth
        let azimuth = radians_to_degrees(atan2(
            sin(hour_angle),
            cos(hour_angle) * sin(latitude) - tan(declination) * cos(latitude),
        )) + 180.0;

        SolarPosition::new(azimuth, zenith)
    }
}

impl SolarCalculator for NoaaCalculator {
    fn name(&self) -> &'static str {
        "NOAA"
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
        let jd = JulianDate::from_date(date);
        let latitude = location.latitude();
        let longitude = location.longitude();

        let noon = transit_minutes(jd, longitude, NOON_MINUTES);
        let first = event_minutes(
            &SunCoordinates::at(jd.add_minutes(noon)),
            latitude,
            longitude,
            effective_zenith,
            event,
        )?;
        // one more pass with the sun's coordinates at the first estimate
        let refined = event_minutes(
            &SunCoordinates::at(jd.add_minutes(first)),
            latitude,
            longitude,
            effective_zenith,
            event,
        )?;

        Some(HoursUtc::from_minutes(refined)).filter(|hours| hours.hours().is_finite())
    }

    fn utc_noon(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc> {
        let minutes = transit_minutes(JulianDate::from_date(date), location.longitude(), NOON_MINUTES);
        Some(HoursUtc::from_minutes(minutes))
    }

    fn utc_midnight(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc> {
        let minutes = transit_minutes(
            JulianDate::from_date(date),
            location.longitude(),
            MIDNIGHT_MINUTES,
        );
        Some(HoursUtc::from_minutes(minutes))
    }
}

/// Declination and equation of time at one instant.
#[derive(Debug, Clone, Copy)]
struct SunCoordinates {
    /// Apparent declination in degrees
    declination: f64,
    /// Equation of time in minutes
    equation_of_time: f64,
}

impl SunCoordinates {
    fn at(jd: JulianDate) -> Self {
        let t = jd.julian_century();
        Self {
            declination: sun_declination(t),
            equation_of_time: equation_of_time(t),
        }
    }
}

/// UTC minutes of a meridian transit near `anchor` minutes after 0h UT of `jd`.
///
/// The equation of time is first evaluated at local mean transit and then
/// exactly once more at the resulting estimate. The second pass is not
/// iterated further.
fn transit_minutes(jd: JulianDate, longitude: f64, anchor: f64) -> f64 {
    let mean_transit = anchor - MINUTES_PER_DEGREE * longitude;
    let estimate = mean_transit - equation_of_time(jd.add_minutes(mean_transit).julian_century());
    mean_transit - equation_of_time(jd.add_minutes(estimate).julian_century())
}

/// UTC minutes after 0h of a sunrise/sunset given the sun's coordinates near that time.
fn event_minutes(
    sun: &SunCoordinates,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> Option<f64> {
    let hour_angle = sunrise_hour_angle(latitude, sun.declination, zenith)?;
    let signed_hour_angle = match event {
        SolarEvent::Sunrise => -hour_angle,
        SolarEvent::Sunset => hour_angle,
    };
    Some(
        NOON_MINUTES - MINUTES_PER_DEGREE * longitude + MINUTES_PER_DEGREE * signed_hour_angle
            - sun.equation_of_time,
    )
}

/// Hour angle in degrees at which the sun's center reaches `zenith`.
///
/// `None` when the sun stays entirely above or below that zenith all day.
fn sunrise_hour_angle(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let latitude = degrees_to_radians(latitude);
    let declination = degrees_to_radians(declination);
    let cos_hour_angle = cos(degrees_to_radians(zenith)) / (cos(latitude) * cos(declination))
        - tan(latitude) * tan(declination);

    (-1.0..=1.0)
        .contains(&cos_hour_angle)
        .then(|| radians_to_degrees(acos(cos_hour_angle)))
}

/// Geometric mean longitude of the sun in degrees, [0, 360).
fn sun_geometric_mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t))
}

/// Geometric mean anomaly of the sun in degrees.
fn sun_geometric_mean_anomaly(t: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], t)
}

/// Eccentricity of Earth's orbit (unitless).
fn earth_orbit_eccentricity(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Equation of center of the sun in degrees.
fn sun_equation_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(sun_geometric_mean_anomaly(t));
    sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289
}

/// True longitude of the sun in degrees.
fn sun_true_longitude(t: f64) -> f64 {
    sun_geometric_mean_longitude(t) + sun_equation_of_center(t)
}

/// Longitude of the moon's ascending node in radians (drives nutation).
fn ascending_node(t: f64) -> f64 {
    degrees_to_radians(125.04 - 1934.136 * t)
}

/// Apparent longitude of the sun in degrees (nutation and aberration applied).
fn sun_apparent_longitude(t: f64) -> f64 {
    sun_true_longitude(t) - 0.00569 - 0.00478 * sin(ascending_node(t))
}

/// Mean obliquity of the ecliptic in degrees.
fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation, in degrees.
fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity_of_ecliptic(t) + 0.00256 * cos(ascending_node(t))
}

/// Apparent declination of the sun in degrees.
fn sun_declination(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(t));
    let lambda = degrees_to_radians(sun_apparent_longitude(t));
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Equation of time in minutes (apparent minus mean solar time).
fn equation_of_time(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(t));
    let l0 = degrees_to_radians(sun_geometric_mean_longitude(t));
    let e = earth_orbit_eccentricity(t);
    let m = degrees_to_radians(sun_geometric_mean_anomaly(t));

    let y = tan(epsilon / 2.0);
    let y = y * y;

    let sin_2l0 = sin(2.0 * l0);
    let sin_m = sin(m);
    let cos_2l0 = cos(2.0 * l0);
    let sin_4l0 = sin(4.0 * l0);
    let sin_2m = sin(2.0 * m);

    let radians = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;
    MINUTES_PER_DEGREE * radians_to_degrees(radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::{America, UTC};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn century(year: i32, month: u32, day: u32) -> f64 {
        JulianDate::from_date(date(year, month, day)).julian_century()
    }

    fn new_york() -> Location {
        Location::new("New York", 40.7, -74.0, 0.0, America::New_York).unwrap()
    }

    #[test]
    fn test_epoch_constants() {
        assert!((sun_geometric_mean_longitude(0.0) - 280.46646).abs() < 1e-12);
        assert!((sun_geometric_mean_anomaly(0.0) - 357.52911).abs() < 1e-12);
        assert!((earth_orbit_eccentricity(0.0) - 0.016708634).abs() < 1e-15);
        assert!((mean_obliquity_of_ecliptic(0.0) - 23.439291111).abs() < 1e-8);
    }

    #[test]
    fn test_declination_at_june_solstice() {
        let t = century(2023, 6, 21);
        assert!((sun_declination(t) - 23.437073).abs() < 1e-5);
    }

    #[test]
    fn test_equation_of_time_extremes() {
        assert!((equation_of_time(century(2023, 6, 21)) - (-1.648973)).abs() < 1e-5);
        // February minimum and November maximum
        assert!((equation_of_time(century(2024, 2, 11)) - (-14.225406)).abs() < 1e-5);
        assert!((equation_of_time(century(2024, 11, 3)) - 16.490991).abs() < 1e-5);
    }

    #[test]
    fn test_hour_angle_range() {
        let hour_angle = sunrise_hour_angle(40.7, 23.44, 90.8333).unwrap();
        assert!((hour_angle - 113.193371).abs() < 1e-5);

        // midnight sun and polar night at 70°N
        assert_eq!(sunrise_hour_angle(70.0, 23.44, 90.8333), None);
        assert_eq!(sunrise_hour_angle(70.0, -23.44, 90.8333), None);
        assert_eq!(sunrise_hour_angle(40.7, 23.44, f64::NAN), None);
    }

    #[test]
    fn test_new_york_solstice_utc_hours() {
        let noaa = NoaaCalculator::default();
        let nyc = new_york();
        let day = date(2023, 6, 21);

        let sunrise = noaa.utc_event(day, &nyc, 90.0, SolarEvent::Sunrise).unwrap();
        let sunset = noaa.utc_event(day, &nyc, 90.0, SolarEvent::Sunset).unwrap();
        assert!((sunrise.hours() - 9.416143).abs() < 1e-5);
        // 00:30 UTC of the next UTC day, reported on the 24h clock
        assert!((sunset.hours() - 0.510590).abs() < 1e-5);
    }

    #[test]
    fn test_transits() {
        let noaa = NoaaCalculator::default();
        let nyc = new_york();
        let day = date(2023, 6, 21);

        let noon = noaa.utc_noon(day, &nyc).unwrap();
        assert!((noon.hours() - 16.963380).abs() < 1e-5);

        let midnight = noaa.utc_midnight(day, &nyc).unwrap();
        assert!((midnight.hours() - 4.965191).abs() < 1e-5);
    }

    #[test]
    fn test_polar_events_absent() {
        let noaa = NoaaCalculator::default();
        let north = Location::new("north", 70.0, 20.0, 0.0, UTC).unwrap();

        assert_eq!(
            noaa.utc_event(date(2024, 6, 21), &north, 90.0, SolarEvent::Sunset),
            None
        );
        assert_eq!(
            noaa.utc_event(date(2024, 12, 21), &north, 90.0, SolarEvent::Sunrise),
            None
        );
        assert!(
            noaa.utc_event(date(2024, 12, 21), &north, 100.0, SolarEvent::Sunrise)
                .is_some()
        );
    }

    #[test]
    fn test_solar_position_at_noon() {
        let noaa = NoaaCalculator::default();
        let instant = Utc.with_ymd_and_hms(2023, 6, 21, 16, 57, 48).unwrap();
        let position = noaa.solar_position(&instant, &new_york()).unwrap();

        assert!((position.azimuth() - 180.0).abs() < 0.05);
        assert!((position.zenith_angle() - 17.2616).abs() < 1e-3);
    }

    #[test]
    fn test_solar_position_at_sunrise_matches_effective_zenith() {
        let noaa = NoaaCalculator::default();
        let instant = Utc.with_ymd_and_hms(2023, 6, 21, 9, 24, 58).unwrap();
        let position = noaa.solar_position(&instant, &new_york()).unwrap();

        let effective = noaa.adjust_zenith(90.0, 0.0);
        assert!((position.zenith_angle() - effective).abs() < 0.01);
        assert!(position.azimuth() > 45.0 && position.azimuth() < 90.0);
    }

    #[test]
    fn test_solar_position_independent_of_time_zone() {
        let noaa = NoaaCalculator::default();
        let utc = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
        let local = utc.with_timezone(&America::New_York);

        let a = noaa.solar_position(&utc, &new_york()).unwrap();
        let b = noaa.solar_position(&local, &new_york()).unwrap();
        assert_eq!(a, b);
        assert!((a.azimuth() - 80.9322).abs() < 1e-3);
        assert!((a.zenith_angle() - 63.5143).abs() < 1e-3);
    }
}
