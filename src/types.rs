//! Core value types shared by the calculators.

use crate::error::check_zenith;
use crate::math::{normalize_degrees_0_to_360, normalize_hours_0_to_24};
use crate::zenith::{ASTRONOMICAL_ZENITH, CIVIL_ZENITH, GEOMETRIC_ZENITH, NAUTICAL_ZENITH};
use crate::{Error, Result};

/// Named sun depressions used for sunrise/sunset and twilight.
///
/// Each horizon maps to a nominal zenith. Only [`Horizon::SunriseSunset`]
/// (90°) is later corrected for refraction, solar radius and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Geometric horizon (90°), corrected to the visible upper limb
    SunriseSunset,
    /// Civil twilight (sun 6° below the horizon)
    CivilTwilight,
    /// Nautical twilight (sun 12° below the horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun 18° below the horizon)
    AstronomicalTwilight,
    /// Custom nominal zenith in degrees.
    ///
    /// Built directly, the value is not validated; use [`Horizon::custom`] to
    /// reject zeniths outside 0 to 180 degrees. A NaN zenith never produces an
    /// event.
    Custom(f64),
}

impl Horizon {
    /// Gets the nominal zenith angle in degrees for this horizon.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        match self {
            Self::SunriseSunset => GEOMETRIC_ZENITH,
            Self::CivilTwilight => CIVIL_ZENITH,
            Self::NauticalTwilight => NAUTICAL_ZENITH,
            Self::AstronomicalTwilight => ASTRONOMICAL_ZENITH,
            Self::Custom(zenith) => *zenith,
        }
    }

    /// Creates a custom horizon from a nominal zenith angle.
    ///
    /// # Errors
    /// Returns `InvalidZenith` if the zenith is outside 0 to 180 degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_day::Horizon;
    /// let misheyakir = Horizon::custom(101.0).unwrap();
    /// assert_eq!(misheyakir.zenith(), 101.0);
    /// assert!(Horizon::custom(-4.0).is_err());
    /// ```
    pub fn custom(zenith: f64) -> Result<Self> {
        Ok(Self::Custom(check_zenith(zenith)?))
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        if let Self::Custom(zenith) = self {
            zenith.to_bits().hash(state);
        }
    }
}

/// Which side of solar noon an hour-angle event lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Sun crossing the zenith circle while rising (before noon)
    Sunrise,
    /// Sun crossing the zenith circle while setting (after noon)
    Sunset,
}

/// Solar position in topocentric coordinates.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Zenith angle: 0° = directly overhead, 90° = horizon, 180° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    azimuth: f64,
    zenith_angle: f64,
}

impl SolarPosition {
    /// Creates a solar position from an azimuth (normalized to [0, 360)) and zenith angle.
    ///
    /// # Errors
    /// Returns `InvalidAzimuth` for a non-finite azimuth and `InvalidZenith`
    /// if the zenith angle is outside 0 to 180 degrees.
    pub fn new(azimuth: f64, zenith_angle: f64) -> Result<Self> {
        if !azimuth.is_finite() {
            return Err(Error::invalid_azimuth(azimuth));
        }
        Ok(Self {
            azimuth: normalize_degrees_0_to_360(azimuth),
            zenith_angle: check_zenith(zenith_angle)?,
        })
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the elevation angle in degrees (90° − zenith).
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Checks if the sun's center is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }
}

/// Fractional hour of a UTC day, always within [0, 24).
///
/// Calculators report event times in this form; which UTC calendar day the
/// hour belongs to is resolved by [`DayCalculator`](crate::DayCalculator).
///
/// # Example
/// ```
/// # use solar_day::HoursUtc;
/// assert_eq!(HoursUtc::from_hours(25.5).hours(), 1.5);
/// assert_eq!(HoursUtc::from_hours(-0.5).hours(), 23.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a value from hours since UTC midnight, wrapping into [0, 24).
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        Self(normalize_hours_0_to_24(hours))
    }

    /// Creates a value from minutes since UTC midnight, wrapping into [0, 24) hours.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_hours(minutes / 60.0)
    }

    /// Gets the hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whole milliseconds since UTC midnight, truncated.
    #[must_use]
    pub fn milliseconds(&self) -> i64 {
        (self.0 * 3_600_000.0) as i64
    }
}
