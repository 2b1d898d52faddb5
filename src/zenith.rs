//! Zenith correction for refraction, solar radius and observer elevation.
//!
//! Only a nominal zenith of exactly 90° (the geometric horizon) is corrected.
//! Twilight depressions such as 96° or 108° are fixed sun positions and pass
//! through untouched regardless of elevation.

use crate::math::{acos, radians_to_degrees};
use crate::{Error, Result};

/// Sun's center on the geometric horizon.
pub const GEOMETRIC_ZENITH: f64 = 90.0;

/// Civil twilight: sun's center 6° below the horizon.
pub const CIVIL_ZENITH: f64 = 96.0;

/// Nautical twilight: sun's center 12° below the horizon.
pub const NAUTICAL_ZENITH: f64 = 102.0;

/// Astronomical twilight: sun's center 18° below the horizon.
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;

const STANDARD_REFRACTION: f64 = 34.0 / 60.0;
const STANDARD_SOLAR_RADIUS: f64 = 16.0 / 60.0;
const STANDARD_EARTH_RADIUS_KM: f64 = 6356.9;

/// Constants that turn the geometric horizon into the zenith of visible sunrise/sunset.
///
/// # Example
/// ```
/// # use solar_day::ZenithPolicy;
/// let policy = ZenithPolicy::default();
/// assert_eq!(policy.effective_zenith(90.0, 0.0), 90.0 + 34.0 / 60.0 + 16.0 / 60.0);
/// assert_eq!(policy.effective_zenith(96.0, 800.0), 96.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZenithPolicy {
    /// Atmospheric refraction at the horizon in degrees
    refraction: f64,
    /// Angular radius of the sun in degrees
    solar_radius: f64,
    /// Earth radius in kilometers, used for the horizon dip
    earth_radius_km: f64,
}

impl ZenithPolicy {
    /// Creates a policy from refraction and solar radius in degrees and the earth radius in km.
    ///
    /// # Errors
    /// Returns `InvalidZenithPolicy` if an angle is negative or not finite,
    /// or the earth radius is not a positive finite number.
    pub fn new(refraction: f64, solar_radius: f64, earth_radius_km: f64) -> Result<Self> {
        if !refraction.is_finite() || refraction < 0.0 {
            return Err(Error::invalid_zenith_policy(
                "refraction must be a finite, non-negative angle",
            ));
        }
        if !solar_radius.is_finite() || solar_radius < 0.0 {
            return Err(Error::invalid_zenith_policy(
                "solar radius must be a finite, non-negative angle",
            ));
        }
        if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
            return Err(Error::invalid_zenith_policy(
                "earth radius must be positive",
            ));
        }
        Ok(Self {
            refraction,
            solar_radius,
            earth_radius_km,
        })
    }

    /// Standard almanac values: 34′ refraction, 16′ solar radius, 6356.9 km earth radius.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            refraction: STANDARD_REFRACTION,
            solar_radius: STANDARD_SOLAR_RADIUS,
            earth_radius_km: STANDARD_EARTH_RADIUS_KM,
        }
    }

    /// Gets the refraction in degrees.
    #[must_use]
    pub const fn refraction(&self) -> f64 {
        self.refraction
    }

    /// Gets the solar radius in degrees.
    #[must_use]
    pub const fn solar_radius(&self) -> f64 {
        self.solar_radius
    }

    /// Gets the earth radius in kilometers.
    #[must_use]
    pub const fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }

    /// Dip of the visible horizon below the geometric horizon for an observer
    /// at `elevation` meters, in degrees.
    #[must_use]
    pub fn elevation_dip(&self, elevation: f64) -> f64 {
        let radius = self.earth_radius_km;
        radians_to_degrees(acos(radius / (radius + elevation / 1000.0)))
    }

    /// Converts a nominal zenith into the zenith the hour-angle solution uses.
    ///
    /// A nominal 90° becomes `90 + refraction + solar radius + dip(elevation)`;
    /// any other zenith is returned unchanged.
    #[must_use]
    pub fn effective_zenith(&self, zenith: f64, elevation: f64) -> f64 {
        if zenith == GEOMETRIC_ZENITH {
            zenith + self.refraction + self.solar_radius + self.elevation_dip(elevation)
        } else {
            zenith
        }
    }
}

impl Default for ZenithPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
