//! Observer location: coordinates, elevation and civil time zone.
//!
//! A [`Location`] is validated once at construction and immutable afterwards.
//! Variants (for example the same place at sea level) are derived as copies.

use alloc::string::String;

use chrono::{NaiveDate, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::{check_coordinates, check_elevation};
use crate::{Error, Result};

mod geodesic;

pub use geodesic::{GeodesicInverse, VINCENTY_CONVERGENCE, VINCENTY_MAX_ITERATIONS};

/// Hours of disagreement between longitude and civil offset that trigger a date shift.
const ANTIMERIDIAN_THRESHOLD_HOURS: f64 = 20.0;

/// Minutes of local mean time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// A geographic position with elevation and civil time zone.
///
/// Latitude and longitude are in degrees (north and east positive), elevation
/// is in meters above sea level. The name is for display only.
///
/// # Example
/// ```
/// # use solar_day::Location;
/// let lakewood = Location::from_time_zone_id(
///     "Lakewood, NJ",
///     40.096,
///     -74.222,
///     39.57,
///     "America/New_York",
/// )
/// .unwrap();
///
/// assert_eq!(lakewood.latitude(), 40.096);
/// assert_eq!(lakewood.at_sea_level().elevation(), 0.0);
/// assert_eq!(lakewood.elevation(), 39.57);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    time_zone: Tz,
}

impl Location {
    /// Creates a location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation`
    /// for out-of-range or non-finite values.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone: Tz,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
            time_zone,
        })
    }

    /// Creates a location from an IANA time zone identifier such as `"Asia/Jerusalem"`.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` if the identifier is not in the time zone
    /// database, or any error of [`Location::new`].
    pub fn from_time_zone_id(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone_id: &str,
    ) -> Result<Self> {
        let time_zone = time_zone_id
            .parse::<Tz>()
            .map_err(|_| Error::UnknownTimeZone)?;
        Self::new(name, latitude, longitude, elevation, time_zone)
    }

    /// Gets the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters above sea level.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the civil time zone.
    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Copy of this location with the elevation set to sea level.
    #[must_use]
    pub fn at_sea_level(&self) -> Self {
        Self {
            elevation: 0.0,
            ..self.clone()
        }
    }

    /// Copy of this location at another elevation.
    ///
    /// # Errors
    /// Returns `InvalidElevation` for a negative or non-finite elevation.
    pub fn with_elevation(&self, elevation: f64) -> Result<Self> {
        check_elevation(elevation)?;
        Ok(Self {
            elevation,
            ..self.clone()
        })
    }

    /// Standard (non-DST) UTC offset of the time zone on `date`, in minutes.
    #[must_use]
    pub fn raw_offset_minutes(&self, date: NaiveDate) -> i64 {
        self.time_zone
            .offset_from_utc_date(&date)
            .base_utc_offset()
            .num_minutes()
    }

    /// Minutes by which local mean solar time leads standard civil time on `date`.
    ///
    /// Longitude contributes 4 minutes per degree. The result is positive
    /// when the zone is set behind the sun (for example far west in its zone).
    #[must_use]
    pub fn local_mean_time_offset_minutes(&self, date: NaiveDate) -> f64 {
        self.longitude * MINUTES_PER_DEGREE - self.raw_offset_minutes(date) as f64
    }

    /// Days (-1, 0 or +1) to shift the calculation date when the civil zone
    /// disagrees with the longitude by 20 hours or more.
    ///
    /// This happens near the antimeridian, e.g. Samoa (longitude −172°)
    /// keeps UTC+13, which puts its civil date one day ahead of the date
    /// the sun's position at that longitude belongs to.
    #[must_use]
    pub fn antimeridian_adjustment_days(&self, date: NaiveDate) -> i8 {
        let hours = self.local_mean_time_offset_minutes(date) / 60.0;
        if hours >= ANTIMERIDIAN_THRESHOLD_HOURS {
            1
        } else if hours <= -ANTIMERIDIAN_THRESHOLD_HOURS {
            -1
        } else {
            0
        }
    }

    /// Solves the inverse geodesic problem (Vincenty, WGS-84) to `destination`.
    ///
    /// Returns `None` when the iteration does not converge, which happens for
    /// nearly antipodal points.
    #[must_use]
    pub fn geodesic_inverse(&self, destination: &Self) -> Option<GeodesicInverse> {
        geodesic::vincenty_inverse(
            self.latitude,
            self.longitude,
            destination.latitude,
            destination.longitude,
        )
    }

    /// Ellipsoidal distance to `destination` in meters.
    #[must_use]
    pub fn geodesic_distance(&self, destination: &Self) -> Option<f64> {
        self.geodesic_inverse(destination)
            .map(|solution| solution.distance())
    }

    /// Forward azimuth at this location towards `destination`, degrees in [0, 360).
    #[must_use]
    pub fn geodesic_initial_bearing(&self, destination: &Self) -> Option<f64> {
        self.geodesic_inverse(destination)
            .map(|solution| solution.initial_bearing())
    }

    /// Forward azimuth on arrival at `destination`, degrees in [0, 360).
    #[must_use]
    pub fn geodesic_final_bearing(&self, destination: &Self) -> Option<f64> {
        self.geodesic_inverse(destination)
            .map(|solution| solution.final_bearing())
    }

    /// Constant-bearing (loxodrome) distance to `destination` in meters.
    #[must_use]
    pub fn rhumb_line_distance(&self, destination: &Self) -> f64 {
        geodesic::rhumb_line_distance(
            self.latitude,
            self.longitude,
            destination.latitude,
            destination.longitude,
        )
    }

    /// Constant bearing towards `destination`, degrees in [0, 360).
    #[must_use]
    pub fn rhumb_line_bearing(&self, destination: &Self) -> f64 {
        geodesic::rhumb_line_bearing(
            self.latitude,
            self.longitude,
            destination.latitude,
            destination.longitude,
        )
    }
}
