//! Error types for location, zenith and calculator configuration.
//!
//! Errors only arise while constructing values. Computations on valid inputs
//! report "no such event" through `Option` instead.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while validating inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite and not negative).
    InvalidElevation {
        /// The invalid elevation in meters.
        value: f64,
    },
    /// Invalid zenith angle (must be between 0 and 180 degrees).
    InvalidZenith {
        /// The invalid zenith angle provided.
        value: f64,
    },
    /// Non-finite azimuth angle.
    InvalidAzimuth {
        /// The invalid azimuth value provided.
        value: f64,
    },
    /// Invalid zenith policy constant.
    InvalidZenithPolicy {
        /// Which constant was rejected.
        message: &'static str,
    },
    /// Time zone identifier not present in the IANA database.
    UnknownTimeZone,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(
                    f,
                    "invalid elevation {value} m (must be finite and not negative)"
                )
            }
            Self::InvalidZenith { value } => {
                write!(f, "invalid zenith {value}° (must be between 0° and 180°)")
            }
            Self::InvalidAzimuth { value } => write!(f, "invalid azimuth {value}°"),
            Self::InvalidZenithPolicy { message } => {
                write!(f, "invalid zenith policy: {message}")
            }
            Self::UnknownTimeZone => write!(f, "unknown time zone identifier"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid zenith error.
    #[must_use]
    pub const fn invalid_zenith(value: f64) -> Self {
        Self::InvalidZenith { value }
    }

    /// Creates an invalid azimuth error.
    #[must_use]
    pub const fn invalid_azimuth(value: f64) -> Self {
        Self::InvalidAzimuth { value }
    }

    /// Creates an invalid zenith policy error.
    #[must_use]
    pub const fn invalid_zenith_policy(message: &'static str) -> Self {
        Self::InvalidZenithPolicy { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an observer elevation in meters.
///
/// # Errors
/// Returns `InvalidElevation` if elevation is negative or not finite.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation < 0.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `InvalidZenith` if the zenith is not finite or outside the range.
pub fn check_zenith(zenith: f64) -> Result<f64> {
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::invalid_zenith(zenith));
    }
    Ok(zenith)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(40.7).is_ok());

        assert!(check_latitude(90.0001).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-171.75).is_ok());

        assert!(check_longitude(180.5).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinates_report_first_failure() {
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert!(check_coordinates(-33.87, 151.21).is_ok());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(8848.86).is_ok());

        assert!(check_elevation(-0.5).is_err());
        assert!(check_elevation(f64::NAN).is_err());
        assert!(check_elevation(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zenith_validation() {
        assert_eq!(check_zenith(96.0), Ok(96.0));
        assert!(check_zenith(0.0).is_ok());
        assert!(check_zenith(180.0).is_ok());

        assert!(check_zenith(-1.0).is_err());
        assert!(check_zenith(180.1).is_err());
        assert!(check_zenith(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_elevation(-3.0);
        assert_eq!(
            err.to_string(),
            "invalid elevation -3 m (must be finite and not negative)"
        );

        let err = Error::invalid_zenith_policy("earth radius must be positive");
        assert_eq!(
            err.to_string(),
            "invalid zenith policy: earth radius must be positive"
        );

        assert_eq!(
            Error::UnknownTimeZone.to_string(),
            "unknown time zone identifier"
        );
    }
}
