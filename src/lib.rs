//! # Solar Day
//!
//! Sunrise, sunset, twilight and temporal-hour calculations for any location and date.
//!
//! The crate computes when the sun crosses a given zenith angle on a civil
//! date, adjusted for observer elevation and for time zones that disagree
//! with their longitude (antimeridian dates). On top of that it derives
//! the *temporal hour*, 1/12 of any interval such as sunrise to sunset.
//!
//! - **NOAA** ([`NoaaCalculator`]): closed-form Meeus equations used by the NOAA
//!   Solar Calculator, with one equation-of-time refinement of solar noon
//! - **USNO** ([`UsnoCalculator`]): the *Almanac for Computers* procedure
//! - **Geodesy** ([`Location`]): Vincenty geodesic distance/bearings on WGS-84
//!   and rhumb-line distance/bearing
//!
//! ## Feature Flags
//!
//! - `std` (default): native float math and `std::error::Error`
//! - `libm`: pure Rust math for `no_std` targets (an allocator is required)
//!
//! ```toml
//! # Default
//! solar-day = "0.1"
//!
//! # no_std
//! solar-day = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_day::{DayCalculator, Horizon, Location, temporal_hour};
//! use chrono::NaiveDate;
//!
//! let jerusalem = Location::from_time_zone_id(
//!     "Jerusalem",
//!     31.778,  // latitude
//!     35.2354, // longitude
//!     754.0,   // elevation (meters)
//!     "Asia/Jerusalem",
//! )
//! .unwrap();
//! let day = DayCalculator::new(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(), jerusalem);
//!
//! if let (Some(sunrise), Some(sunset)) = (day.sunrise(), day.sunset()) {
//!     println!("Sunrise: {sunrise}");
//!     println!("Sunset: {sunset}");
//! }
//! println!("Civil dawn: {:?}", day.dawn(Horizon::CivilTwilight));
//! println!("Temporal hour: {:?}", temporal_hour(day.sea_level_sunrise(), day.sea_level_sunset()));
//! ```
//!
//! ## Missing events
//!
//! Above the polar circles the sun may not rise or set, and twilight depressions may
//! never be reached. These are ordinary outcomes and are reported as `None` by every
//! accessor. Errors ([`Error`]) are only raised when constructing values from
//! invalid inputs.
//!
//! ## Conventions
//!
//! - Latitude north positive, longitude east positive, elevation in meters
//! - **Zenith**: 0° = directly overhead, 90° = geometric horizon; sunrise/sunset at
//!   a nominal 90° is corrected for refraction, solar radius and elevation by the
//!   [`ZenithPolicy`], all other zeniths are used as given
//! - Bearings and azimuths: 0° = North, measured clockwise

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons against the 90° horizon and in tests
)]

extern crate alloc;

// Public API exports
pub use crate::calculator::SolarCalculator;
pub use crate::day::{DayCalculator, proportional_time, temporal_hour, transit_between};
pub use crate::error::{Error, Result};
pub use crate::location::{GeodesicInverse, Location};
pub use crate::noaa::NoaaCalculator;
pub use crate::types::{Horizon, HoursUtc, SolarEvent, SolarPosition};
pub use crate::usno::UsnoCalculator;
pub use crate::zenith::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, GEOMETRIC_ZENITH, NAUTICAL_ZENITH, ZenithPolicy,
};

// Algorithm modules
pub mod calculator;
pub mod noaa;
pub mod usno;

// Core modules
pub mod day;
pub mod error;
pub mod location;
pub mod types;
pub mod zenith;

// Internal modules
mod math;

// Public modules
pub mod time;
