//! The pluggable sunrise/sunset algorithm interface.

use chrono::NaiveDate;

use crate::location::Location;
use crate::types::{HoursUtc, SolarEvent};
use crate::zenith::ZenithPolicy;

/// An algorithm that finds when the sun crosses a zenith circle on a given UTC date.
///
/// Implementations are pure: the same inputs always give the same answer,
/// and `None` means the sun does not reach the zenith that day (polar day or
/// night, or a twilight depression that is never reached).
///
/// [`DayCalculator`](crate::DayCalculator) takes any implementation as a strategy.
pub trait SolarCalculator {
    /// Short human-readable name of the algorithm.
    fn name(&self) -> &'static str;

    /// Refraction, solar radius and earth radius used to adjust 90° zeniths.
    fn zenith_policy(&self) -> &ZenithPolicy;

    /// Turns a nominal zenith into the effective zenith for an observer at `elevation` meters.
    fn adjust_zenith(&self, zenith: f64, elevation: f64) -> f64 {
        self.zenith_policy().effective_zenith(zenith, elevation)
    }

    /// UTC hour at which the sun reaches `effective_zenith` on `date`.
    ///
    /// The zenith is used as given, without any further adjustment.
    fn time_of_event_utc(
        &self,
        date: NaiveDate,
        location: &Location,
        effective_zenith: f64,
        event: SolarEvent,
    ) -> Option<HoursUtc>;

    /// UTC hour of an event at a nominal zenith, adjusted for the location's elevation.
    fn utc_event(
        &self,
        date: NaiveDate,
        location: &Location,
        zenith: f64,
        event: SolarEvent,
    ) -> Option<HoursUtc> {
        let effective_zenith = self.adjust_zenith(zenith, location.elevation());
        self.time_of_event_utc(date, location, effective_zenith, event)
    }

    /// UTC hour of solar noon (upper transit) on `date`.
    fn utc_noon(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc>;

    /// UTC hour of the solar midnight (lower transit) following noon on `date`.
    fn utc_midnight(&self, date: NaiveDate, location: &Location) -> Option<HoursUtc>;
}
