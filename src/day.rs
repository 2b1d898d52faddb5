//! Sunrise, sunset and twilight instants for one civil date at one location.
//!
//! [`DayCalculator`] turns the fractional UTC hours produced by a
//! [`SolarCalculator`] into absolute instants in the location's time zone.
//! It takes care of three things the calculators know nothing about:
//!
//! - **Antimeridian dates.** When the civil zone disagrees with the longitude by
//!   20 hours or more, the solar equations run on the neighboring date.
//! - **UTC day of the event.** An event's UTC hour may belong to the previous or
//!   next UTC day (a New York sunset is after 0h UTC). The day is chosen from
//!   the longitude's whole-hour slot.
//! - **Elevation.** True sunrise and sunset use the location's elevation;
//!   the `sea_level_*` variants evaluate a sea-level copy instead.
//!
//! Every accessor returns `None` when the event does not happen, never NaN.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::calculator::SolarCalculator;
use crate::location::Location;
use crate::math::floor;
use crate::noaa::NoaaCalculator;
use crate::types::{Horizon, HoursUtc, SolarEvent};
use crate::zenith::GEOMETRIC_ZENITH;

/// Temporal hours in a day (and in a night).
const TEMPORAL_HOURS_PER_DAY: i32 = 12;

/// Milliseconds per hour.
const MILLISECONDS_PER_HOUR: f64 = 3_600_000.0;

/// Solar events placed on a UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayEvent {
    Sunrise,
    Sunset,
    Noon,
    Midnight,
}

impl From<SolarEvent> for DayEvent {
    fn from(event: SolarEvent) -> Self {
        match event {
            SolarEvent::Sunrise => Self::Sunrise,
            SolarEvent::Sunset => Self::Sunset,
        }
    }
}

/// Solar times for one civil date at one location.
///
/// The calculator strategy defaults to [`NoaaCalculator`]; any other
/// [`SolarCalculator`] can be injected with [`DayCalculator::with_calculator`].
///
/// # Example
/// ```
/// # use solar_day::{DayCalculator, Horizon, Location};
/// # use chrono::{NaiveDate, Timelike};
/// let nyc = Location::from_time_zone_id("New York", 40.7, -74.0, 0.0, "America/New_York").unwrap();
/// let day = DayCalculator::new(NaiveDate::from_ymd_opt(2023, 6, 21).unwrap(), nyc);
///
/// let sunrise = day.sunrise().unwrap();
/// let sunset = day.sunset().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 24));
/// assert_eq!((sunset.hour(), sunset.minute()), (20, 30));
///
/// let civil_dusk = day.dusk(Horizon::CivilTwilight).unwrap();
/// assert!(civil_dusk > sunset);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DayCalculator<C = NoaaCalculator> {
    date: NaiveDate,
    location: Location,
    calculator: C,
}

impl DayCalculator {
    /// Creates a calculator using the NOAA algorithm with the standard zenith policy.
    #[must_use]
    pub fn new(date: NaiveDate, location: Location) -> Self {
        Self::with_calculator(date, location, NoaaCalculator::default())
    }
}

impl<C: SolarCalculator> DayCalculator<C> {
    /// Creates a calculator with an explicit algorithm.
    #[must_use]
    pub const fn with_calculator(date: NaiveDate, location: Location, calculator: C) -> Self {
        Self {
            date,
            location,
            calculator,
        }
    }

    /// Same location and algorithm, bound to another date.
    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> Self
    where
        C: Clone,
    {
        Self {
            date,
            location: self.location.clone(),
            calculator: self.calculator.clone(),
        }
    }

    /// Gets the civil date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Gets the algorithm.
    #[must_use]
    pub const fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Date the solar equations run on: the civil date shifted by the
    /// location's antimeridian adjustment.
    ///
    /// `None` only if the shift leaves the representable date range.
    #[must_use]
    pub fn algorithm_date(&self) -> Option<NaiveDate> {
        shift_days(
            self.date,
            self.location.antimeridian_adjustment_days(self.date),
        )
    }

    /// Visible sunrise: upper limb on the horizon, corrected for refraction and elevation.
    #[must_use]
    pub fn sunrise(&self) -> Option<DateTime<Tz>> {
        self.offset_event(GEOMETRIC_ZENITH, SolarEvent::Sunrise)
    }

    /// Visible sunset: upper limb on the horizon, corrected for refraction and elevation.
    #[must_use]
    pub fn sunset(&self) -> Option<DateTime<Tz>> {
        self.offset_event(GEOMETRIC_ZENITH, SolarEvent::Sunset)
    }

    /// Sunrise as seen from sea level at this location.
    #[must_use]
    pub fn sea_level_sunrise(&self) -> Option<DateTime<Tz>> {
        self.event_at(&self.location.at_sea_level(), GEOMETRIC_ZENITH, SolarEvent::Sunrise)
    }

    /// Sunset as seen from sea level at this location.
    #[must_use]
    pub fn sea_level_sunset(&self) -> Option<DateTime<Tz>> {
        self.event_at(&self.location.at_sea_level(), GEOMETRIC_ZENITH, SolarEvent::Sunset)
    }

    /// When the rising sun reaches `zenith` degrees.
    ///
    /// Zeniths other than 90° are used as is. For example 96° is civil dawn.
    #[must_use]
    pub fn sunrise_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        self.offset_event(zenith, SolarEvent::Sunrise)
    }

    /// When the setting sun reaches `zenith` degrees.
    #[must_use]
    pub fn sunset_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        self.offset_event(zenith, SolarEvent::Sunset)
    }

    /// Morning crossing of a named horizon (sunrise or the start of a twilight).
    #[must_use]
    pub fn dawn(&self, horizon: Horizon) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(horizon.zenith())
    }

    /// Evening crossing of a named horizon (sunset or the end of a twilight).
    #[must_use]
    pub fn dusk(&self, horizon: Horizon) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(horizon.zenith())
    }

    /// Instant at which the sun crosses `zenith` on the given side of noon.
    ///
    /// A nominal 90° is adjusted by the calculator's zenith policy for the
    /// location's elevation. All other zeniths pass through unchanged.
    #[must_use]
    pub fn offset_event(&self, zenith: f64, event: SolarEvent) -> Option<DateTime<Tz>> {
        self.event_at(&self.location, zenith, event)
    }

    /// UTC hour of sunrise at `zenith`, elevation-adjusted for 90°.
    #[must_use]
    pub fn utc_sunrise(&self, zenith: f64) -> Option<HoursUtc> {
        self.utc_event(&self.location, zenith, SolarEvent::Sunrise)
    }

    /// UTC hour of sunset at `zenith`, elevation-adjusted for 90°.
    #[must_use]
    pub fn utc_sunset(&self, zenith: f64) -> Option<HoursUtc> {
        self.utc_event(&self.location, zenith, SolarEvent::Sunset)
    }

    /// UTC hour of sunrise at `zenith` for a sea-level observer.
    #[must_use]
    pub fn utc_sea_level_sunrise(&self, zenith: f64) -> Option<HoursUtc> {
        self.utc_event(&self.location.at_sea_level(), zenith, SolarEvent::Sunrise)
    }

    /// UTC hour of sunset at `zenith` for a sea-level observer.
    #[must_use]
    pub fn utc_sea_level_sunset(&self, zenith: f64) -> Option<HoursUtc> {
        self.utc_event(&self.location.at_sea_level(), zenith, SolarEvent::Sunset)
    }

    /// Solar noon, the sun's upper meridian transit.
    #[must_use]
    pub fn sun_transit(&self) -> Option<DateTime<Tz>> {
        let date = self.algorithm_date()?;
        let hours = self.calculator.utc_noon(date, &self.location)?;
        self.place_on_day(date, hours, DayEvent::Noon)
    }

    /// Solar midnight following this date's solar noon.
    #[must_use]
    pub fn solar_midnight(&self) -> Option<DateTime<Tz>> {
        let date = self.algorithm_date()?;
        let hours = self.calculator.utc_midnight(date, &self.location)?;
        self.place_on_day(date, hours, DayEvent::Midnight)
    }

    /// One twelfth of the day from sea-level sunrise to sea-level sunset.
    #[must_use]
    pub fn temporal_hour_of_day(&self) -> Option<Duration> {
        temporal_hour(self.sea_level_sunrise(), self.sea_level_sunset())
    }

    /// Instant when local mean solar time at this location reads `hours` on this date.
    ///
    /// Local mean time runs 4 minutes per degree of longitude ahead of UTC.
    /// The day is counted from the algorithm date, so antimeridian zones
    /// still get an instant on the civil date.
    /// Returns `None` if `hours` is outside [0, 24).
    #[must_use]
    pub fn local_mean_time(&self, hours: f64) -> Option<DateTime<Tz>> {
        if !(0.0..24.0).contains(&hours) {
            return None;
        }
        let utc_hours = hours - self.location.longitude() / 15.0;
        let midnight = self.algorithm_date()?.and_hms_opt(0, 0, 0)?;
        let offset = Duration::try_milliseconds((utc_hours * MILLISECONDS_PER_HOUR) as i64)?;
        let utc = midnight.checked_add_signed(offset)?;
        Some(self.location.time_zone().from_utc_datetime(&utc))
    }

    fn utc_event(&self, location: &Location, zenith: f64, event: SolarEvent) -> Option<HoursUtc> {
        self.calculator
            .utc_event(self.algorithm_date()?, location, zenith, event)
    }

    fn event_at(
        &self,
        location: &Location,
        zenith: f64,
        event: SolarEvent,
    ) -> Option<DateTime<Tz>> {
        let date = self.algorithm_date()?;
        let hours = self.calculator.utc_event(date, location, zenith, event)?;
        self.place_on_day(date, hours, event.into())
    }

    /// Builds the instant for a UTC hour computed on `algorithm_date`,
    /// truncated to whole milliseconds.
    fn place_on_day(
        &self,
        algorithm_date: NaiveDate,
        hours: HoursUtc,
        event: DayEvent,
    ) -> Option<DateTime<Tz>> {
        let transition = utc_day_transition(self.location.longitude(), hours, event);
        let utc_date = shift_days(algorithm_date, transition)?;
        let offset = Duration::try_milliseconds(hours.milliseconds())?;
        let utc = utc_date.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)?;
        Some(self.location.time_zone().from_utc_datetime(&utc))
    }
}

/// Days to move an event's UTC hour so it lands on the UTC day it belongs to.
///
/// The longitude's whole-hour slot approximates the local clock. A sunrise
/// that would fall after 18h local happened on the previous UTC day. A
/// sunset before 6h local happens on the next one. Noon and midnight are
/// handled the same way around 24h and 12h.
fn utc_day_transition(longitude: f64, hours: HoursUtc, event: DayEvent) -> i8 {
    let slot = (longitude as i32) / 15;
    let local = slot + floor(hours.hours()) as i32;
    match event {
        DayEvent::Sunrise if local > 18 => -1,
        DayEvent::Sunset if local < 6 => 1,
        DayEvent::Noon if local > 24 => -1,
        DayEvent::Midnight if local < 12 => 1,
        _ => 0,
    }
}

fn shift_days(date: NaiveDate, days: i8) -> Option<NaiveDate> {
    match days {
        0 => Some(date),
        1 => date.succ_opt(),
        -1 => date.pred_opt(),
        _ => date.checked_add_signed(Duration::days(i64::from(days))),
    }
}

/// One twelfth of the interval from `start` to `end`.
///
/// A missing endpoint yields `None`. This is the unit of "proportional"
/// (seasonal) hours.
///
/// # Example
/// ```
/// # use solar_day::temporal_hour;
/// # use chrono::{Duration, TimeZone, Utc};
/// let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
/// let sunset = Utc.with_ymd_and_hms(2024, 3, 20, 18, 36, 0).unwrap();
/// assert_eq!(temporal_hour(Some(sunrise), Some(sunset)), Some(Duration::minutes(63)));
/// assert_eq!(temporal_hour(Some(sunrise), None), None);
/// ```
#[must_use]
pub fn temporal_hour<Z: TimeZone>(
    start: Option<DateTime<Z>>,
    end: Option<DateTime<Z>>,
) -> Option<Duration> {
    let (start, end) = (start?, end?);
    Some(end.signed_duration_since(start) / TEMPORAL_HOURS_PER_DAY)
}

/// `start` plus `hours` temporal hours of the `start`..`end` day.
///
/// `proportional_time(sunrise, sunset, 3.0)` is the end of the third
/// seasonal hour. Missing endpoints or a non-finite `hours` yield `None`.
#[must_use]
pub fn proportional_time<Z: TimeZone>(
    start: Option<DateTime<Z>>,
    end: Option<DateTime<Z>>,
    hours: f64,
) -> Option<DateTime<Z>> {
    if !hours.is_finite() {
        return None;
    }
    let start = start?;
    let unit = temporal_hour(Some(start.clone()), end)?;
    let offset = Duration::try_milliseconds((unit.num_milliseconds() as f64 * hours) as i64)?;
    start.checked_add_signed(offset)
}

/// Midpoint between two instants, six temporal hours after `start`.
///
/// Between sunrise and sunset this is the "proportional" solar noon.
#[must_use]
pub fn transit_between<Z: TimeZone>(
    start: Option<DateTime<Z>>,
    end: Option<DateTime<Z>>,
) -> Option<DateTime<Z>> {
    proportional_time(start, end, f64::from(TEMPORAL_HOURS_PER_DAY) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use chrono_tz::{America, Asia, UTC};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn new_york(day: NaiveDate) -> DayCalculator {
        let location = Location::new("New York", 40.7, -74.0, 0.0, America::New_York).unwrap();
        DayCalculator::new(day, location)
    }

    fn hms<Z: TimeZone>(instant: &DateTime<Z>) -> (u32, u32, u32) {
        (instant.hour(), instant.minute(), instant.second())
    }

    #[test]
    fn test_new_york_solstice() {
        let day = new_york(date(2023, 6, 21));
        let sunrise = day.sunrise().unwrap();
        let sunset = day.sunset().unwrap();

        assert_eq!(sunrise.date_naive(), date(2023, 6, 21));
        assert_eq!(sunset.date_naive(), date(2023, 6, 21));
        assert_eq!(hms(&sunrise), (5, 24, 58));
        assert_eq!(hms(&sunset), (20, 30, 38));

        let minutes = (sunset - sunrise).num_seconds() as f64 / 60.0;
        assert!((minutes - 905.67).abs() < 0.1, "day length {minutes} min");
    }

    #[test]
    fn test_utc_day_transition_rules() {
        let at = HoursUtc::from_hours;
        // New York sunset after 0h UTC belongs to the next UTC day
        assert_eq!(utc_day_transition(-74.0, at(0.51), DayEvent::Sunset), 1);
        assert_eq!(utc_day_transition(-74.0, at(9.4), DayEvent::Sunrise), 0);
        // Tokyo sunrise before 0h UTC belongs to the previous UTC day
        assert_eq!(utc_day_transition(139.65, at(19.4), DayEvent::Sunrise), -1);
        assert_eq!(utc_day_transition(139.65, at(9.0), DayEvent::Sunset), 0);
        assert_eq!(utc_day_transition(-74.0, at(4.96), DayEvent::Midnight), 1);
        assert_eq!(utc_day_transition(-74.0, at(16.96), DayEvent::Noon), 0);
        // slot is truncated: -14.9° is still slot 0
        assert_eq!(utc_day_transition(-14.9, at(5.5), DayEvent::Sunset), 1);
    }

    #[test]
    fn test_tokyo_sunrise_on_civil_date() {
        let tokyo = Location::new("Tokyo", 35.6762, 139.6503, 40.0, Asia::Tokyo).unwrap();
        let day = DayCalculator::new(date(2023, 6, 21), tokyo);

        let sunrise = day.sunrise().unwrap();
        assert_eq!(sunrise.date_naive(), date(2023, 6, 21));
        assert_eq!(sunrise.with_timezone(&Utc).date_naive(), date(2023, 6, 20));
        assert_eq!(sunrise.hour(), 4);
    }

    #[test]
    fn test_elevation_moves_sunrise_earlier() {
        let location = Location::new("peak", 40.7, -74.0, 1000.0, America::New_York).unwrap();
        let day = DayCalculator::new(date(2023, 6, 21), location);

        let elevated = day.sunrise().unwrap();
        let sea_level = day.sea_level_sunrise().unwrap();
        assert_eq!(hms(&elevated), (5, 18, 34));
        assert_eq!(hms(&sea_level), (5, 24, 58));
        assert_eq!(day.location().elevation(), 1000.0);

        // twilight is not elevation dependent
        let sea = DayCalculator::new(date(2023, 6, 21), day.location().at_sea_level());
        assert_eq!(day.dawn(Horizon::CivilTwilight), sea.dawn(Horizon::CivilTwilight));
    }

    #[test]
    fn test_utc_accessors() {
        let day = new_york(date(2023, 6, 21));
        assert!((day.utc_sunrise(90.0).unwrap().hours() - 9.416143).abs() < 1e-5);
        assert!((day.utc_sunset(90.0).unwrap().hours() - 0.510590).abs() < 1e-5);
        assert_eq!(day.utc_sea_level_sunrise(90.0), day.utc_sunrise(90.0));
        assert_eq!(day.utc_sea_level_sunset(96.0), day.utc_sunset(96.0));
    }

    #[test]
    fn test_civil_twilight() {
        let day = new_york(date(2023, 6, 21));
        assert_eq!(hms(&day.dawn(Horizon::CivilTwilight).unwrap()), (4, 51, 32));
        assert_eq!(hms(&day.dusk(Horizon::CivilTwilight).unwrap()), (21, 4, 3));
    }

    #[test]
    fn test_transit_and_midnight() {
        let day = new_york(date(2023, 6, 21));
        let noon = day.sun_transit().unwrap();
        assert_eq!(noon.date_naive(), date(2023, 6, 21));
        assert_eq!((noon.hour(), noon.minute()), (12, 57));

        let midnight = day.solar_midnight().unwrap();
        assert_eq!(midnight.date_naive(), date(2023, 6, 22));
        assert_eq!((midnight.hour(), midnight.minute()), (0, 57));

        let proportional = transit_between(day.sea_level_sunrise(), day.sea_level_sunset()).unwrap();
        assert!((proportional - noon).num_seconds().abs() < 60);
    }

    #[test]
    fn test_temporal_hour() {
        let day = new_york(date(2023, 6, 21));
        let hour = day.temporal_hour_of_day().unwrap();
        let length = day.sunset().unwrap() - day.sunrise().unwrap();
        assert!((hour * 12 - length).num_milliseconds().abs() < 12);

        assert_eq!(temporal_hour(day.sunrise(), None), None);
        assert_eq!(temporal_hour::<Tz>(None, None), None);
    }

    #[test]
    fn test_proportional_time() {
        let start = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();

        let third = proportional_time(Some(start), Some(end), 3.0).unwrap();
        assert_eq!(third, Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap());
        let before = proportional_time(Some(start), Some(end), -0.5).unwrap();
        assert_eq!(before, Utc.with_ymd_and_hms(2024, 3, 20, 5, 30, 0).unwrap());

        assert_eq!(proportional_time(None, Some(end), 3.0), None);
        assert_eq!(proportional_time(Some(start), Some(end), f64::NAN), None);
    }

    #[test]
    fn test_polar_day_propagates_absence() {
        let location = Location::new("north", 70.0, 20.0, 0.0, UTC).unwrap();
        let day = DayCalculator::new(date(2024, 6, 21), location);

        assert_eq!(day.sunset(), None);
        assert_eq!(day.sunrise(), None);
        assert_eq!(day.temporal_hour_of_day(), None);
        assert_eq!(transit_between(day.sunrise(), day.sunset()), None);
        assert!(day.sun_transit().is_some());
        assert!(day.sunset_offset_by_degrees(80.0).is_some());
    }

    #[test]
    fn test_unchecked_custom_horizon_has_no_event() {
        let day = new_york(date(2023, 6, 21));
        assert_eq!(day.dawn(Horizon::Custom(f64::NAN)), None);
        assert_eq!(day.dusk(Horizon::Custom(f64::NAN)), None);
        assert_eq!(day.utc_sunrise(f64::NAN), None);
        assert!(day.dawn(Horizon::custom(101.0).unwrap()).is_some());
    }

    #[test]
    fn test_local_mean_time() {
        let day = new_york(date(2023, 6, 21));
        let noon = day.local_mean_time(12.0).unwrap();
        // 12:00 LMT at 74°W is 16:56 UTC
        let utc = noon.with_timezone(&Utc);
        assert_eq!(hms(&utc), (16, 56, 0));
        assert_eq!(utc.date_naive(), date(2023, 6, 21));

        assert_eq!(day.local_mean_time(24.0), None);
        assert_eq!(day.local_mean_time(-0.1), None);
        assert_eq!(day.local_mean_time(f64::NAN), None);
    }

    #[test]
    fn test_rebinding_is_independent() {
        let june = new_york(date(2023, 6, 21));
        let july = june.for_date(date(2023, 7, 21));
        assert_eq!(july.date(), date(2023, 7, 21));
        assert_eq!(june.date(), date(2023, 6, 21));
        assert!(july.sunrise().unwrap() > june.sunrise().unwrap());
        assert_eq!(july.calculator().name(), "NOAA");
    }
}
