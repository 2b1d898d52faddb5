//! Validate NOAA event times against independently computed reference values.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use solar_day::{Location, NoaaCalculator, SolarCalculator, SolarEvent, ZenithPolicy};
use std::error::Error;
use std::fs::File;

/// About 4 ms; the reference is printed with 9 decimals of an hour.
const TOLERANCE_HOURS: f64 = 1e-6;

#[derive(Debug)]
struct NoaaTestRecord {
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    expected_sunrise: Option<f64>,
    expected_sunset: Option<f64>,
}

impl NoaaTestRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            date: record[0].parse()?,
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            zenith: record[3].parse()?,
            expected_sunrise: optional_hours(&record[4])?,
            expected_sunset: optional_hours(&record[5])?,
        })
    }
}

fn optional_hours(field: &str) -> Result<Option<f64>, Box<dyn Error>> {
    if field.is_empty() {
        Ok(None)
    } else {
        Ok(Some(field.parse()?))
    }
}

fn load_records() -> Result<Vec<NoaaTestRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/noaa_reference.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(NoaaTestRecord::from_csv_record(&result?)?);
    }
    Ok(records)
}

/// Difference between two hours of the day, taking the 0h wrap into account.
fn hour_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 24.0;
    diff.min(24.0 - diff)
}

fn check_event(
    record: &NoaaTestRecord,
    event: SolarEvent,
    expected: Option<f64>,
    failures: &mut Vec<String>,
) {
    let noaa = NoaaCalculator::default();
    let location = Location::new(
        "reference",
        record.latitude,
        record.longitude,
        0.0,
        chrono_tz::UTC,
    )
    .unwrap();
    let actual = noaa
        .time_of_event_utc(record.date, &location, record.zenith, event)
        .map(|hours| hours.hours());

    match (expected, actual) {
        (Some(expected), Some(actual)) => {
            let diff = hour_difference(expected, actual);
            if diff > TOLERANCE_HOURS {
                failures.push(format!(
                    "{record:?} {event:?}: expected {expected}, got {actual} (diff {diff})"
                ));
            }
        }
        (None, None) => {}
        (expected, actual) => failures.push(format!(
            "{record:?} {event:?}: expected {expected:?}, got {actual:?}"
        )),
    }
}

#[test]
fn test_noaa_reference_data() -> Result<(), Box<dyn Error>> {
    let records = load_records()?;
    assert!(records.len() > 150, "only {} records loaded", records.len());

    let mut failures = Vec::new();
    for record in &records {
        check_event(record, SolarEvent::Sunrise, record.expected_sunrise, &mut failures);
        check_event(record, SolarEvent::Sunset, record.expected_sunset, &mut failures);
    }

    assert!(
        failures.is_empty(),
        "{} of {} events differ:\n{}",
        failures.len(),
        records.len() * 2,
        failures.join("\n")
    );
    Ok(())
}

#[test]
fn test_reference_covers_missing_events() -> Result<(), Box<dyn Error>> {
    let records = load_records()?;
    let missing = records
        .iter()
        .filter(|r| r.expected_sunrise.is_none() || r.expected_sunset.is_none())
        .count();
    assert!(missing > 0);
    Ok(())
}

#[test]
fn test_standard_policy_reproduces_reference_zenith() -> Result<(), Box<dyn Error>> {
    // the 90.8333° rows are the standard policy's sea-level sunrise zenith
    let effective = ZenithPolicy::standard().effective_zenith(90.0, 0.0);
    let records = load_records()?;
    assert!(
        records
            .iter()
            .any(|r| (r.zenith - effective).abs() < 1e-12)
    );
    Ok(())
}
