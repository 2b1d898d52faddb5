//! Sunrise, sunset, twilight and temporal hours for a few locations around the world.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use solar_day::{DayCalculator, Horizon, Location, UsnoCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let locations = [
        Location::from_time_zone_id("Jerusalem", 31.778, 35.2354, 754.0, "Asia/Jerusalem")?,
        Location::from_time_zone_id("New York", 40.7128, -74.0060, 10.0, "America/New_York")?,
        Location::from_time_zone_id("Tromsø", 69.6492, 18.9553, 0.0, "Europe/Oslo")?,
        Location::from_time_zone_id("Apia, Samoa", -13.8333, -171.75, 2.0, "Pacific/Apia")?,
        Location::from_time_zone_id("Longyearbyen", 78.22, 15.65, 0.0, "Arctic/Longyearbyen")?,
    ];

    // winter solstice shows the most extreme variations
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;

    for location in locations {
        println!("=== {} ===", location.name());
        println!(
            "Coordinates: {:.4}°N, {:.4}°E, {:.0} m ({})",
            location.latitude(),
            location.longitude(),
            location.elevation(),
            location.time_zone()
        );

        let day = DayCalculator::new(date, location);
        if let Some(algorithm_date) = day.algorithm_date().filter(|d| *d != date) {
            println!("Solar equations run on {algorithm_date} (antimeridian time zone)");
        }
        println!();
        print_day(&day);
        println!();
    }

    compare_algorithms(date)?;
    Ok(())
}

fn print_day(day: &DayCalculator) {
    let horizons = [
        ("Astronomical twilight", Horizon::AstronomicalTwilight),
        ("Nautical twilight", Horizon::NauticalTwilight),
        ("Civil twilight", Horizon::CivilTwilight),
        ("Sunrise/Sunset", Horizon::SunriseSunset),
    ];

    for (name, horizon) in horizons {
        println!(
            "{:<22} {} - {}",
            name,
            format_time(day.dawn(horizon)),
            format_time(day.dusk(horizon))
        );
    }
    println!("{:<22} {}", "Solar noon", format_time(day.sun_transit()));
    println!("{:<22} {}", "Solar midnight", format_time(day.solar_midnight()));

    match day.temporal_hour_of_day() {
        Some(hour) => println!(
            "{:<22} {} min {} s",
            "Temporal hour",
            hour.num_minutes(),
            hour.num_seconds() % 60
        ),
        None => println!("{:<22} none (no sea-level sunrise or sunset)", "Temporal hour"),
    }
}

fn compare_algorithms(date: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let location =
        Location::from_time_zone_id("New York", 40.7128, -74.0060, 10.0, "America/New_York")?;
    let noaa = DayCalculator::new(date, location.clone());
    let usno = DayCalculator::with_calculator(date, location, UsnoCalculator::default());

    println!("=== NOAA vs USNO, New York ===");
    println!(
        "NOAA: {} - {}",
        format_time(noaa.sunrise()),
        format_time(noaa.sunset())
    );
    println!(
        "USNO: {} - {}",
        format_time(usno.sunrise()),
        format_time(usno.sunset())
    );
    Ok(())
}

fn format_time(time: Option<DateTime<Tz>>) -> String {
    time.map_or_else(|| "--:--:--".to_string(), |t| t.format("%H:%M:%S %Z").to_string())
}
