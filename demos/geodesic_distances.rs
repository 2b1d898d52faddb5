//! Geodesic and rhumb-line distances between cities, plus local mean time offsets.

use chrono::NaiveDate;
use solar_day::Location;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        Location::from_time_zone_id("New York", 40.7128, -74.0060, 10.0, "America/New_York")?,
        Location::from_time_zone_id("London", 51.5074, -0.1278, 11.0, "Europe/London")?,
        Location::from_time_zone_id("Jerusalem", 31.778, 35.2354, 754.0, "Asia/Jerusalem")?,
        Location::from_time_zone_id("Tokyo", 35.6762, 139.6503, 40.0, "Asia/Tokyo")?,
        Location::from_time_zone_id("Sydney", -33.8688, 151.2093, 58.0, "Australia/Sydney")?,
    ];

    println!(
        "{:<24} {:>12} {:>9} {:>9} {:>12} {:>9}",
        "Route", "Geodesic km", "Initial", "Final", "Rhumb km", "Bearing"
    );
    for (i, from) in cities.iter().enumerate() {
        for to in &cities[i + 1..] {
            let route = format!("{} -> {}", from.name(), to.name());
            match from.geodesic_inverse(to) {
                Some(geodesic) => println!(
                    "{:<24} {:>12.1} {:>8.2}° {:>8.2}° {:>12.1} {:>8.2}°",
                    route,
                    geodesic.distance() / 1000.0,
                    geodesic.initial_bearing(),
                    geodesic.final_bearing(),
                    from.rhumb_line_distance(to) / 1000.0,
                    from.rhumb_line_bearing(to)
                ),
                None => println!(
                    "{:<24} {:>12} {:>9} {:>9} {:>12.1} {:>8.2}°",
                    route,
                    "no conv.",
                    "-",
                    "-",
                    from.rhumb_line_distance(to) / 1000.0,
                    from.rhumb_line_bearing(to)
                ),
            }
        }
    }

    let date = NaiveDate::from_ymd_opt(2024, 3, 15).ok_or("invalid date")?;
    let apia = Location::from_time_zone_id("Apia", -13.8333, -171.75, 2.0, "Pacific/Apia")?;

    println!();
    println!("Local mean time on {date}");
    for location in cities.iter().chain(std::iter::once(&apia)) {
        println!(
            "{:<12} LMT {:+8.1} min, zone offset {:+5} min, antimeridian adjustment {:+} day(s)",
            location.name(),
            location.local_mean_time_offset_minutes(date),
            location.raw_offset_minutes(date),
            location.antimeridian_adjustment_days(date)
        );
    }

    Ok(())
}
