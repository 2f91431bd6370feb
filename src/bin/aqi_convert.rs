// Small dev utility: convert a single concentration into an AQI value.
//
// Usage:
//   cargo run --bin aqi_convert -- <pollutant> <concentration>
//
// Prints the matched breakpoint and the index as JSON. Uses the standard tables.

use aqi_sentry::engine::AqiConverter;
use aqi_sentry::Pollutant;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let pollutant: Pollutant = args
        .next()
        .ok_or("missing pollutant (pm25 | pm10 | o3 | no2)")?
        .parse()?;
    let concentration: f64 = args.next().ok_or("missing concentration")?.parse()?;

    let converter = AqiConverter::epa()?;
    let (breakpoint, placement) = converter.table().locate(pollutant, concentration);
    let aqi = converter.to_index(pollutant, concentration)?;

    let out = json!({
        "pollutant": pollutant,
        "concentration": concentration,
        "unit": pollutant.unit(),
        "breakpoint": breakpoint,
        "placement": placement,
        "ceiling": converter.table().ceiling(pollutant),
        "aqi": aqi,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
