use chrono::{Local, NaiveDate, Timelike};

use routenplaner::domain::ClockTime;
use routenplaner::efa::{
    EfaClient, EfaConfig, ExtractOptions, LeadingPointPolicy, MockEfaClient, extract,
};
use routenplaner::plan::{build_markers, format_plan, group_itineraries};
use routenplaner::stations::StationDirectory;

/// Default station table location, relative to the working directory.
const DEFAULT_STATIONS_PATH: &str = "data/haltestellen.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Arguments: origin, destination, then optional date and time
    let mut args = std::env::args().skip(1);
    let origin = args.next().unwrap_or_else(|| "Karlsplatz".to_string());
    let destination = args.next().unwrap_or_else(|| "Stephansplatz".to_string());

    let now = Local::now();
    let date = match args.next() {
        Some(arg) => {
            NaiveDate::parse_from_str(&arg, "%Y-%m-%d").expect("Invalid date, expected YYYY-MM-DD")
        }
        None => now.date_naive(),
    };
    let time = match args.next() {
        Some(arg) => ClockTime::parse_hhmm(&arg).expect("Invalid time, expected HH:MM"),
        None => ClockTime::from_hm(now.hour(), now.minute()).expect("Current time out of range"),
    };

    // Load the station table
    let stations_path = std::env::var("ROUTENPLANER_STATIONS")
        .unwrap_or_else(|_| DEFAULT_STATIONS_PATH.to_string());
    let directory =
        StationDirectory::from_json_file(&stations_path).expect("Failed to load station table");
    println!("Loaded {} stations from {}", directory.len(), stations_path);

    let (origin_diva, destination_diva) = match directory.validate_endpoints(&origin, &destination)
    {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("Routenplaner: {origin} -> {destination} on {date} at {time}");

    let leading_points = if std::env::var("ROUTENPLANER_KEEP_ALL_POINTS").is_ok() {
        LeadingPointPolicy::KeepAll
    } else {
        LeadingPointPolicy::SkipBoarding
    };
    let options = ExtractOptions { leading_points };

    // Fetch the trip response, from recorded files when a mock directory
    // is configured
    let xml = match std::env::var("ROUTENPLANER_MOCK_DIR") {
        Ok(dir) => {
            let client = MockEfaClient::new(&dir).expect("Failed to load mock trips");
            client
                .trip_request(origin_diva, destination_diva, date, time)
                .await
        }
        Err(_) => {
            let client = EfaClient::new(EfaConfig::new()).expect("Failed to create EFA client");
            client
                .trip_request(origin_diva, destination_diva, date, time)
                .await
        }
    }
    .expect("Trip request failed");

    let extraction = match extract(&xml, &options) {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("Failed to extract itineraries: {e}");
            std::process::exit(1);
        }
    };

    let itineraries = group_itineraries(extraction.segments);
    println!(
        "Found {} route suggestions from {origin} to {destination}",
        itineraries.len()
    );
    println!("{}", format_plan(&itineraries));

    let markers = build_markers(&extraction.stop_refs, &directory);
    for marker in &markers {
        println!(
            "Marker: {} ({}, {}) - {}",
            marker.title, marker.latitude, marker.longitude, marker.description
        );
    }
}
