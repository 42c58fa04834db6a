use anyhow::{bail, Context, Result};
use clap::Parser;
use fireguard_stations::{Coordinate, NearestStationResolver, StationConfig, StationError, StationProvider};
use fireguard_stations::resolver::eta_minutes;
use std::path::PathBuf;

mod output;

use output::{format_table, write_lookup_geojson};

#[derive(Parser, Debug)]
#[command(
    name = "station-lookup",
    author,
    version,
    about = "Find the nearest fire stations to an incident",
    long_about = "Resolves the fire station closest to an incident location by great-circle \
                  distance and estimates the travel time at a fixed average speed.\n\n\
                  Station lists are JSON files with an average speed and a list of named \
                  stations; without --stations the bundled Palembang list is used."
)]
struct Args {
    /// Incident latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Incident longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Station list JSON file
    #[arg(short, long)]
    stations: Option<PathBuf>,

    /// Average speed in km/h (defaults to the station file's)
    #[arg(long)]
    speed: Option<f64>,

    /// Number of stations to list
    #[arg(short = 'n', long, default_value = "3")]
    top: usize,

    /// Also write the incident and listed stations to this GeoJSON file
    #[arg(short, long)]
    geojson: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let config = match &args.stations {
        Some(path) => {
            log::info!("Stations: {}", path.display());
            StationConfig::from_path(path)
                .with_context(|| format!("Failed to load stations from {}", path.display()))?
        }
        None => {
            log::info!("Stations: bundled Palembang list");
            StationConfig::bundled().context("Failed to load bundled stations")?
        }
    };

    let resolver = match args.speed {
        Some(speed) => NearestStationResolver::new(speed),
        None => config.resolver(),
    }
    .context("Invalid average speed")?;

    let registry = config.into_registry().context("Invalid station list")?;
    log::info!("Loaded {} stations", registry.len());

    let incident = Coordinate::new(args.lat, args.lon);
    if !incident.is_within_bounds() {
        log::warn!("Incident {}, {} is outside the valid coordinate range", args.lat, args.lon);
    }

    let result = match registry.resolve_nearest(incident, resolver.average_speed_kmh()) {
        Ok(result) => result,
        Err(StationError::InvalidInput(message)) => bail!("Cannot resolve a station: {message}"),
        Err(e) => return Err(e.into()),
    };

    println!(
        "Nearest: {} ({:.2} km, ~{} min at {} km/h)",
        result.station.name,
        result.distance_km,
        result.eta_minutes,
        resolver.average_speed_kmh()
    );

    let nearest = registry.nearest_stations(incident, args.top);
    let rows: Vec<_> = nearest
        .iter()
        .map(|d| (d, eta_minutes(d.distance_km, resolver.average_speed_kmh())))
        .collect();
    print!("{}", format_table(&rows));

    if let Some(path) = &args.geojson {
        write_lookup_geojson(incident, &nearest, path)?;
    }

    Ok(())
}
