//! Command line access to the OurAirports query engine.

mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use loader::{ingest::fetch_airports_data, minify::minify_dir, select_source, LoaderConfig};
use model::{AirportId, AirportType, BasicInfo, Codes, Coordinates, References, Region};
use ourairports::OurAirports;
use schemars::schema_for;
use search::AirportFilter;
use serde::Serialize;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "ourairports")]
#[command(about = "Query the OurAirports data set", long_about = None)]
struct Args {
    /// Directory with the JSON shards, overrides OURAIRPORTS_DATA_DIR
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download airports.csv and write the shards into the data directory
    Fetch,
    /// Write compact copies of all JSON files of a directory
    Minify {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        to: PathBuf,
    },
    /// Find an airport by its IATA code
    Iata { code: String },
    /// Find an airport by its ICAO code
    Icao { code: String },
    /// List the airports of a country (ISO 3166-1 alpha-2)
    Country { code: String },
    /// List the airports within a radius around a point
    Radius {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Radius in kilometers
        #[arg(allow_negative_numbers = true)]
        radius_km: f64,
        /// Include the distance and sort by it
        #[arg(long)]
        with_distance: bool,
    },
    /// List the airports matching all given criteria
    Search {
        /// e.g. large_airport, heliport or closed
        #[arg(long = "type")]
        airport_type: Option<AirportType>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        continent: Option<String>,
        #[arg(long)]
        has_iata_code: Option<bool>,
        #[arg(long)]
        scheduled_service: Option<bool>,
    },
    /// Show all data of one airport
    Show { id: u32 },
    /// Print the JSON schema of a shard
    Schema {
        #[arg(value_enum)]
        shard: ShardArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShardArg {
    BasicInfo,
    Codes,
    Coordinates,
    Region,
    References,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_schema(shard: ShardArg) -> Result<(), CliError> {
    let schema = match shard {
        ShardArg::BasicInfo => schema_for!(Vec<BasicInfo>),
        ShardArg::Codes => schema_for!(Vec<Codes>),
        ShardArg::Coordinates => schema_for!(Vec<Coordinates>),
        ShardArg::Region => schema_for!(Vec<Region>),
        ShardArg::References => schema_for!(Vec<References>),
    };
    print_json(&schema)
}

async fn load(config: &LoaderConfig) -> Result<OurAirports, CliError> {
    let mut airports = OurAirports::new();
    let source = select_source(config);
    airports.init(source.as_ref()).await?;
    Ok(airports)
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut config = LoaderConfig::from_env();
    if let Some(data_dir) = args.data_dir {
        config = config.with_data_dir(data_dir);
    }

    match args.command {
        Command::Fetch => {
            let data = fetch_airports_data(&config).await?;
            eprintln!(
                "wrote {} airports to {}",
                data.basic_info.len(),
                config.data_dir.display()
            );
        }
        Command::Minify { from, to } => {
            let report = minify_dir(&from, &to)?;
            eprintln!(
                "minified {} files, saved {:.1}%",
                report.files.len(),
                report.saved_ratio() * 100.0
            );
        }
        Command::Schema { shard } => print_schema(shard)?,
        Command::Iata { code } => {
            let airports = load(&config).await?;
            let airport = airports
                .find_by_iata_code(&code)?
                .ok_or(CliError::NotFound(code))?;
            print_json(airport)?;
        }
        Command::Icao { code } => {
            let airports = load(&config).await?;
            let airport = airports
                .find_by_icao_code(&code)?
                .ok_or(CliError::NotFound(code))?;
            print_json(airport)?;
        }
        Command::Country { code } => {
            let airports = load(&config).await?;
            print_json(&airports.find_by_country(&code)?)?;
        }
        Command::Radius {
            latitude,
            longitude,
            radius_km,
            with_distance,
        } => {
            let airports = load(&config).await?;
            if with_distance {
                let result = airports
                    .find_airports_in_radius_with_distance(latitude, longitude, radius_km)?;
                print_json(&result)?;
            } else {
                let result = airports.find_airports_in_radius(latitude, longitude, radius_km)?;
                print_json(&result)?;
            }
        }
        Command::Search {
            airport_type,
            country,
            continent,
            has_iata_code,
            scheduled_service,
        } => {
            let airports = load(&config).await?;
            let filter = AirportFilter {
                airport_type,
                country,
                continent,
                has_iata_code,
                has_scheduled_service: scheduled_service,
            };
            print_json(&airports.search_airports(&filter)?)?;
        }
        Command::Show { id } => {
            let airports = load(&config).await?;
            let record = airports
                .airport(AirportId::new(id))?
                .ok_or_else(|| CliError::NotFound(id.to_string()))?;
            print_json(&record)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(why) = run(args).await {
        log::debug!("command failed: {:?}", why);
        why.exit();
    }
}
