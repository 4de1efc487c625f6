use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use drik_rs::{
    BirthMoment, ChartConfig, ChartRequest, DrikError, EngineConfig, GeoPosition,
    compute_positions_with_config, compute_request, init,
};
use drik_vedic_base::{AyanamshaSystem, ayanamsha_deg, nakshatra_from_longitude, rashi_from_longitude};
use log::{LevelFilter, debug};

#[derive(Parser)]
#[command(name = "drik", about = "Sidereal natal chart CLI")]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Civil birth moment fields.
#[derive(Args, Debug, Clone, Copy)]
struct MomentArgs {
    #[arg(long, allow_hyphen_values = true)]
    year: i32,
    #[arg(long)]
    month: u32,
    #[arg(long)]
    day: u32,
    #[arg(long, default_value = "0")]
    hour: u32,
    #[arg(long, default_value = "0")]
    minute: u32,
    /// Zone offset in hours, east-positive (e.g. 5.5)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    utc_offset: f64,
}

impl MomentArgs {
    fn birth_moment(&self) -> BirthMoment {
        BirthMoment::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.utc_offset,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth moment and place, as JSON
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        /// Latitude in degrees, north-positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east-positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// TOML chart config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Chart for a JSON request read from a file or stdin
    Request {
        /// Request file; stdin when omitted
        file: Option<PathBuf>,
        /// TOML chart config
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ayanamsha at a Julian Day
    Ayanamsha {
        #[arg(long)]
        jd: f64,
        /// System name (lahiri, true-chitra, kp, raman, fagan-bradley, yukteshwar)
        #[arg(long, default_value = "lahiri")]
        system: String,
        /// Add nutation for true-equinox systems
        #[arg(long)]
        nutation: bool,
    },
    /// Julian Day of a civil moment
    Jd {
        #[command(flatten)]
        moment: MomentArgs,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig, DrikError> {
    match path {
        Some(p) => ChartConfig::load(p),
        None => Ok(ChartConfig::default()),
    }
}

fn run(command: Commands) -> Result<(), DrikError> {
    match command {
        Commands::Chart {
            moment,
            lat,
            lon,
            config,
            pretty,
        } => {
            let config = load_config(config.as_ref())?;
            init(EngineConfig::default())?;
            let place = GeoPosition {
                latitude_deg: lat,
                longitude_deg: lon,
            };
            let resp = compute_positions_with_config(&moment.birth_moment(), &place, &config)?;
            println!("{}", resp.to_json(pretty)?);
        }

        Commands::Request {
            file,
            config,
            pretty,
        } => {
            let config = load_config(config.as_ref())?;
            let text = match &file {
                Some(p) => fs::read_to_string(p)
                    .map_err(|e| DrikError::Config(format!("cannot read {}: {e}", p.display())))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .map_err(|e| DrikError::Config(format!("cannot read stdin: {e}")))?;
                    buf
                }
            };
            let request = ChartRequest::from_json(&text)?;
            debug!("request: {request:?}");
            init(EngineConfig::default())?;
            let resp = compute_request(&request, &config)?;
            println!("{}", resp.to_json(pretty)?);
        }

        Commands::Rashi { lon } => {
            let info =
                rashi_from_longitude(lon).ok_or(DrikError::UndefinedPlacement("longitude"))?;
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info =
                nakshatra_from_longitude(lon).ok_or(DrikError::UndefinedPlacement("longitude"))?;
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Ayanamsha {
            jd,
            system,
            nutation,
        } => {
            let system: AyanamshaSystem = system.parse()?;
            println!("{system}: {:.6} deg", ayanamsha_deg(system, jd, nutation));
        }

        Commands::Jd { moment } => {
            let moment = moment.birth_moment();
            let instant = moment.to_julian_instant()?;
            println!("{moment}: JD {:.6}", instant.jd);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_arguments_parse() {
        let cli = Cli::try_parse_from([
            "drik", "chart", "--year", "2000", "--month", "1", "--day", "1", "--hour", "12",
            "--lat", "55.75", "--lon", "-37.6", "--utc-offset", "-3.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart {
                moment, lat, lon, ..
            } => {
                assert_eq!(moment.birth_moment(), BirthMoment::new(2000, 1, 1, 12, 0, -3.5));
                assert_eq!(lat, 55.75);
                assert_eq!(lon, -37.6);
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn ayanamsha_defaults_to_lahiri() {
        let cli = Cli::try_parse_from(["drik", "ayanamsha", "--jd", "2451545"]).unwrap();
        match cli.command {
            Commands::Ayanamsha {
                system, nutation, ..
            } => {
                assert_eq!(system, "lahiri");
                assert!(!nutation);
            }
            _ => panic!("expected ayanamsha"),
        }
    }

    #[test]
    fn unknown_system_is_an_error() {
        let err = run(Commands::Ayanamsha {
            jd: 2_451_545.0,
            system: "galactic".to_string(),
            nutation: false,
        })
        .unwrap_err();
        assert!(matches!(err, DrikError::Config(_)));
    }

    #[test]
    fn jd_of_invalid_date_fails() {
        let moment = MomentArgs {
            year: 2023,
            month: 2,
            day: 29,
            hour: 0,
            minute: 0,
            utc_offset: 0.0,
        };
        assert!(matches!(
            run(Commands::Jd { moment }),
            Err(DrikError::InvalidBirthMoment(_))
        ));
    }

    #[test]
    fn rashi_rejects_nan() {
        assert!(run(Commands::Rashi { lon: f64::NAN }).is_err());
    }
}
