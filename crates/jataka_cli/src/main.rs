use clap::{Parser, Subcommand};
use jataka_base::{
    Varga, nakshatra_from_longitude, rashi_from_longitude, varga_sign,
};
use jataka_chart::kundali_for_birth;
use jataka_ephem::{BirthInput, EphemerisSample, FixedEphemeris};

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic divisional chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Divisional sign from sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Division count (1, 7, 9, 20, ...)
        #[arg(long, default_value = "9")]
        divisions: u16,
    },
    /// Full multi-division chart JSON from supplied longitudes
    Chart {
        /// Birth date, UTC (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, UTC (HH:MM)
        #[arg(long)]
        time: String,
        /// Geographic latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Geographic longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Tropical ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Ayanamsha in degrees (0 if the ascendant is already sidereal)
        #[arg(long, default_value = "0.0")]
        ayanamsha: f64,
        /// Sidereal longitudes for Sun, Moon, Mars, Mercury, Jupiter,
        /// Venus, Saturn, Rahu (Ketu is derived)
        #[arg(long, value_delimiter = ',', num_args = 8)]
        bodies: Vec<f64>,
        /// Comma-separated division labels (d1, d7, d9, d20)
        #[arg(long, default_value = "d1,d7,d9,d20", value_delimiter = ',')]
        vargas: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}), {:.4} deg into the sign",
                info.rashi.name(),
                info.rashi.english_name(),
                info.degrees_in_rashi
            );
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} pada {}, {:.4} deg into the nakshatra",
                info.nakshatra.name(),
                info.pada,
                info.degrees_in_nakshatra
            );
        }
        Commands::Varga { lon, divisions } => {
            let sign = varga_sign(lon, divisions);
            let rashi = jataka_base::Rashi::from_index(sign);
            println!(
                "D{divisions} sign: {} ({})",
                rashi.name(),
                rashi.english_name()
            );
        }
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            asc,
            ayanamsha,
            bodies,
            vargas,
        } => {
            let birth = match BirthInput::from_strings(&date, &time, lat, lon) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("invalid input: {e}");
                    std::process::exit(2);
                }
            };

            let mut requested = Vec::with_capacity(vargas.len());
            for label in &vargas {
                match Varga::from_label(label) {
                    Some(v) => requested.push(v),
                    None => {
                        eprintln!("unknown varga label: {label}");
                        std::process::exit(2);
                    }
                }
            }

            if bodies.len() != 8 {
                eprintln!("--bodies expects 8 longitudes, got {}", bodies.len());
                std::process::exit(2);
            }
            let mut body_longitudes_deg = [0.0f64; 8];
            body_longitudes_deg.copy_from_slice(&bodies);
            let source = FixedEphemeris::new(EphemerisSample {
                tropical_ascendant_deg: asc,
                ayanamsha_deg: ayanamsha,
                body_longitudes_deg,
            });

            match kundali_for_birth(&source, &birth, &requested) {
                Ok(result) => {
                    let json = serde_json::to_string_pretty(&result)
                        .expect("chart result serializes");
                    println!("{json}");
                }
                Err(e) => {
                    eprintln!("chart assembly failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
