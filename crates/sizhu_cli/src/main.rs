use clap::{Parser, Subcommand, ValueEnum};
use sizhu_chart::{BirthRecord, compute_chart};
use sizhu_core::solar_term::CST_OFFSET_DAYS;
use sizhu_core::{SolarTerm, four_pillars, term_instant_ut, try_four_pillars};
use sizhu_luck::{DEFAULT_PERIODS, Direction, Sex, luck_sequence, map_range};
use sizhu_time::solar::solar_correction;
use sizhu_time::{CivilDateTime, true_solar_time};

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-pillar (BaZi) chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(s: SexArg) -> Sex {
        match s {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth moment
    Pillars {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Longitude in decimal degrees, east-positive
        #[arg(long)]
        lon: Option<f64>,
        /// Declared UTC offset in hours
        #[arg(long)]
        utc_offset: Option<f64>,
    },
    /// Big-Luck decade periods for a birth moment
    Luck {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Declared sex
        #[arg(long, value_enum)]
        sex: SexArg,
        /// Longitude in decimal degrees, east-positive
        #[arg(long)]
        lon: Option<f64>,
        /// Declared UTC offset in hours
        #[arg(long)]
        utc_offset: Option<f64>,
        /// Number of decade periods
        #[arg(long, default_value = "12")]
        periods: usize,
    },
    /// Yearly sexagenary codes for an inclusive year range
    Flow {
        /// First year
        #[arg(long)]
        start: i32,
        /// Last year
        #[arg(long)]
        end: i32,
    },
    /// True-solar-time correction for a declared instant
    SolarTime {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long)]
        time: String,
        /// Longitude in decimal degrees, east-positive
        #[arg(long)]
        lon: f64,
        /// Declared UTC offset in hours
        #[arg(long)]
        utc_offset: f64,
    },
    /// Solar-term instant for a year (on the Chinese civil clock)
    Term {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Term name, e.g. LiChun, DongZhi
        #[arg(long)]
        term: String,
    },
    /// Full chart bundle: pillars, luck periods, and yearly flow
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Declared sex
        #[arg(long, value_enum)]
        sex: SexArg,
        /// Longitude in decimal degrees, east-positive
        #[arg(long)]
        lon: Option<f64>,
        /// Declared UTC offset in hours
        #[arg(long)]
        utc_offset: Option<f64>,
        /// First flow year (defaults to the birth year)
        #[arg(long)]
        start: Option<i32>,
        /// Last flow year (defaults to start + 60)
        #[arg(long)]
        end: Option<i32>,
        /// Emit the bundle as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse the raw date/time strings or exit with a message.
fn require_civil(date: &str, time: &str) -> CivilDateTime {
    match CivilDateTime::from_strs(date, time) {
        Ok(civil) => civil,
        Err(e) => {
            eprintln!("Invalid birth moment: {e}");
            std::process::exit(1);
        }
    }
}

/// Look a term name up or exit listing the valid names.
fn require_term(name: &str) -> SolarTerm {
    match SolarTerm::from_name(name) {
        Some(term) => term,
        None => {
            eprintln!("Invalid term name: {name}");
            let names: Vec<_> = sizhu_core::ALL_TERMS.iter().map(|t| t.name()).collect();
            eprintln!("Valid: {}", names.join(", "));
            std::process::exit(1);
        }
    }
}

fn corrected(civil: &CivilDateTime, lon: Option<f64>, utc_offset: Option<f64>) -> CivilDateTime {
    match (lon, utc_offset) {
        (Some(lon), Some(offset)) => true_solar_time(civil, lon, offset),
        _ => *civil,
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars {
            date,
            time,
            lon,
            utc_offset,
        } => {
            let civil = require_civil(&date, &time);
            let instant = corrected(&civil, lon, utc_offset);
            match try_four_pillars(&instant) {
                Ok(p) => {
                    println!("Corrected: {instant}");
                    println!("Year:  {}", p.year);
                    println!("Month: {}", p.month);
                    println!("Day:   {}", p.day);
                    println!("Hour:  {}", p.hour);
                    if let Some(dm) = p.day_master {
                        println!("Day master: {dm}");
                    }
                }
                Err(e) => {
                    eprintln!("Cannot compute pillars: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Luck {
            date,
            time,
            sex,
            lon,
            utc_offset,
            periods,
        } => {
            let civil = require_civil(&date, &time);
            let instant = corrected(&civil, lon, utc_offset);
            let pillars = four_pillars(&instant);
            match luck_sequence(&pillars, sex.into(), &instant, periods) {
                Ok(seq) => {
                    let dir = match seq.direction {
                        Direction::Forward => "forward",
                        Direction::Backward => "backward",
                    };
                    println!("Direction: {dir}");
                    println!(
                        "Onset: {}y {}m {}d after birth (first period at age {})",
                        seq.onset.years, seq.onset.months, seq.onset.days, seq.start_age
                    );
                    for p in &seq.periods {
                        println!("age {:>3}: {}", p.start_age, p.gan_zhi);
                    }
                }
                Err(e) => {
                    eprintln!("Cannot derive luck periods: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Flow { start, end } => match map_range(start, end) {
            Ok(flow) => {
                for f in flow {
                    println!("{}: {}", f.year, f.gan_zhi);
                }
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::SolarTime {
            date,
            time,
            lon,
            utc_offset,
        } => {
            let civil = require_civil(&date, &time);
            let correction = solar_correction(&civil, lon, utc_offset);
            println!("Declared:  {civil}");
            println!("Equation of time: {:+.2} min", correction.eot_minutes);
            println!("Longitude offset: {:+.2} min", correction.longitude_minutes);
            println!("Corrected: {}", true_solar_time(&civil, lon, utc_offset));
        }

        Commands::Term { year, term } => {
            let term = require_term(&term);
            let jd_ut = term_instant_ut(year, term);
            let instant = CivilDateTime::from_jd(jd_ut + CST_OFFSET_DAYS);
            println!("{} {}: {} (UTC+8)", year, term.name(), instant);
        }

        Commands::Chart {
            date,
            time,
            sex,
            lon,
            utc_offset,
            start,
            end,
            json,
        } => {
            let civil = require_civil(&date, &time);
            let start = start.unwrap_or(civil.year);
            let end = end.unwrap_or(start + 60);
            let record = BirthRecord {
                date,
                time,
                longitude: lon,
                utc_offset_hours: utc_offset,
                sex: sex.into(),
            };
            match compute_chart(&record, (start, end), DEFAULT_PERIODS) {
                Ok(bundle) => {
                    if json {
                        match serde_json::to_string_pretty(&bundle) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("Serialization failed: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        println!("Corrected: {}", bundle.corrected);
                        println!(
                            "Pillars: {} | {} | {} | {}",
                            bundle.pillars.year,
                            bundle.pillars.month,
                            bundle.pillars.day,
                            bundle.pillars.hour
                        );
                        if let Some(dm) = bundle.pillars.day_master {
                            println!("Day master: {dm}");
                        }
                        println!("First luck period at age {}", bundle.luck.start_age);
                        for p in &bundle.luck.periods {
                            println!("age {:>3}: {}", p.start_age, p.gan_zhi);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Cannot compute chart: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
