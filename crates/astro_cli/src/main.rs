use std::path::PathBuf;

use astro_chart::{ChartRequest, Diagnostic, body_position, compute_chart, format_longitude};
use astro_config::ChartConfig;
use astro_core::{Body, CalcFlags};
use astro_frames::deg_to_dms;
use astro_houses::{HouseInput, HouseSystem, houses_for};
use astro_time::{calendar_from_jd, delta_t_seconds, is_gregorian, julian_day};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astro", about = "Planetary positions and house cusps")]
struct Cli {
    /// Chart settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: angles, cusps, positions and houses
    Chart {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UT time (hh:mm or hh:mm:ss)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// House system name, overrides the config
        #[arg(long)]
        system: Option<String>,
    },
    /// Julian Day of a date, or the date of a Julian Day
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "jd")]
        date: Option<String>,
        /// UT time (hh:mm or hh:mm:ss)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Julian Day to convert back to a calendar date
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Angles and cusps of one house system
    Houses {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UT time (hh:mm or hh:mm:ss)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// House system name
        #[arg(long, default_value = "placidus")]
        system: String,
        /// Sidereal zodiac
        #[arg(long)]
        sidereal: bool,
    },
    /// Position of one body
    Position {
        /// Body name (sun, moon, mercury, ..., mean_node, lilith, chiron, true_node)
        body: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UT time (hh:mm or hh:mm:ss)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Heliocentric position
        #[arg(long)]
        helio: bool,
        /// Geometric position, without aberration
        #[arg(long)]
        true_position: bool,
        /// Omit nutation
        #[arg(long)]
        no_nutation: bool,
    },
    /// Convert decimal degrees to DMS and zodiac notation
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Delta-T (TT − UT) for a date
    DeltaT {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn parse_date(s: &str) -> Result<(i32, i32, i32), String> {
    // A leading '-' is a negative (astronomical) year.
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: i32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: i32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("invalid date: {s}"));
    }
    Ok((day, month, sign * year))
}

fn parse_time(s: &str) -> Result<f64, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("expected hh:mm or hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = match parts.get(2) {
        Some(p) => p.parse().map_err(|e| format!("{e}"))?,
        None => 0.0,
    };
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(format!("invalid time: {s}"));
    }
    Ok(hour as f64 + minute as f64 / 60.0 + second / 3600.0)
}

fn or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn init_logging(verbose: bool) {
    let base = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> ChartConfig {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            or_exit(ChartConfig::load(p))
        }
        None => ChartConfig::default(),
    }
}

fn house_system(name: &str) -> HouseSystem {
    HouseSystem::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown house system: {name}");
        let names: Vec<&str> = HouseSystem::all().iter().map(|s| s.name()).collect();
        eprintln!("Valid: {}", names.join(", "));
        std::process::exit(1);
    })
}

fn print_angles(asc: f64, mc: f64, east_point: f64, vertex: f64) {
    println!("ASC     {}", format_longitude(asc));
    println!("MC      {}", format_longitude(mc));
    println!("EP      {}", format_longitude(east_point));
    println!("Vertex  {}", format_longitude(vertex));
}

fn print_cusps(cusps: &[f64; 12]) {
    for (i, c) in cusps.iter().enumerate() {
        println!("  {:>2}  {:>9.4}  {}", i + 1, c, format_longitude(*c));
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            system,
        } => {
            let mut config = load_config(cli.config.as_ref());
            if let Some(name) = system {
                config.house_system = name;
            }
            let date = or_exit(parse_date(&date));
            let hour = or_exit(parse_time(&time));
            let location = match (lat, lon) {
                (Some(lat), Some(lon)) => Some((lat, lon)),
                (None, None) => None,
                _ => {
                    eprintln!("--lat and --lon must be given together");
                    std::process::exit(1);
                }
            };
            let request = or_exit(ChartRequest::from_config(&config, date, hour, location));
            let chart = or_exit(compute_chart(&request));

            println!("JD (UT)   {:.6}", chart.jd_ut);
            println!("JD (TT)   {:.6}  (ΔT {:.1} s)", chart.jd_et, chart.delta_t);
            println!(
                "Obliquity {:.6} (houses {:.6})  Nutation {:.2}\"",
                chart.true_obliquity,
                chart.geometry.house_obliquity,
                chart.nutation * 3600.0
            );
            println!("Houses    {}", chart.house_system.name());
            print_angles(
                chart.geometry.asc,
                chart.geometry.mc,
                chart.geometry.east_point,
                chart.geometry.vertex,
            );
            println!("Cusps:");
            print_cusps(&chart.geometry.cusps);
            println!("Bodies:");
            for (body, pos) in chart.bodies() {
                let house = chart.placement(body).map_or(0, |p| p.house);
                println!(
                    "  {:<10} {}  {:>8.4} lat  {:>+9.4}/d  house {:>2}{}",
                    body.name(),
                    format_longitude(pos.longitude),
                    pos.latitude,
                    pos.speed_longitude,
                    house,
                    if pos.is_retrograde() { "  R" } else { "" }
                );
            }
            let c = &chart.sign_counts;
            println!(
                "Elements: fire {} earth {} air {} water {}",
                c.fire, c.earth, c.air, c.water
            );
            println!(
                "Modes: cardinal {} fixed {} mutable {}; masculine {} feminine {}",
                c.cardinal, c.fixed, c.mutable, c.masculine, c.feminine
            );
            println!("Aspects:");
            for a in &chart.aspects {
                println!(
                    "  {:<10} {:<13} {:<10} orb {:>5.2}  {}",
                    a.first.name(),
                    a.kind.name(),
                    a.second.name(),
                    a.orb,
                    if a.applying { "applying" } else { "separating" }
                );
            }
            for d in &chart.diagnostics {
                match d {
                    Diagnostic::HouseFallback { requested } => {
                        println!("note: {} not available, used placidus", requested.name())
                    }
                    Diagnostic::PolarLatitude { latitude } => {
                        println!("note: latitude {latitude} is inside the polar circle")
                    }
                    Diagnostic::BodySkipped { body, error } => {
                        println!("note: {} skipped: {error}", body.name())
                    }
                }
            }
        }

        Commands::Jd { date, time, jd } => match (date, jd) {
            (Some(date), _) => {
                let (day, month, year) = or_exit(parse_date(&date));
                let hour = or_exit(parse_time(&time));
                let jd = julian_day(day, month, year, hour, is_gregorian(day, month, year));
                println!("{jd:.6}");
            }
            (None, Some(jd)) => {
                let d = calendar_from_jd(jd);
                let dms = deg_to_dms(d.hour);
                println!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:04.1}",
                    d.year, d.month, d.day, dms.degrees, dms.minutes, dms.seconds
                );
            }
            (None, None) => {
                eprintln!("give --date or --jd");
                std::process::exit(1);
            }
        },

        Commands::Houses {
            date,
            time,
            lat,
            lon,
            system,
            sidereal,
        } => {
            let (day, month, year) = or_exit(parse_date(&date));
            let hour = or_exit(parse_time(&time));
            or_exit(astro_config::validate_location(lat, lon));
            let input = HouseInput {
                day,
                month,
                year,
                hour,
                latitude: lat,
                longitude: lon,
                sidereal,
            };
            let out = houses_for(house_system(&system), &input);
            let g = &out.geometry;
            println!("System    {}", out.system.name());
            println!("Sid. time {:.6} h  RAMC {:.6}", g.sidereal_time, g.ramc);
            print_angles(g.asc, g.mc, g.east_point, g.vertex);
            print_cusps(&g.cusps);
            if let Some(requested) = out.fallback {
                println!("note: {} not available, used placidus", requested.name());
            }
            if out.polar {
                println!("note: latitude {lat} is inside the polar circle");
            }
        }

        Commands::Position {
            body,
            date,
            time,
            helio,
            true_position,
            no_nutation,
        } => {
            let Some(b) = Body::from_name(&body) else {
                eprintln!("Unknown body: {body}");
                let names: Vec<&str> = Body::ALL.iter().map(|b| b.name()).collect();
                eprintln!("Valid: {}", names.join(", "));
                std::process::exit(1);
            };
            let date = or_exit(parse_date(&date));
            let hour = or_exit(parse_time(&time));
            let flags = CalcFlags {
                heliocentric: helio,
                true_position,
                no_nutation,
                speed: true,
            };
            let pos = or_exit(body_position(b, date, hour, flags));
            println!("Longitude {:.6}  {}", pos.longitude, format_longitude(pos.longitude));
            println!("Latitude  {:.6}", pos.latitude);
            println!("Distance  {:.8} AU", pos.distance);
            println!(
                "Speed     {:+.6} deg/day{}",
                pos.speed_longitude,
                if pos.is_retrograde() { " (retrograde)" } else { "" }
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            let sign = if dms.negative { "-" } else { "" };
            println!(
                "{sign}{}° {}' {:.2}\"  {}",
                dms.degrees,
                dms.minutes,
                dms.seconds,
                format_longitude(deg)
            );
        }

        Commands::DeltaT { date } => {
            let (day, month, year) = or_exit(parse_date(&date));
            let jd = julian_day(day, month, year, 0.0, is_gregorian(day, month, year));
            println!("{:.2} s", delta_t_seconds(jd));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(parse_date("2000-01-01").unwrap(), (1, 1, 2000));
        assert_eq!(parse_date("-0500-03-21").unwrap(), (21, 3, -500));
        assert!(parse_date("2000-13-01").is_err());
        assert!(parse_date("2000/01/01").is_err());
    }

    #[test]
    fn times() {
        assert_eq!(parse_time("12:00").unwrap(), 12.0);
        assert!((parse_time("06:30:36").unwrap() - 6.51).abs() < 1e-12);
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from([
            "astro", "chart", "--date", "2000-01-01", "--lat", "52.52", "--lon", "-13.4",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Chart { lon: Some(l), .. } if l == -13.4));

        let cli = Cli::try_parse_from(["astro", "-v", "dms", "--", "-12.5"]).unwrap();
        assert!(cli.verbose);
    }
}
