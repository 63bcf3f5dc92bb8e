use std::path::{Path, PathBuf};

use bazi_base::{
    BirthInstant, ChartConfig, DayBoundary, FourPillars, PillarCalculator, YearRangePolicy,
    is_supported_year, solar_terms_for_year,
};
use bazi_report::{Gender, OverridePolicy, Report, ReportRequest, SYSTEM_INSTRUCTION};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "Four-pillar (bazi) chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Birth date/hour plus calculation options shared by several commands.
#[derive(Args)]
struct BirthArgs {
    /// Civil birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth hour, 0-23
    #[arg(long)]
    hour: u32,
    /// Start the day at midnight instead of 23:00
    #[arg(long)]
    midnight: bool,
    /// Allow years outside 1900-2099 (solar terms are extrapolated)
    #[arg(long)]
    extrapolate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    #[value(alias = "m", alias = "男")]
    Male,
    #[value(alias = "f", alias = "女")]
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the four pillars for a birth date and hour
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Include bazi year, month term and day offset
        #[arg(long)]
        verbose: bool,
    },
    /// List the estimated solar-term dates of a year
    SolarTerms {
        /// Civil year
        #[arg(long)]
        year: i32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the report-service request (JSON payload and prompt)
    Request {
        #[command(flatten)]
        birth: BirthArgs,
        /// Subject gender
        #[arg(long, value_enum, ignore_case = true)]
        gender: GenderArg,
        /// Pretty-print the JSON payload
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a saved report-service response against the local chart
    Report {
        /// Path to the saved response text
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        birth: BirthArgs,
        /// Display the service's pillars when they differ
        #[arg(long)]
        accept_service: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_birth(args: &BirthArgs) -> BirthInstant {
    BirthInstant::parse(&args.date, args.hour).unwrap_or_else(|e| fail(e))
}

fn calculator(args: &BirthArgs) -> PillarCalculator {
    let day_boundary = if args.midnight {
        DayBoundary::Midnight
    } else {
        DayBoundary::LateZi
    };
    let year_range = if args.extrapolate {
        YearRangePolicy::Extrapolate
    } else {
        YearRangePolicy::Strict
    };
    PillarCalculator::new(ChartConfig::new(day_boundary, year_range))
}

fn read_text(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| fail(format!("JSON error: {e}")))
}

fn print_pillars(pillars: &FourPillars) {
    for (slot, pillar) in pillars.iter() {
        println!(
            "{}: {} ({} {})",
            slot.label(),
            pillar,
            pillar.stem.name(),
            pillar.branch.name()
        );
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars {
            birth,
            json,
            verbose,
        } => {
            let instant = require_birth(&birth);
            let chart = calculator(&birth)
                .chart(&instant)
                .unwrap_or_else(|e| fail(format!("Error: {e}")));
            if json {
                if verbose {
                    println!("{}", to_json(&chart));
                } else {
                    println!("{}", to_json(&chart.pillars));
                }
                return;
            }
            println!("{}", chart.pillars);
            if verbose {
                print_pillars(&chart.pillars);
                println!("  Bazi year:   {}", chart.bazi_year);
                println!(
                    "  Month term:  {} ({}) on {}",
                    chart.month_term.hanzi(),
                    chart.month_term.name(),
                    chart.month_start
                );
                println!("  Day counted: {}", chart.effective_date);
                println!("  Day offset:  {} from 2001-01-01", chart.day_offset);
            }
        }

        Commands::SolarTerms { year, json } => {
            if !is_supported_year(year) {
                eprintln!("Warning: {year} is outside 1900-2099, estimates are extrapolated");
            }
            let terms = solar_terms_for_year(year).unwrap_or_else(|e| fail(format!("Error: {e}")));
            if json {
                let rows: Vec<_> = terms
                    .iter()
                    .map(|(term, date)| {
                        json!({
                            "index": term.index(),
                            "name": term.name(),
                            "hanzi": term.hanzi(),
                            "date": date,
                        })
                    })
                    .collect();
                println!("{}", to_json(&rows));
                return;
            }
            for (term, date) in &terms {
                let marker = if term.is_major() { "*" } else { " " };
                println!(
                    "{marker} {:>2} {} {:<12} {}",
                    term.index(),
                    term.hanzi(),
                    term.name(),
                    date
                );
            }
        }

        Commands::Request {
            birth,
            gender,
            pretty,
        } => {
            let instant = require_birth(&birth);
            let request = ReportRequest::compute(&instant, gender.into(), &calculator(&birth))
                .unwrap_or_else(|e| fail(format!("Error: {e}")));
            let payload = if pretty {
                request.to_json_pretty()
            } else {
                request.to_json()
            }
            .unwrap_or_else(|e| fail(format!("Error: {e}")));
            println!("{payload}");
            println!();
            println!("System: {SYSTEM_INSTRUCTION}");
            println!("Prompt: {}", request.prompt());
        }

        Commands::Report {
            file,
            birth,
            accept_service,
            json,
        } => {
            let instant = require_birth(&birth);
            let computed = calculator(&birth)
                .calculate(&instant)
                .unwrap_or_else(|e| fail(format!("Error: {e}")));
            let report =
                Report::from_json(&read_text(&file)).unwrap_or_else(|e| fail(format!("Error: {e}")));
            let policy = if accept_service {
                OverridePolicy::AcceptService
            } else {
                OverridePolicy::KeepComputed
            };
            let reconciled = report.reconcile(&computed, policy);
            info!(
                discrepancies = reconciled.discrepancies.len(),
                ?policy,
                "reconciled report"
            );

            if json {
                println!(
                    "{}",
                    to_json(&json!({
                        "pillars": reconciled.pillars,
                        "discrepancies": reconciled.discrepancies,
                        "analysis": report.analysis,
                    }))
                );
                return;
            }

            print_pillars(&reconciled.pillars);
            for d in &reconciled.discrepancies {
                println!(
                    "  Note: service gave {} for {}, computed {}",
                    d.service,
                    d.slot.label(),
                    d.computed
                );
            }
            for (title, text) in report.analysis.sections() {
                println!();
                println!("{title}");
                println!("{text}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_gender(args: &[&str]) -> Result<GenderArg, clap::Error> {
        let base = ["bazi", "request", "--date", "2008-08-08", "--hour", "20"];
        let cli = Cli::try_parse_from(base.iter().chain(args).copied())?;
        match cli.command {
            Commands::Request { gender, .. } => Ok(gender),
            _ => unreachable!(),
        }
    }

    #[test]
    fn gender_choices() {
        assert_eq!(request_gender(&["--gender", "male"]).unwrap(), GenderArg::Male);
        assert_eq!(request_gender(&["--gender", "Female"]).unwrap(), GenderArg::Female);
        assert_eq!(request_gender(&["--gender", "女"]).unwrap(), GenderArg::Female);
        assert_eq!(request_gender(&["--gender", "m"]).unwrap(), GenderArg::Male);
    }

    #[test]
    fn unknown_gender_rejected_by_clap() {
        let err = request_gender(&["--gender", "other"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn gender_maps_to_request_gender() {
        assert_eq!(Gender::from(GenderArg::Male), Gender::Male);
        assert_eq!(Gender::from(GenderArg::Female), Gender::Female);
    }
}
