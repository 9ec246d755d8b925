//! Divider - Regulator Resistor Calculator
//!
//! Finds standard resistor pairs that set an adjustable regulator's output
//! closest to a desired voltage.
//!
//! # Usage
//!
//! ```bash
//! divider 3.3 --regulator lm317
//! echo 12 | divider --regulator ltc4020 --series e96 --display 5
//! ```

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use divider_core::{
    error::{DividerError, Result},
    input::{parse_voltage, read_voltage},
    regulator::{RegulatorConfig, LM317, LTC4020},
    report::write_report,
    series::{ResistorSeries, E24, E96},
    SearchConfig, DEFAULT_DISPLAY_COUNT, DEFAULT_TOP_N,
};

/// Supported regulator parts
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Regulator {
    /// LM317, Vout = 1.25 * (1 + R2/R1)
    Lm317,
    /// LTC4020, Vout = 2.5 * (1 + RFB1/RFB2)
    Ltc4020,
}

impl Regulator {
    fn config(self) -> &'static RegulatorConfig {
        match self {
            Regulator::Lm317 => &LM317,
            Regulator::Ltc4020 => &LTC4020,
        }
    }
}

/// Standard resistor series
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Series {
    E24,
    E96,
}

impl Series {
    fn values(self) -> &'static ResistorSeries {
        match self {
            Series::E24 => &E24,
            Series::E96 => &E96,
        }
    }
}

/// Regulator resistor divider calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Desired output voltage in volts (prompted for when omitted)
    #[arg(value_name = "VOLTAGE", allow_hyphen_values = true)]
    voltage: Option<String>,

    /// Regulator whose formula and resistor range to use
    #[arg(short, long, value_enum, default_value_t = Regulator::Lm317)]
    regulator: Regulator,

    /// Resistor series to search, one report section each
    #[arg(short, long, value_enum, num_args = 1.., default_values_t = [Series::E24, Series::E96])]
    series: Vec<Series>,

    /// Number of candidates kept by the search
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Number of candidates printed per series
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_COUNT)]
    display: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let desired_voltage = match args.voltage.as_deref() {
        Some(text) => parse_voltage(text)?,
        None => prompt_voltage()?,
    };

    let regulator = args.regulator.config();
    let series: Vec<_> = args.series.iter().map(|s| s.values()).collect();
    let config = SearchConfig::new()
        .with_top_n(args.top_n)
        .with_display_count(args.display);

    info!(%regulator, desired_voltage, ?config, "starting search");

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, regulator, &series, desired_voltage, &config)?;

    Ok(())
}

/// Ask for the desired voltage on stdin.
fn prompt_voltage() -> Result<f64> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter desired voltage: ")
        .and_then(|_| stdout.flush())
        .map_err(|source| DividerError::OutputWriteError { source })?;

    read_voltage(&mut io::stdin().lock())
}
