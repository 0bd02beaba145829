//! chpdis - chip disassembler
//!
//! ```bash
//! chpdis counter.csv                # Listing with help card and directions
//! chpdis --format chp memory.chp    # Force raw CHP decoding
//! chpdis --json --stats adder.csv   # Decoded tree as JSON, counts on stderr
//! ```

use anyhow::{Context, Result};
use chp_core::{Circuit, DecodeOptions, FormatHint, decode_with};
use chp_format::{IndentStyle, RenderConfig, render_with_config};
use clap::{Parser, ValueEnum};
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chpdis")]
#[command(author, version, about = "Disassemble CHP/CSV chip files", long_about = None)]
struct Cli {
    /// Chip file to disassemble
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Container format (auto picks CSV for files of 1024 bytes or more)
    #[arg(short, long, value_enum, default_value = "auto", env = "CHPDIS_FORMAT")]
    format: FormatArg,

    /// Name for the top-level chip
    #[arg(short, long)]
    name: Option<String>,

    /// Number of spaces per indentation level
    #[arg(long, default_value = "4", env = "CHPDIS_INDENT")]
    indent: usize,

    /// Indent with tabs
    #[arg(long)]
    tabs: bool,

    /// Two-space indent, no help card
    #[arg(long)]
    compact: bool,

    /// Omit the help card
    #[arg(long)]
    no_help: bool,

    /// Print the decoded circuit as JSON
    #[arg(long)]
    json: bool,

    /// Print part counts to stderr
    #[arg(long)]
    stats: bool,

    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum FormatArg {
    Auto,
    Chp,
    Csv,
}

impl From<FormatArg> for FormatHint {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => FormatHint::Auto,
            FormatArg::Chp => FormatHint::Chp,
            FormatArg::Csv => FormatHint::Csv,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok((circuit, output)) => {
            print!("{}", output);
            if cli.stats {
                eprint!("{}", stats_report(&circuit));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Decode the file and produce stdout text (listing or JSON)
fn run(cli: &Cli) -> Result<(Circuit, String)> {
    let bytes = fs::read(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;
    info!(file = %cli.file.display(), len = bytes.len(), "read chip file");

    let circuit = decode_with(&bytes, &decode_options(cli))
        .with_context(|| format!("Failed to decode file: {}", cli.file.display()))?;

    let output = if cli.json {
        let mut json =
            serde_json::to_string_pretty(&circuit).context("Failed to serialize circuit")?;
        json.push('\n');
        json
    } else {
        render_with_config(&circuit, &build_config(cli))
    };
    Ok((circuit, output))
}

fn decode_options(cli: &Cli) -> DecodeOptions {
    let options = DecodeOptions::default().with_format(cli.format.into());
    match &cli.name {
        Some(name) => options.with_name(name.clone()),
        None => options,
    }
}

fn build_config(cli: &Cli) -> RenderConfig {
    // Start with preset
    let mut config = if cli.compact {
        RenderConfig::compact()
    } else {
        RenderConfig {
            indent_style: IndentStyle::Spaces(cli.indent),
            ..Default::default()
        }
    };

    if cli.tabs {
        config.indent_style = IndentStyle::Tabs;
    }

    if cli.no_help {
        config.show_help = false;
    }

    config
}

fn stats_report(circuit: &Circuit) -> String {
    let stats = circuit.chip.stats();
    let mut report = String::from("\n📊 Statistics:\n");
    report.push_str(&format!("  Chips: {}\n", stats.chips));
    report.push_str(&format!(
        "  Gates: {} (AND {}, OR {}, XOR {}, NOT {})\n",
        stats.gates(),
        stats.and,
        stats.or,
        stats.xor,
        stats.not
    ));
    report.push_str(&format!("  Flip-flops: {}\n", stats.flip_flops));
    report.push_str(&format!("  Nodes: {}\n", stats.nodes));
    report.push_str(&format!("  Pins: {}\n", circuit.pins.len()));
    report.push_str(&format!("  Bytes: {}\n", stats.bytes));
    report
}
