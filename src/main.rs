use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use las_reader::LasFile;
use las_reader::cli::{Args, OutputFormat, Show};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();

    setup_logging(&args);

    if let Err(error) = run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), error);
        process::exit(1);
    }
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

fn run(args: &Args) -> Result<()> {
    let mut las = LasFile::with_config(args.reader_config());
    las.read(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    match args.show {
        Show::Index => {
            for value in las.index() {
                println!("{}", value);
            }
        }
        Show::Data => {
            for (index, row) in las.index().iter().zip(las.data()) {
                let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("{} {}", index, values.join(" "));
            }
        }
        Show::Curves => {
            for curve in las.curves() {
                println!(
                    "{:<10} {:<10} {}",
                    curve.mnemonic, curve.unit, curve.description
                );
            }
        }
        Show::Summary => match args.format {
            OutputFormat::Human => print_summary(&las),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&SummaryReport::from(&las))
                    .context("Failed to serialize summary")?;
                println!("{}", json);
            }
        },
    }

    Ok(())
}

/// Summary plus the diagnostics themselves, for JSON output
#[derive(serde::Serialize)]
struct SummaryReport<'a> {
    summary: las_reader::LasSummary,
    stats: las_reader::ReadStats,
    diagnostics: &'a [las_reader::Diagnostic],
}

impl<'a> From<&'a LasFile> for SummaryReport<'a> {
    fn from(las: &'a LasFile) -> Self {
        Self {
            summary: las.summary(),
            stats: las.stats(),
            diagnostics: las.diagnostics(),
        }
    }
}

fn print_summary(las: &LasFile) {
    let summary = las.summary();

    println!("{}", "LAS file summary".bold());
    println!("  Version:  {} (wrap: {})", summary.version, summary.wrap);
    println!("  Well:     {}", summary.well);
    println!("  Company:  {}", summary.company);
    println!("  Null:     {}", summary.null_value);
    println!("  Curves:   {}", summary.curves.join(", "));
    println!("  Params:   {}", summary.parameters);

    match (summary.first_index, summary.last_index) {
        (Some(first), Some(last)) => {
            let step = summary
                .step
                .map(|s| s.to_string())
                .unwrap_or_else(|| "irregular".to_string());
            println!(
                "  Rows:     {} ({} to {}, step {})",
                summary.rows, first, last, step
            );
        }
        _ => println!("  Rows:     0"),
    }

    if las.diagnostics().is_empty() {
        println!("{}", "No issues found".green());
    } else {
        println!(
            "{}",
            format!("{} issue(s):", las.diagnostics().len()).yellow()
        );
        for diagnostic in las.diagnostics() {
            println!("  - {}", diagnostic);
        }
    }
}
