//! Command-line harness for the Winter CMS report suite.
//!
//! Runs one report by name and pretty-prints its JSON, or every report in
//! catalog order when no name is given. Useful for exercising the report
//! suite without an MCP client attached.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use winter_discovery::{ReportKind, Reporter, REPORT_CATALOG};

#[derive(Parser)]
#[command(
    name = "winter-inspect",
    version,
    about = "Inspect a Winter CMS project's structure reports"
)]
struct Cli {
    /// Report to run; all reports when omitted.
    report: Option<String>,

    /// Project root to introspect.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Inspecting project at {}", cli.root.display());
    let reporter = Reporter::detect(&cli.root);

    match &cli.report {
        Some(name) => {
            let Some(kind) = ReportKind::from_name(name) else {
                bail!(
                    "unknown report '{name}'; available: {}",
                    report_names().join(", ")
                );
            };
            print_report(&reporter, kind)
        }
        None => {
            println!("Available reports: {}", report_names().join(", "));
            for descriptor in REPORT_CATALOG {
                println!();
                println!("=== {} ===", descriptor.name);
                print_report(&reporter, descriptor.kind)?;
            }
            Ok(())
        }
    }
}

fn report_names() -> Vec<&'static str> {
    REPORT_CATALOG.iter().map(|descriptor| descriptor.name).collect()
}

fn print_report(reporter: &Reporter, kind: ReportKind) -> Result<()> {
    let report = reporter.run(kind);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
