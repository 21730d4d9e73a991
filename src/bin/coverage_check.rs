//! CLI tool for running test point checks on a normalized board snapshot
//!
//! Usage:
//!   cargo run --release --bin coverage_check -- --tables <board.json> --check <name> [options]
//!
//! Checks:
//!   tp-pad            Test points overlapping component pads
//!   tp-component      Test points covered by component placement bounds
//!   tp-connector-net  Test points sharing a net with a connector
//!   tp-pin-net        Test points sharing a net with a connector pin
//!   tp-hole-net       Test points sharing a net with a mounting hole
//!   tp-net-pins       Test points paired with every component pin on their net
//!
//! Results are printed to stdout as JSON; logs go to stderr (`RUST_LOG`).

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use testability::{
    check_test_point_component_coverage, check_test_point_pad_overlaps, join_by_net, AnalysisConfig,
    BoardTables, MatchStrategy, NetMember,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Check {
    TpPad,
    TpComponent,
    TpConnectorNet,
    TpPinNet,
    TpHoleNet,
    TpNetPins,
}

#[derive(Parser, Debug)]
#[command(name = "coverage_check", about = "Test point placement checks on normalized PCB tables")]
struct Args {
    /// Board snapshot (JSON) with the normalized tables
    #[arg(long)]
    tables: PathBuf,

    /// Analysis configuration overrides (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    check: Check,

    /// Compare every pair instead of pruning with the spatial index
    #[arg(long)]
    naive: bool,

    /// Print only the number of result rows
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if args.naive {
        config.strategy = MatchStrategy::Naive;
    }

    let tables = BoardTables::from_json_file(&args.tables)
        .with_context(|| format!("failed to load tables {}", args.tables.display()))?;

    let (rows, output) = match args.check {
        Check::TpPad => {
            let overlaps = check_test_point_pad_overlaps(&tables.test_points, &tables.pads, &config);
            (overlaps.len(), serde_json::to_string_pretty(&overlaps)?)
        }
        Check::TpComponent => {
            let components = tables.components_with_outlines();
            let overlaps = check_test_point_component_coverage(&tables.test_points, &components, &config);
            (overlaps.len(), serde_json::to_string_pretty(&overlaps)?)
        }
        Check::TpConnectorNet => net_join(&tables, &tables.connectors, &config)?,
        Check::TpPinNet => net_join(&tables, &tables.connector_pins, &config)?,
        Check::TpHoleNet => net_join(&tables, &tables.mounting_holes, &config)?,
        Check::TpNetPins => net_join(&tables, &tables.net_pins, &config)?,
    };

    if args.summary {
        println!("{:?}: {} rows", args.check, rows);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn net_join(tables: &BoardTables, right: &[NetMember], config: &AnalysisConfig) -> anyhow::Result<(usize, String)> {
    let matches = join_by_net(&tables.test_point_members(), right, &config.label_separator);
    Ok((matches.len(), serde_json::to_string_pretty(&matches)?))
}
