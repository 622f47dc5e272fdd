use anyhow::{Context, Result};
use clap::Parser;

mod community;
mod config;
mod error;
mod export;
mod graph;
mod layout;
mod metrics;
mod pairs;
mod pipeline;
mod tokenize;

use config::{LayoutAlgorithm, NetworkConfig, ReductionStrategy};

#[derive(Parser, Debug)]
#[clap(
    name = "cooccur-net",
    about = "Co-occurrence network construction and analysis for bibliographic data"
)]
struct Cli {
    /// Path to a JSON array of column cells (strings or nulls)
    #[clap(long)]
    input: String,

    /// Write the payload here instead of stdout
    #[clap(long)]
    output: Option<String>,

    /// Minimum co-occurrence count for an edge to be kept
    #[clap(long, default_value = "2")]
    min_weight: u32,

    /// Node cap before size reduction triggers
    #[clap(long, default_value = "50")]
    max_nodes: usize,

    /// Reduction strategy for oversized graphs
    #[clap(long, value_enum, default_value = "largest-component")]
    strategy: ReductionStrategy,

    /// Node placement algorithm
    #[clap(long, value_enum, default_value = "spring")]
    layout: LayoutAlgorithm,

    /// Lowercase tokens before aggregation (use for keyword columns)
    #[clap(long)]
    case_fold: bool,

    /// Per-row token cap guarding against pathological cells
    #[clap(long, default_value = "50")]
    max_tokens_per_row: usize,

    /// Pretty-print the output JSON
    #[clap(long)]
    pretty: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Reading cells from {}", args.input);
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input))?;
    let cells: Vec<Option<String>> =
        serde_json::from_str(&raw).context("input must be a JSON array of strings or nulls")?;

    let config = NetworkConfig {
        min_weight: args.min_weight,
        max_nodes: args.max_nodes,
        reduction_strategy: args.strategy,
        layout_algorithm: args.layout,
        case_fold_entities: args.case_fold,
        max_tokens_per_row: args.max_tokens_per_row,
    };

    // InputAbsent/EmptyGraph are reportable outcomes, not process failures
    let rendered = match pipeline::build_network(&cells, &config) {
        Ok(payload) => {
            log::info!(
                "Built network with {} nodes and {} edges",
                payload.nodes.len(),
                payload.edges.len()
            );
            to_json(&payload, args.pretty)?
        }
        Err(outcome) => {
            log::warn!("No graph produced: {outcome}");
            to_json(&outcome, args.pretty)?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {path}"))?;
            log::info!("Payload written to {path}");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
