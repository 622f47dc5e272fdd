//! End-to-end network construction pipeline

use crate::config::NetworkConfig;
use crate::error::BuildError;
use crate::export::{export, NetworkPayload};
use crate::graph::reduce::reduce;
use crate::graph::GraphBuilder;
use crate::layout::compute_layout;
use crate::metrics::compute_metrics;
use crate::pairs::aggregate_pairs;
use crate::tokenize::tokenize;
use crate::community;

/// Build a network from one column of delimited multi-value cells.
///
/// Runs every stage in order: tokenize, aggregate pairs, threshold filter,
/// size reduction, metrics, community detection, layout, export. The whole
/// pipeline is a pure function of its inputs; nothing is shared between
/// invocations, so concurrent sessions can call it freely.
///
/// Returns [`BuildError::InputAbsent`] when the column yields no tokens at
/// all, and [`BuildError::EmptyGraph`] when tokens existed but no pair
/// reached `min_weight`. Layout and community detection failures are
/// absorbed internally (spring fallback, unavailable partition) and never
/// surface as errors.
pub fn build_network(
    cells: &[Option<String>],
    config: &NetworkConfig,
) -> Result<NetworkPayload, BuildError> {
    let rows: Vec<Vec<String>> = cells
        .iter()
        .map(|cell| tokenize(cell.as_deref(), config.case_fold_entities))
        .collect();

    let token_count: usize = rows.iter().map(Vec::len).sum();
    if token_count == 0 {
        return Err(BuildError::InputAbsent);
    }
    log::info!("Tokenized {} rows into {} tokens", rows.len(), token_count);

    let counts = aggregate_pairs(&rows, config.max_tokens_per_row);
    log::info!("Aggregated {} distinct co-occurrence pairs", counts.len());

    let graph = GraphBuilder::from_edge_counts(&counts, config.min_weight).build();
    if graph.is_empty() {
        return Err(BuildError::EmptyGraph {
            min_weight: config.min_weight,
        });
    }
    log::info!(
        "Built graph with {} nodes and {} edges (min weight {})",
        graph.node_count(),
        graph.edge_count(),
        config.min_weight
    );

    let (graph, reduction) = reduce(&graph, config.max_nodes, config.reduction_strategy);

    let metrics = compute_metrics(&graph);
    let communities = community::detect_communities(&graph);
    let positions = compute_layout(&graph, config.layout_algorithm);

    Ok(export(&graph, metrics, communities, &positions, reduction))
}

/// Convenience wrapper for callers holding plain strings rather than
/// nullable cells.
pub fn build_network_from_cells(
    cells: &[&str],
    config: &NetworkConfig,
) -> Result<NetworkPayload, BuildError> {
    let owned: Vec<Option<String>> = cells.iter().map(|c| Some(c.to_string())).collect();
    build_network(&owned, config)
}
