//! Render-ready payload assembly

use crate::community::Communities;
use crate::graph::reduce::AppliedReduction;
use crate::graph::CooccurrenceGraph;
use crate::metrics::NetworkMetrics;
use serde::{Deserialize, Serialize};

/// Display labels are cut at this many characters to keep rendering
/// bounded; the full label is kept alongside
const LABEL_DISPLAY_LIMIT: usize = 20;

/// One positioned node of the exported network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub label: String,

    /// Label truncated for on-canvas rendering
    pub display_label: String,

    pub degree: usize,
    pub x: f32,
    pub y: f32,
}

/// One weighted edge of the exported network, endpoint labels resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Renderer-agnostic description of a built network: positioned nodes,
/// weighted edges, the metrics snapshot, the community partition, and a
/// truncation flag when size reduction was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPayload {
    /// Sentinel for the empty graph; consumers render a "no data" notice
    pub no_data: bool,

    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub metrics: NetworkMetrics,
    pub communities: Communities,

    /// Present when the graph shown is a reduced view of a larger one
    pub reduction: Option<AppliedReduction>,
}

impl NetworkPayload {
    /// Payload for a graph with nothing to show.
    pub fn no_data() -> Self {
        Self {
            no_data: true,
            nodes: Vec::new(),
            edges: Vec::new(),
            metrics: NetworkMetrics::empty(),
            communities: Communities::unavailable(),
            reduction: None,
        }
    }
}

/// Assemble the export payload from the graph and its derived artifacts.
/// `positions` must be indexed like the graph's nodes; an empty graph
/// yields the no-data payload regardless of the other arguments.
pub fn export(
    graph: &CooccurrenceGraph,
    metrics: NetworkMetrics,
    communities: Communities,
    positions: &[(f32, f32)],
    reduction: Option<AppliedReduction>,
) -> NetworkPayload {
    if graph.is_empty() {
        return NetworkPayload::no_data();
    }

    let nodes = graph
        .labels()
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let (x, y) = positions[idx];
            NodeRecord {
                label: label.clone(),
                display_label: truncate_label(label),
                degree: graph.degree(idx as u32),
                x,
                y,
            }
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeRecord {
            source: graph.label(edge.source).to_string(),
            target: graph.label(edge.target).to_string(),
            weight: edge.weight,
        })
        .collect();

    NetworkPayload {
        no_data: false,
        nodes,
        edges,
        metrics,
        communities,
        reduction,
    }
}

fn truncate_label(label: &str) -> String {
    label.chars().take(LABEL_DISPLAY_LIMIT).collect()
}
