//! Structural metrics for a built co-occurrence graph

use crate::graph::components::connected_components;
use crate::graph::CooccurrenceGraph;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many ranked nodes the centrality list reports
const CENTRALITY_TOP_N: usize = 10;

/// One entry of the degree-centrality ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityEntry {
    pub label: String,

    /// Degree divided by (node count - 1)
    pub score: f64,

    pub degree: usize,
}

/// Path diagnostics, which are only defined globally for connected graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Connectivity {
    /// One component spans every node
    Connected {
        /// Longest shortest path, in hops
        diameter: usize,

        /// Mean shortest-path length over all ordered node pairs
        avg_path_length: f64,
    },

    /// Multiple components; diameter and path length are not reported
    Fragmented {
        components: usize,
        largest_component: usize,
    },
}

/// Snapshot of structural metrics, describing the graph exactly as given
/// (after any size reduction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub nodes: usize,
    pub edges: usize,

    /// Fraction of possible edges present, in [0, 1]
    pub density: f64,

    pub avg_degree: f64,

    /// Top nodes by degree centrality, ties broken by label ascending
    pub top_nodes: Vec<CentralityEntry>,

    pub connectivity: Connectivity,
}

impl NetworkMetrics {
    /// Metrics of the empty graph.
    pub fn empty() -> Self {
        Self {
            nodes: 0,
            edges: 0,
            density: 0.0,
            avg_degree: 0.0,
            top_nodes: Vec::new(),
            connectivity: Connectivity::Fragmented {
                components: 0,
                largest_component: 0,
            },
        }
    }
}

/// Compute the full metrics snapshot for a graph.
pub fn compute_metrics(graph: &CooccurrenceGraph) -> NetworkMetrics {
    let n = graph.node_count();
    let m = graph.edge_count();

    if n == 0 {
        return NetworkMetrics::empty();
    }

    let density = if n >= 2 {
        2.0 * m as f64 / (n as f64 * (n as f64 - 1.0))
    } else {
        0.0
    };
    let avg_degree = 2.0 * m as f64 / n as f64;

    NetworkMetrics {
        nodes: n,
        edges: m,
        density,
        avg_degree,
        top_nodes: degree_centrality_ranking(graph),
        connectivity: connectivity(graph),
    }
}

/// Rank all nodes by degree centrality and keep the top entries.
fn degree_centrality_ranking(graph: &CooccurrenceGraph) -> Vec<CentralityEntry> {
    let n = graph.node_count();

    let mut ranked: Vec<u32> = (0..n as u32).collect();
    ranked.sort_by(|&a, &b| {
        graph
            .degree(b)
            .cmp(&graph.degree(a))
            .then_with(|| graph.label(a).cmp(graph.label(b)))
    });

    ranked
        .into_iter()
        .take(CENTRALITY_TOP_N)
        .map(|node| {
            let degree = graph.degree(node);
            let score = if n > 1 {
                degree as f64 / (n as f64 - 1.0)
            } else {
                0.0
            };
            CentralityEntry {
                label: graph.label(node).to_string(),
                score,
                degree,
            }
        })
        .collect()
}

fn connectivity(graph: &CooccurrenceGraph) -> Connectivity {
    let components = connected_components(graph);

    if components.len() == 1 {
        let (diameter, avg_path_length) = path_diagnostics(graph);
        Connectivity::Connected {
            diameter,
            avg_path_length,
        }
    } else {
        Connectivity::Fragmented {
            components: components.len(),
            largest_component: components.first().map_or(0, Vec::len),
        }
    }
}

/// Diameter and mean shortest-path length of a connected graph, via BFS
/// from every node. O(n * (n + m)), fine at visualization scale.
fn path_diagnostics(graph: &CooccurrenceGraph) -> (usize, f64) {
    let n = graph.node_count();
    if n < 2 {
        return (0, 0.0);
    }

    let mut diameter = 0usize;
    let mut total = 0u64;
    let mut pairs = 0u64;

    for start in 0..n as u32 {
        for dist in bfs_distances(graph, start).into_iter().flatten() {
            if dist > 0 {
                diameter = diameter.max(dist as usize);
                total += dist as u64;
                pairs += 1;
            }
        }
    }

    (diameter, total as f64 / pairs as f64)
}

/// Hop distances from `start` to every node; `None` marks unreachable.
pub(crate) fn bfs_distances(graph: &CooccurrenceGraph, start: u32) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.node_count()];
    distances[start as usize] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let next = distances[node as usize].unwrap() + 1;
        for &neighbor in graph.neighbors(node) {
            if distances[neighbor as usize].is_none() {
                distances[neighbor as usize] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
