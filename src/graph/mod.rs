//! Weighted undirected graph representation and algorithms

pub mod builder;
pub mod components;
pub mod reduce;

pub use builder::GraphBuilder;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A weighted edge between two node indices, stored with `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: u32,
    pub target: u32,
    pub weight: u32,
}

/// Undirected simple graph of co-occurring entities.
///
/// Nodes are identified by their label; indices are assigned in label sort
/// order so that identical inputs always produce identical graphs. Edges
/// are kept sorted by endpoint pair, and adjacency lists are sorted,
/// mirroring the edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooccurrenceGraph {
    labels: Vec<String>,
    label_to_index: HashMap<String, u32>,
    edges: Vec<WeightedEdge>,
    adjacency: Vec<Vec<u32>>,
}

impl CooccurrenceGraph {
    /// Graph with no nodes and no edges.
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            label_to_index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub(crate) fn from_parts(labels: Vec<String>, edges: Vec<WeightedEdge>) -> Self {
        let label_to_index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i as u32))
            .collect();

        let mut adjacency = vec![Vec::new(); labels.len()];
        for edge in &edges {
            adjacency[edge.source as usize].push(edge.target);
            adjacency[edge.target as usize].push(edge.source);
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }

        Self {
            labels,
            label_to_index,
            edges,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Node labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Index of the node with the given label, if present.
    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.label_to_index.get(label).copied()
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Neighbor indices of a node, sorted ascending.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency[node as usize]
    }

    pub fn degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// Subgraph induced on the given node indices: the listed nodes are
    /// kept (isolated or not) along with every edge whose endpoints both
    /// survive. Node identity is the label, so indices are reassigned.
    pub fn induced_subgraph(&self, keep: &[u32]) -> CooccurrenceGraph {
        let mut kept = keep.to_vec();
        kept.sort_unstable();
        kept.dedup();

        // Map old indices to new ones; u32::MAX marks a dropped node
        let mut old_to_new = vec![u32::MAX; self.node_count()];
        for (new_idx, &old_idx) in kept.iter().enumerate() {
            old_to_new[old_idx as usize] = new_idx as u32;
        }

        let labels: Vec<String> = kept
            .iter()
            .map(|&old| self.labels[old as usize].clone())
            .collect();

        let edges: Vec<WeightedEdge> = self
            .edges
            .iter()
            .filter_map(|e| {
                let source = old_to_new[e.source as usize];
                let target = old_to_new[e.target as usize];
                if source == u32::MAX || target == u32::MAX {
                    return None;
                }
                Some(WeightedEdge {
                    source,
                    target,
                    weight: e.weight,
                })
            })
            .collect();

        CooccurrenceGraph::from_parts(labels, edges)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::pairs::EdgeKey;
    use std::collections::HashMap;

    /// Build a graph from (a, b, weight) triples, applying no threshold.
    pub fn graph_from_triples(triples: &[(&str, &str, u32)]) -> CooccurrenceGraph {
        let mut counts: HashMap<EdgeKey, u32> = HashMap::new();
        for &(a, b, w) in triples {
            counts.insert(EdgeKey::new(a, b).unwrap(), w);
        }
        GraphBuilder::from_edge_counts(&counts, 1).build()
    }
}
