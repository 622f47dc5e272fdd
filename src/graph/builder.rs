//! Graph construction from aggregated co-occurrence counts

use crate::graph::{CooccurrenceGraph, WeightedEdge};
use crate::pairs::EdgeKey;
use std::collections::HashMap;

/// Builder that filters aggregated pair counts by a minimum weight and
/// materializes the surviving structure as an undirected graph.
///
/// Only entities participating in at least one qualifying edge become
/// nodes: the network visualizes connections, not the full entity
/// catalog, so isolated entities are dropped here by construction.
pub struct GraphBuilder {
    label_to_index: HashMap<String, u32>,
    labels: Vec<String>,
    edges: Vec<(u32, u32, u32)>,
}

impl GraphBuilder {
    /// Retain every pair whose count reaches `min_weight`.
    ///
    /// Surviving keys are visited in canonical sort order, so the
    /// resulting graph is identical across runs for identical input.
    pub fn from_edge_counts(counts: &HashMap<EdgeKey, u32>, min_weight: u32) -> Self {
        let mut surviving: Vec<(&EdgeKey, u32)> = counts
            .iter()
            .filter(|(_, &count)| count >= min_weight)
            .map(|(key, &count)| (key, count))
            .collect();
        surviving.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut builder = Self {
            label_to_index: HashMap::with_capacity(surviving.len()),
            labels: Vec::new(),
            edges: Vec::with_capacity(surviving.len()),
        };

        for (key, count) in surviving {
            let (a, b) = key.endpoints();
            let src = builder.get_or_create_node(a);
            let dst = builder.get_or_create_node(b);
            builder.edges.push((src, dst, count));
        }

        builder
    }

    /// Get or create the node index for the given label.
    fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&idx) = self.label_to_index.get(label) {
            return idx;
        }

        let idx = self.labels.len() as u32;
        self.label_to_index.insert(label.to_string(), idx);
        self.labels.push(label.to_string());
        idx
    }

    /// Materialize the graph. Node indices are reassigned in label sort
    /// order and edges normalized to `source < target`.
    pub fn build(self) -> CooccurrenceGraph {
        let mut labels = self.labels;
        labels.sort_unstable();

        let relabel: HashMap<&str, u32> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i as u32))
            .collect();

        let old_labels: Vec<&String> = {
            // Rebuild the original index -> label view before the sort
            let mut v: Vec<(&String, u32)> =
                self.label_to_index.iter().map(|(l, &i)| (l, i)).collect();
            v.sort_unstable_by_key(|&(_, i)| i);
            v.into_iter().map(|(l, _)| l).collect()
        };

        let mut edges: Vec<WeightedEdge> = self
            .edges
            .into_iter()
            .map(|(src, dst, weight)| {
                let a = relabel[old_labels[src as usize].as_str()];
                let b = relabel[old_labels[dst as usize].as_str()];
                let (source, target) = if a < b { (a, b) } else { (b, a) };
                WeightedEdge {
                    source,
                    target,
                    weight,
                }
            })
            .collect();
        edges.sort_unstable_by_key(|e| (e.source, e.target));

        CooccurrenceGraph::from_parts(labels, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(triples: &[(&str, &str, u32)]) -> HashMap<EdgeKey, u32> {
        triples
            .iter()
            .map(|&(a, b, w)| (EdgeKey::new(a, b).unwrap(), w))
            .collect()
    }

    #[test]
    fn threshold_drops_weak_edges_and_their_nodes() {
        let counts = counts(&[("Alice", "Bob", 2), ("Bob", "Carol", 1)]);
        let graph = GraphBuilder::from_edge_counts(&counts, 2).build();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.index_of("Alice").is_some());
        assert!(graph.index_of("Bob").is_some());
        assert!(graph.index_of("Carol").is_none());
        assert_eq!(graph.edges()[0].weight, 2);
    }

    #[test]
    fn node_indices_follow_label_sort_order() {
        let counts = counts(&[("zeta", "mid", 5), ("alpha", "mid", 5)]);
        let graph = GraphBuilder::from_edge_counts(&counts, 1).build();

        assert_eq!(graph.labels(), &["alpha", "mid", "zeta"]);
        for edge in graph.edges() {
            assert!(edge.source < edge.target);
        }
    }

    #[test]
    fn raising_the_threshold_never_grows_the_graph() {
        let counts = counts(&[
            ("a", "b", 1),
            ("b", "c", 2),
            ("c", "d", 3),
            ("d", "e", 4),
        ]);

        let mut prev_nodes = usize::MAX;
        let mut prev_edges = usize::MAX;
        for min_weight in 1..=5 {
            let g = GraphBuilder::from_edge_counts(&counts, min_weight).build();
            assert!(g.node_count() <= prev_nodes);
            assert!(g.edge_count() <= prev_edges);
            prev_nodes = g.node_count();
            prev_edges = g.edge_count();
        }
    }

    #[test]
    fn construction_is_deterministic() {
        let counts = counts(&[("x", "y", 3), ("y", "z", 3), ("x", "z", 2)]);

        let g1 = GraphBuilder::from_edge_counts(&counts, 2).build();
        let g2 = GraphBuilder::from_edge_counts(&counts, 2).build();

        assert_eq!(g1.labels(), g2.labels());
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn empty_counts_build_an_empty_graph() {
        let graph = GraphBuilder::from_edge_counts(&HashMap::new(), 1).build();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
