//! Deterministic size reduction for oversized graphs

use crate::config::ReductionStrategy;
use crate::graph::components::connected_components;
use crate::graph::CooccurrenceGraph;
use serde::{Deserialize, Serialize};

/// Record of a reduction that was actually applied, carried through to the
/// export payload so consumers can disclose truncation to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedReduction {
    pub strategy: ReductionStrategy,

    /// Node count before reduction
    pub original_nodes: usize,
}

/// Shrink the graph when it exceeds `max_nodes`, otherwise return it
/// unchanged with no reduction flag.
///
/// `LargestComponent` keeps the biggest connected component whole, which
/// may still exceed `max_nodes`; callers must not rely on a hard cap for
/// this strategy. `TopDegree` keeps exactly `max_nodes` nodes, ranked by
/// degree descending with ties broken by label ascending, and induces the
/// subgraph on them.
pub fn reduce(
    graph: &CooccurrenceGraph,
    max_nodes: usize,
    strategy: ReductionStrategy,
) -> (CooccurrenceGraph, Option<AppliedReduction>) {
    if graph.node_count() <= max_nodes {
        return (graph.clone(), None);
    }

    let original_nodes = graph.node_count();
    let reduced = match strategy {
        ReductionStrategy::LargestComponent => largest_component(graph),
        ReductionStrategy::TopDegree => top_degree(graph, max_nodes),
    };

    log::info!(
        "Reduced graph from {} to {} nodes ({:?})",
        original_nodes,
        reduced.node_count(),
        strategy
    );

    (
        reduced,
        Some(AppliedReduction {
            strategy,
            original_nodes,
        }),
    )
}

fn largest_component(graph: &CooccurrenceGraph) -> CooccurrenceGraph {
    let components = connected_components(graph);
    match components.first() {
        Some(largest) => graph.induced_subgraph(largest),
        None => CooccurrenceGraph::empty(),
    }
}

fn top_degree(graph: &CooccurrenceGraph, max_nodes: usize) -> CooccurrenceGraph {
    let mut ranked: Vec<u32> = (0..graph.node_count() as u32).collect();
    ranked.sort_by(|&a, &b| {
        graph
            .degree(b)
            .cmp(&graph.degree(a))
            .then_with(|| graph.label(a).cmp(graph.label(b)))
    });
    ranked.truncate(max_nodes);

    graph.induced_subgraph(&ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph_from_triples;

    #[test]
    fn small_graphs_pass_through_unchanged() {
        let g = graph_from_triples(&[("a", "b", 1)]);
        let (reduced, applied) = reduce(&g, 10, ReductionStrategy::TopDegree);

        assert!(applied.is_none());
        assert_eq!(reduced.node_count(), 2);
    }

    #[test]
    fn largest_component_drops_the_smaller_ones() {
        let g = graph_from_triples(&[
            ("a", "b", 1),
            ("b", "c", 1),
            ("c", "d", 1),
            ("x", "y", 1),
        ]);
        let (reduced, applied) = reduce(&g, 3, ReductionStrategy::LargestComponent);

        let applied = applied.unwrap();
        assert_eq!(applied.original_nodes, 6);
        assert_eq!(applied.strategy, ReductionStrategy::LargestComponent);

        // The chain a-b-c-d survives whole even though it exceeds the cap
        assert_eq!(reduced.node_count(), 4);
        assert!(reduced.index_of("x").is_none());
    }

    #[test]
    fn top_degree_keeps_exactly_max_nodes() {
        // "hub" touches everything; leaves tie at degree 1
        let g = graph_from_triples(&[
            ("hub", "a", 1),
            ("hub", "b", 1),
            ("hub", "c", 1),
            ("hub", "d", 1),
        ]);
        let (reduced, applied) = reduce(&g, 3, ReductionStrategy::TopDegree);

        assert!(applied.is_some());
        assert_eq!(reduced.node_count(), 3);
        assert!(reduced.index_of("hub").is_some());
        // Degree ties resolve by label ascending
        assert!(reduced.index_of("a").is_some());
        assert!(reduced.index_of("b").is_some());
        assert!(reduced.index_of("d").is_none());
    }

    #[test]
    fn induced_edges_require_both_endpoints() {
        let g = graph_from_triples(&[("hub", "a", 1), ("hub", "b", 1), ("a", "b", 1), ("hub", "c", 1)]);
        let (reduced, _) = reduce(&g, 3, ReductionStrategy::TopDegree);

        // hub, a, b survive with their triangle; edges to c are gone
        assert_eq!(reduced.node_count(), 3);
        assert_eq!(reduced.edge_count(), 3);
    }
}
