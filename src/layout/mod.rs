//! 2D node placement for the exported graph

use crate::config::LayoutAlgorithm;
use crate::graph::CooccurrenceGraph;
use crate::metrics::bfs_distances;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed for the spring layout's initial placement, making layouts
/// reproducible across runs in exchange for varied renders.
const SPRING_SEED: u64 = 42;

/// Iteration count for the force simulation
const SPRING_ITERATIONS: usize = 50;

/// Optimal node spacing for the force simulation
const SPRING_K: f32 = 0.5;

/// Iteration count for the stress relaxation
const STRESS_ITERATIONS: usize = 100;

/// Compute node coordinates, indexed by node. Coordinates land roughly in
/// [-1, 1] on both axes.
///
/// The stress layout needs finite hop distances between every node pair,
/// so on disconnected graphs it falls back to the spring layout rather
/// than failing.
pub fn compute_layout(graph: &CooccurrenceGraph, algorithm: LayoutAlgorithm) -> Vec<(f32, f32)> {
    if graph.is_empty() {
        return Vec::new();
    }

    match algorithm {
        LayoutAlgorithm::Spring => spring_layout(graph),
        LayoutAlgorithm::Circular => circular_layout(graph),
        LayoutAlgorithm::Stress => stress_layout(graph).unwrap_or_else(|| {
            log::debug!("Stress layout unavailable, falling back to spring");
            spring_layout(graph)
        }),
    }
}

/// Fruchterman-Reingold force simulation with seeded initial positions.
fn spring_layout(graph: &CooccurrenceGraph) -> Vec<(f32, f32)> {
    let n = graph.node_count();
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    let mut rng = StdRng::seed_from_u64(SPRING_SEED);
    let mut positions: Vec<(f32, f32)> = (0..n)
        .map(|_| (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)))
        .collect();

    let k = SPRING_K;
    let mut temperature = 0.1f32;
    let cooling = temperature / (SPRING_ITERATIONS + 1) as f32;

    for _ in 0..SPRING_ITERATIONS {
        let mut displacement = vec![(0.0f32, 0.0f32); n];

        // Repulsion between every node pair
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                displacement[i].0 += fx;
                displacement[i].1 += fy;
                displacement[j].0 -= fx;
                displacement[j].1 -= fy;
            }
        }

        // Attraction along edges
        for edge in graph.edges() {
            let (s, t) = (edge.source as usize, edge.target as usize);
            let dx = positions[s].0 - positions[t].0;
            let dy = positions[s].1 - positions[t].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            displacement[s].0 -= fx;
            displacement[s].1 -= fy;
            displacement[t].0 += fx;
            displacement[t].1 += fy;
        }

        // Apply displacements, capped by the current temperature
        for i in 0..n {
            let (dx, dy) = displacement[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-4);
            let step = len.min(temperature);
            positions[i].0 += dx / len * step;
            positions[i].1 += dy / len * step;
        }

        temperature -= cooling;
    }

    rescale(positions)
}

/// Nodes evenly spaced on the unit circle, in label order.
fn circular_layout(graph: &CooccurrenceGraph) -> Vec<(f32, f32)> {
    let n = graph.node_count();
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
            (angle.cos(), angle.sin())
        })
        .collect()
}

/// Distance-based placement (kamada-kawai equivalent): hop distances set
/// target lengths, relaxed by stress-majorization sweeps from a circular
/// start. Returns `None` when any node pair is unreachable.
fn stress_layout(graph: &CooccurrenceGraph) -> Option<Vec<(f32, f32)>> {
    let n = graph.node_count();
    if n == 1 {
        return Some(vec![(0.0, 0.0)]);
    }

    // All-pairs hop distances; bail out on the first unreachable pair
    let mut hops = Vec::with_capacity(n);
    let mut max_hops = 0u32;
    for start in 0..n as u32 {
        let mut row = Vec::with_capacity(n);
        for dist in bfs_distances(graph, start) {
            let dist = dist?;
            max_hops = max_hops.max(dist);
            row.push(dist);
        }
        hops.push(row);
    }
    if max_hops == 0 {
        return Some(circular_layout(graph));
    }

    // Scale targets so the farthest pair sits at distance 2 (the span of
    // the [-1, 1] canvas)
    let scale = 2.0 / max_hops as f32;
    let mut positions = circular_layout(graph);

    for _ in 0..STRESS_ITERATIONS {
        for i in 0..n {
            let mut sx = 0.0f32;
            let mut sy = 0.0f32;
            let mut weight_sum = 0.0f32;

            for j in 0..n {
                if i == j {
                    continue;
                }
                let target = hops[i][j] as f32 * scale;
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
                let weight = 1.0 / (target * target);

                sx += weight * (positions[j].0 + dx / dist * target);
                sy += weight * (positions[j].1 + dy / dist * target);
                weight_sum += weight;
            }

            positions[i] = (sx / weight_sum, sy / weight_sum);
        }
    }

    Some(rescale(positions))
}

/// Center positions and scale the widest axis span to [-1, 1].
fn rescale(mut positions: Vec<(f32, f32)>) -> Vec<(f32, f32)> {
    let n = positions.len() as f32;
    let cx = positions.iter().map(|p| p.0).sum::<f32>() / n;
    let cy = positions.iter().map(|p| p.1).sum::<f32>() / n;

    let mut max_abs = 0.0f32;
    for p in &mut positions {
        p.0 -= cx;
        p.1 -= cy;
        max_abs = max_abs.max(p.0.abs()).max(p.1.abs());
    }
    if max_abs > 1e-6 {
        for p in &mut positions {
            p.0 /= max_abs;
            p.1 /= max_abs;
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph_from_triples;
    use crate::graph::CooccurrenceGraph;

    fn span_bounded(positions: &[(f32, f32)]) -> bool {
        positions
            .iter()
            .all(|p| p.0.abs() <= 1.0 + 1e-4 && p.1.abs() <= 1.0 + 1e-4)
    }

    #[test]
    fn empty_graph_gets_no_positions() {
        let g = CooccurrenceGraph::empty();
        assert!(compute_layout(&g, LayoutAlgorithm::Spring).is_empty());
    }

    #[test]
    fn spring_layout_is_reproducible() {
        let g = graph_from_triples(&[("a", "b", 1), ("b", "c", 2), ("c", "d", 1)]);

        let first = compute_layout(&g, LayoutAlgorithm::Spring);
        let second = compute_layout(&g, LayoutAlgorithm::Spring);

        assert_eq!(first.len(), g.node_count());
        for (p, q) in first.iter().zip(&second) {
            assert!((p.0 - q.0).abs() < 1e-6);
            assert!((p.1 - q.1).abs() < 1e-6);
        }
        assert!(span_bounded(&first));
    }

    #[test]
    fn circular_layout_spaces_nodes_on_the_unit_circle() {
        let g = graph_from_triples(&[("a", "b", 1), ("b", "c", 1), ("c", "d", 1)]);
        let positions = compute_layout(&g, LayoutAlgorithm::Circular);

        assert_eq!(positions.len(), 4);
        for p in &positions {
            let radius = (p.0 * p.0 + p.1 * p.1).sqrt();
            assert!((radius - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn stress_layout_separates_distant_nodes() {
        // Path graph: the endpoints should land farther apart than adjacent nodes
        let g = graph_from_triples(&[("a", "b", 1), ("b", "c", 1), ("c", "d", 1)]);
        let positions = compute_layout(&g, LayoutAlgorithm::Stress);

        let dist = |i: usize, j: usize| {
            let dx = positions[i].0 - positions[j].0;
            let dy = positions[i].1 - positions[j].1;
            (dx * dx + dy * dy).sqrt()
        };
        let a = g.index_of("a").unwrap() as usize;
        let b = g.index_of("b").unwrap() as usize;
        let d = g.index_of("d").unwrap() as usize;

        assert!(dist(a, d) > dist(a, b));
        assert!(span_bounded(&positions));
    }

    #[test]
    fn stress_layout_falls_back_on_disconnected_graphs() {
        let g = graph_from_triples(&[("a", "b", 1), ("x", "y", 1)]);

        let stress = compute_layout(&g, LayoutAlgorithm::Stress);
        let spring = compute_layout(&g, LayoutAlgorithm::Spring);
        assert_eq!(stress, spring);
    }

    #[test]
    fn singleton_graph_sits_at_the_origin() {
        // A single node cannot come from the builder, but reductions and
        // direct construction can produce one
        let g = graph_from_triples(&[("a", "b", 1)]).induced_subgraph(&[0]);

        for algorithm in [
            LayoutAlgorithm::Spring,
            LayoutAlgorithm::Circular,
            LayoutAlgorithm::Stress,
        ] {
            assert_eq!(compute_layout(&g, algorithm), vec![(0.0, 0.0)]);
        }
    }
}
