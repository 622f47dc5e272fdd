//! Greedy modularity community detection

use crate::graph::CooccurrenceGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Graphs below this size produce no meaningful partition
const MIN_NODES_FOR_DETECTION: usize = 5;

/// Disjoint node groups covering the graph, or an explicit marker that no
/// partition could be produced.
///
/// `available == false` means "communities unavailable" (graph too small
/// or degenerate), which callers must not confuse with "zero communities
/// found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communities {
    pub available: bool,

    /// Groups sorted by descending size, members sorted by label
    pub groups: Vec<Vec<String>>,
}

impl Communities {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            groups: Vec::new(),
        }
    }
}

/// Partition the graph by greedy modularity maximization.
///
/// Agglomerative merging in the Clauset-Newman-Moore style: every node
/// starts as its own community, and the pair of adjacent communities whose
/// merge yields the largest modularity gain is merged until no merge
/// improves modularity. Edges count as unweighted links, matching how a
/// co-occurrence network is usually read. Ties in the gain are broken by
/// the smaller community id pair, keeping the partition deterministic.
///
/// Degenerate graphs (fewer than 5 nodes, or no edges) yield an
/// unavailable partition rather than an error.
pub fn detect_communities(graph: &CooccurrenceGraph) -> Communities {
    let n = graph.node_count();
    let m = graph.edge_count();

    if n < MIN_NODES_FOR_DETECTION || m == 0 {
        log::debug!("Community detection skipped ({n} nodes, {m} edges)");
        return Communities::unavailable();
    }

    let m = m as f64;

    // Fraction of edges between community pairs (keyed with lo < hi)
    let mut between: HashMap<(u32, u32), f64> = HashMap::new();
    for edge in graph.edges() {
        *between.entry((edge.source, edge.target)).or_insert(0.0) += 1.0 / m;
    }

    // Fraction of edge endpoints attached to each community
    let mut attachment: Vec<f64> = (0..n as u32)
        .map(|node| graph.degree(node) as f64 / (2.0 * m))
        .collect();

    let mut community_of: Vec<u32> = (0..n as u32).collect();

    loop {
        // Best merge = max modularity gain dQ = e_ij - 2 a_i a_j
        let mut best: Option<((u32, u32), f64)> = None;
        for (&(i, j), &e_ij) in &between {
            let gain = e_ij - 2.0 * attachment[i as usize] * attachment[j as usize];
            let better = match best {
                None => true,
                Some((pair, best_gain)) => {
                    gain > best_gain + 1e-12
                        || ((gain - best_gain).abs() <= 1e-12 && (i, j) < pair)
                }
            };
            if better {
                best = Some(((i, j), gain));
            }
        }

        let ((keep, absorb), gain) = match best {
            Some(found) => found,
            None => break,
        };
        if gain <= 0.0 {
            break;
        }

        // Merge `absorb` into `keep`
        attachment[keep as usize] += attachment[absorb as usize];
        for c in &mut community_of {
            if *c == absorb {
                *c = keep;
            }
        }

        // Re-route the absorbed community's edge fractions
        let absorbed: Vec<((u32, u32), f64)> = between
            .iter()
            .filter(|(&(i, j), _)| i == absorb || j == absorb)
            .map(|(&k, &v)| (k, v))
            .collect();
        for ((i, j), weight) in absorbed {
            between.remove(&(i, j));
            let other = if i == absorb { j } else { i };
            if other == keep {
                continue; // Now internal to the merged community
            }
            let key = if keep < other {
                (keep, other)
            } else {
                (other, keep)
            };
            *between.entry(key).or_insert(0.0) += weight;
        }
    }

    let mut grouped: HashMap<u32, Vec<String>> = HashMap::new();
    for node in 0..n as u32 {
        grouped
            .entry(community_of[node as usize])
            .or_default()
            .push(graph.label(node).to_string());
    }

    let mut groups: Vec<Vec<String>> = grouped.into_values().collect();
    for members in &mut groups {
        members.sort_unstable();
    }
    groups.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));

    log::debug!("Detected {} communities", groups.len());

    Communities {
        available: true,
        groups,
    }
}
