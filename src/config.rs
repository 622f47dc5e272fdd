//! Configuration for the co-occurrence network engine

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Strategy used to shrink a graph that exceeds the node cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionStrategy {
    /// Keep only the largest connected component.
    LargestComponent,

    /// Keep the highest-degree nodes and induce the subgraph on them.
    TopDegree,
}

/// Node placement algorithm for the exported layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutAlgorithm {
    /// Force-directed placement with a fixed seed.
    Spring,

    /// Evenly spaced nodes on a unit circle.
    Circular,

    /// Hop-distance stress relaxation; falls back to spring on
    /// disconnected graphs.
    Stress,
}

/// Tunable parameters for one network build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Minimum co-occurrence count for an edge to be kept
    pub min_weight: u32,

    /// Node cap before size reduction triggers
    pub max_nodes: usize,

    /// How to shrink graphs above the cap
    pub reduction_strategy: ReductionStrategy,

    /// Node placement algorithm
    pub layout_algorithm: LayoutAlgorithm,

    /// Lowercase tokens before aggregation (keywords yes, author names no)
    pub case_fold_entities: bool,

    /// Per-row token cap guarding against pathological cells, since pair
    /// generation is quadratic in the row's token count
    pub max_tokens_per_row: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_weight: 2,
            max_nodes: 50,
            reduction_strategy: ReductionStrategy::LargestComponent,
            layout_algorithm: LayoutAlgorithm::Spring,
            case_fold_entities: false,
            max_tokens_per_row: 50,
        }
    }
}

impl NetworkConfig {
    /// Preset for author/inventor collaboration networks.
    pub fn collaboration() -> Self {
        Self::default()
    }

    /// Preset for keyword co-occurrence networks: higher threshold,
    /// case-folded tokens, and top-degree reduction.
    pub fn keyword_cooccurrence() -> Self {
        Self {
            min_weight: 3,
            reduction_strategy: ReductionStrategy::TopDegree,
            case_fold_entities: true,
            ..Self::default()
        }
    }
}
