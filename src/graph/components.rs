//! Union-find based connected component analysis

use crate::graph::CooccurrenceGraph;
use std::collections::HashMap;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set (for union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets with every node in its own set
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Union by rank: attach the smaller tree under the larger root
        if self.rank[root_x as usize] > self.rank[root_y as usize] {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }

    /// Size of the set containing x
    pub fn size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.rank[root as usize]
    }
}

/// Group the graph's nodes into connected components.
///
/// Members within a component are sorted ascending by index; components
/// are ordered largest first, ties broken by the smallest member label so
/// the ordering is stable across runs.
pub fn connected_components(graph: &CooccurrenceGraph) -> Vec<Vec<u32>> {
    let node_count = graph.node_count();
    let mut sets = DisjointSets::new(node_count);

    for edge in graph.edges() {
        sets.union(edge.source, edge.target);
    }

    let mut by_root: HashMap<u32, Vec<u32>> = HashMap::new();
    for node in 0..node_count as u32 {
        let root = sets.find(node);
        by_root.entry(root).or_default().push(node);
    }

    let mut components: Vec<Vec<u32>> = by_root.into_values().collect();
    for members in &mut components {
        members.sort_unstable();
    }
    components.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| graph.label(a[0]).cmp(graph.label(b[0])))
    });

    components
}
