//! Raw input topology: node registry and undirected weighted edge list.

use std::collections::HashMap;

use mf_core::NodeId;

/// Assigns each distinct node name a stable, dense 0-based index.
///
/// Append-only: indices never change once assigned, and nodes are only
/// removed by a full [`clear`](NodeRegistry::clear) (paired with clearing
/// the topology that references them).
///
/// Names are expected to arrive already trimmed and case-normalized; the
/// registry stores them verbatim.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    names: Vec<String>,
    by_name: HashMap<String, NodeId>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `name`, assigning the next free index on first
    /// appearance.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId::from_index(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a name without registering it.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Display name for a node index.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(index, name)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i as u32), n.as_str()))
    }

    /// Forget all nodes. Only valid together with clearing the topology.
    pub fn clear(&mut self) {
        self.names.clear();
        self.by_name.clear();
    }
}

/// One undirected, weighted edge of the input topology.
///
/// The pair is unordered for identity purposes, but the stored orientation
/// is whatever the most recent upsert supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u32,
}

impl RawEdge {
    /// Whether this edge connects the unordered pair `{x, y}`.
    fn joins(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Result of [`RawTopology::upsert`], so callers can log what happened and
/// invalidate any previously built network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// The undirected weighted edge list, keyed by unordered node pairs.
///
/// This is the sole source of truth fed to the network builder. Insertion
/// order is preserved and determines the order in which conversion rules
/// are applied, and therefore the adjacency order of the built network.
#[derive(Debug, Clone, Default)]
pub struct RawTopology {
    edges: Vec<RawEdge>,
}

impl RawTopology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update the edge for the unordered pair `{a, b}`.
    ///
    /// If an edge already exists for the pair (matching in either
    /// orientation), its stored orientation becomes `(a, b)` and its weight
    /// is replaced; otherwise a new edge is appended. At most one edge ever
    /// exists per unordered pair.
    pub fn upsert(&mut self, a: NodeId, b: NodeId, weight: u32) -> UpsertOutcome {
        for edge in &mut self.edges {
            if edge.joins(a, b) {
                *edge = RawEdge { a, b, weight };
                return UpsertOutcome::Updated;
            }
        }
        self.edges.push(RawEdge { a, b, weight });
        UpsertOutcome::Added
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[RawEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Remove all edges. Paired with [`NodeRegistry::clear`] by the owner.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(registry: &mut NodeRegistry, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| registry.intern(n)).collect()
    }

    #[test]
    fn intern_is_idempotent() {
        let mut registry = NodeRegistry::new();
        let a1 = registry.intern("A");
        let b = registry.intern("B");
        let a2 = registry.intern("A");

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name(a1), Some("A"));
        assert_eq!(registry.resolve("B"), Some(b));
        assert_eq!(registry.resolve("C"), None);
    }

    #[test]
    fn registry_indices_are_dense_in_first_appearance_order() {
        let mut registry = NodeRegistry::new();
        let got = ids(&mut registry, &["S", "A", "T", "A", "S"]);
        assert_eq!(got[0].index(), 0);
        assert_eq!(got[1].index(), 1);
        assert_eq!(got[2].index(), 2);
        assert_eq!(got[3], got[1]);
        assert_eq!(got[4], got[0]);

        let listed: Vec<_> = registry.iter().map(|(_, n)| n.to_string()).collect();
        assert_eq!(listed, ["S", "A", "T"]);
    }

    #[test]
    fn upsert_replaces_in_either_orientation() {
        let mut registry = NodeRegistry::new();
        let v = ids(&mut registry, &["A", "B"]);
        let mut topo = RawTopology::new();

        assert_eq!(topo.upsert(v[0], v[1], 3), UpsertOutcome::Added);
        assert_eq!(topo.upsert(v[1], v[0], 9), UpsertOutcome::Updated);

        assert_eq!(topo.len(), 1);
        let edge = topo.edges()[0];
        // The latest call wins, including orientation.
        assert_eq!((edge.a, edge.b, edge.weight), (v[1], v[0], 9));
    }

    #[test]
    fn upsert_keeps_distinct_pairs_apart() {
        let mut registry = NodeRegistry::new();
        let v = ids(&mut registry, &["A", "B", "C"]);
        let mut topo = RawTopology::new();

        topo.upsert(v[0], v[1], 1);
        topo.upsert(v[1], v[2], 2);
        topo.upsert(v[0], v[2], 3);
        assert_eq!(topo.len(), 3);

        topo.upsert(v[2], v[0], 4);
        assert_eq!(topo.len(), 3);
        assert_eq!(topo.edges()[2].weight, 4);
    }

    #[test]
    fn clear_empties_both() {
        let mut registry = NodeRegistry::new();
        let v = ids(&mut registry, &["A", "B"]);
        let mut topo = RawTopology::new();
        topo.upsert(v[0], v[1], 5);

        topo.clear();
        registry.clear();
        assert!(topo.is_empty());
        assert!(registry.is_empty());

        // Indices restart from zero after a full reset.
        assert_eq!(registry.intern("Z").index(), 0);
    }
}
