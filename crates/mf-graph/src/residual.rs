//! Residual flow network: directed arcs with paired reverse arcs.

use mf_core::NodeId;

/// A directed arc of the residual graph.
///
/// Forward arcs carry `capacity > 0` and `0 <= flow <= capacity`; every arc
/// is created together with a capacity-0 reverse arc stored in `to`'s
/// adjacency list, and the pair maintains `rev.flow == -arc.flow` so the
/// residual capacity of the reverse arc is exactly the cancellable flow.
///
/// `flow` is `i64` because reverse arcs go negative; `capacity` stays `u32`
/// and is widened at comparison sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: u32,
    pub flow: i64,
    /// Position of the paired reverse arc in `to`'s adjacency list.
    pair: usize,
    highlighted: bool,
}

impl Arc {
    /// Spare capacity: `capacity - flow`.
    pub fn residual(&self) -> i64 {
        self.capacity as i64 - self.flow
    }

    /// Position of the paired reverse arc within `to`'s adjacency list.
    pub fn pair_pos(&self) -> usize {
        self.pair
    }

    /// Whether this arc is on the most recently reported augmenting path.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Stable address of an arc: owning node plus position in its adjacency
/// list. Used instead of references so the BFS parent table and path
/// reconstruction never hold borrows into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcRef {
    pub node: NodeId,
    pub pos: usize,
}

/// Directed arc storage for one run.
///
/// Adjacency lists keep arcs in creation order; that order is semantically
/// load-bearing, because breadth-first search visits neighbors in it and
/// therefore picks a deterministic shortest augmenting path when several
/// of equal length exist.
///
/// Built fresh from the raw topology for each run and discarded on any
/// topology edit; after construction only `flow` (via [`augment`]) and the
/// highlight marks change.
///
/// [`augment`]: ResidualGraph::augment
#[derive(Debug, Clone, Default)]
pub struct ResidualGraph {
    adj: Vec<Vec<Arc>>,
}

impl ResidualGraph {
    /// Create a graph over `node_count` nodes with no arcs.
    pub fn new(node_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); node_count],
        }
    }

    /// Number of nodes (fixed at construction).
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Arcs leaving `node`, in creation order.
    pub fn arcs(&self, node: NodeId) -> &[Arc] {
        self.adj
            .get(node.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve an arc address.
    pub fn arc(&self, r: ArcRef) -> &Arc {
        &self.adj[r.node.as_usize()][r.pos]
    }

    /// Append a forward arc `from -> to` with the given capacity, together
    /// with its capacity-0 reverse arc in `to`'s list. The two arcs record
    /// each other's position for O(1) mutual lookup.
    pub fn add_arc_pair(&mut self, from: NodeId, to: NodeId, capacity: u32) {
        let fwd_pos = self.adj[from.as_usize()].len();
        // For a self-loop both arcs land in the same list, so the reverse
        // position is one past the forward one.
        let rev_pos = if from == to {
            fwd_pos + 1
        } else {
            self.adj[to.as_usize()].len()
        };
        self.adj[from.as_usize()].push(Arc {
            from,
            to,
            capacity,
            flow: 0,
            pair: rev_pos,
            highlighted: false,
        });
        self.adj[to.as_usize()].push(Arc {
            from: to,
            to: from,
            capacity: 0,
            flow: 0,
            pair: fwd_pos,
            highlighted: false,
        });
    }

    /// Push `amount` units of flow along the arc at `r`, debiting its
    /// paired reverse arc by the same amount. Callers must have checked
    /// `amount <= residual` (the engine's bottleneck computation does).
    pub fn augment(&mut self, r: ArcRef, amount: u32) {
        let (to, pair) = {
            let arc = &mut self.adj[r.node.as_usize()][r.pos];
            arc.flow += amount as i64;
            (arc.to, arc.pair)
        };
        self.adj[to.as_usize()][pair].flow -= amount as i64;
    }

    /// Mark or unmark an arc as part of the current augmenting path.
    pub fn set_highlight(&mut self, r: ArcRef, on: bool) {
        self.adj[r.node.as_usize()][r.pos].highlighted = on;
    }

    /// Total capacity of arcs leaving `node` (an upper bound on the max
    /// flow when `node` is the source).
    pub fn capacity_out(&self, node: NodeId) -> u64 {
        self.arcs(node).iter().map(|a| a.capacity as u64).sum()
    }

    /// Iterate every arc address in the graph, node by node.
    pub fn arc_refs(&self) -> impl Iterator<Item = ArcRef> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, list)| {
            (0..list.len()).map(move |pos| ArcRef {
                node: NodeId::from_index(i as u32),
                pos,
            })
        })
    }
}
