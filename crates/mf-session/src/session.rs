//! The owning session: topology lifecycle, boundary validation, runs.

use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::view::{ArcSnapshot, NodeSnapshot};
use mf_core::NodeId;
use mf_graph::{FlowNetwork, NodeRegistry, RawTopology, UpsertOutcome};
use mf_solver::StepEvent;

/// Owns the registry and topology for one editing/solving session.
///
/// Lifecycle contract: every topology edit discards any previously built
/// network and any stored run artifacts, so a run always operates on a
/// freshly built residual graph. Mutation during a run is impossible by
/// construction: [`run`](Session::run) takes `&mut self` for its whole
/// duration, so no other borrow can touch the topology until it returns.
#[derive(Debug, Default)]
pub struct Session {
    registry: NodeRegistry,
    topology: RawTopology,
    network: Option<FlowNetwork>,
    last_events: Vec<StepEvent>,
    last_total: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update an undirected edge, with both inputs still in textual
    /// form. Names are trimmed and uppercased; empty names, edges whose
    /// endpoints normalize to the same node, and weights that do not
    /// parse as a non-negative integer are rejected before anything
    /// reaches the topology.
    pub fn add_edge_text(&mut self, a: &str, b: &str, weight: &str) -> SessionResult<UpsertOutcome> {
        let weight: u32 = weight
            .trim()
            .parse()
            .map_err(|_| SessionError::InvalidInput {
                what: format!("weight {:?} must be a non-negative integer", weight.trim()),
            })?;
        self.add_edge(a, b, weight)
    }

    /// Add or update an undirected edge with an already-validated weight.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u32) -> SessionResult<UpsertOutcome> {
        let a = normalize_name(a)?;
        let b = normalize_name(b)?;
        if a == b {
            return Err(SessionError::InvalidInput {
                what: format!("edge endpoints must differ (got {a:?} twice)"),
            });
        }
        let a = self.registry.intern(&a);
        let b = self.registry.intern(&b);

        let outcome = self.topology.upsert(a, b, weight);
        debug!(?outcome, weight, "edge upserted");
        self.invalidate();
        Ok(outcome)
    }

    /// Run max flow from `source` to `sink`, collecting the event log.
    ///
    /// Builds a fresh residual network (failing with `MissingEndpoint`
    /// before any arc exists if an endpoint name is unknown), saturates
    /// it, stores the network and events for inspection, and returns the
    /// total flow.
    pub fn run(&mut self, source: &str, sink: &str) -> SessionResult<u64> {
        self.run_with_progress(source, sink, None)
    }

    /// As [`run`](Session::run), additionally reporting each step through
    /// `progress` as it happens (for incremental display).
    pub fn run_with_progress(
        &mut self,
        source: &str,
        sink: &str,
        progress: Option<&mut dyn FnMut(StepEvent)>,
    ) -> SessionResult<u64> {
        let source = normalize_name(source)?;
        let sink = normalize_name(sink)?;

        let (summary, net) =
            mf_solver::solve(&self.topology, &self.registry, &source, &sink, progress)?;
        info!(%source, %sink, total = summary.total, "run complete");

        self.network = Some(net);
        self.last_events = summary.events;
        self.last_total = Some(summary.total);
        Ok(summary.total)
    }

    /// Discard the built network and run artifacts, keeping the topology.
    pub fn reset_flow(&mut self) {
        self.invalidate();
    }

    /// Full reset: edges and nodes both go.
    pub fn clear(&mut self) {
        self.topology.clear();
        self.registry.clear();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.network = None;
        self.last_events.clear();
        self.last_total = None;
    }

    /// Registered nodes, in index order.
    pub fn nodes(&self) -> Vec<NodeSnapshot> {
        self.registry
            .iter()
            .map(|(id, name)| NodeSnapshot {
                id,
                name: name.to_string(),
            })
            .collect()
    }

    /// Display name for a node index, if registered.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.registry.name(id)
    }

    /// Read-only access to the registry, for rendering events and labels.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Number of edges currently in the topology.
    pub fn edge_count(&self) -> usize {
        self.topology.len()
    }

    /// Arcs of the most recently built network, or empty when no network
    /// is current (never run, or invalidated by an edit).
    pub fn arcs(&self) -> Vec<ArcSnapshot> {
        let Some(net) = &self.network else {
            return Vec::new();
        };
        net.graph
            .arc_refs()
            .map(|r| {
                let arc = net.graph.arc(r);
                let pair = net.graph.arc(mf_graph::ArcRef {
                    node: arc.to,
                    pos: arc.pair_pos(),
                });
                ArcSnapshot {
                    from: arc.from,
                    from_name: self.name_or_index(arc.from),
                    to: arc.to,
                    to_name: self.name_or_index(arc.to),
                    capacity: arc.capacity,
                    flow: arc.flow,
                    highlighted: arc.is_highlighted() || pair.is_highlighted(),
                }
            })
            .collect()
    }

    /// Event log of the most recent run (empty if none is current).
    pub fn last_events(&self) -> &[StepEvent] {
        &self.last_events
    }

    /// Total flow of the most recent run, if one is current.
    pub fn last_total(&self) -> Option<u64> {
        self.last_total
    }

    fn name_or_index(&self, id: NodeId) -> String {
        self.registry
            .name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

/// Trim and uppercase a node name, rejecting empty results.
fn normalize_name(name: &str) -> SessionResult<String> {
    let name = name.trim().to_uppercase();
    if name.is_empty() {
        return Err(SessionError::InvalidInput {
            what: "node name must not be empty".to_string(),
        });
    }
    Ok(name)
}
