//! Conversion of the undirected input topology into a residual network.

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::residual::ResidualGraph;
use crate::topology::{NodeRegistry, RawTopology};
use mf_core::NodeId;

/// A residual graph together with the endpoints it was built for.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    pub graph: ResidualGraph,
    pub source: NodeId,
    pub sink: NodeId,
}

/// Applies the three conversion rules turning undirected edges into
/// directed arcs:
///
/// 1. An edge touching the source becomes a single arc source -> other.
/// 2. Otherwise, an edge touching the sink becomes a single arc
///    other -> sink.
/// 3. Otherwise (internal edge) it becomes two arcs, one per direction,
///    each with the full edge weight.
///
/// Rules 1 and 2 fix the direction regardless of how the edge was entered;
/// an edge directly between source and sink falls under rule 1. Every arc
/// is created with its capacity-0 reverse pair.
#[derive(Debug)]
pub struct NetworkBuilder<'a> {
    topology: &'a RawTopology,
    registry: &'a NodeRegistry,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(topology: &'a RawTopology, registry: &'a NodeRegistry) -> Self {
        Self { topology, registry }
    }

    /// Build a fresh residual network for the named endpoints.
    ///
    /// Fails with [`GraphError::MissingEndpoint`] before creating any arc
    /// if either name is unregistered.
    pub fn build(&self, source: &str, sink: &str) -> GraphResult<FlowNetwork> {
        let source = self.resolve(source)?;
        let sink = self.resolve(sink)?;
        self.check_edge_endpoints()?;

        let mut graph = ResidualGraph::new(self.registry.len());
        for edge in self.topology.edges() {
            let (a, b, cap) = (edge.a, edge.b, edge.weight);
            if a == source || b == source {
                // Rule 1: pin the direction away from the source.
                let other = if a == source { b } else { a };
                graph.add_arc_pair(source, other, cap);
                debug!(
                    from = self.registry.name(source),
                    to = self.registry.name(other),
                    cap,
                    "rule 1 (source edge)"
                );
            } else if a == sink || b == sink {
                // Rule 2: pin the direction into the sink.
                let other = if a == sink { b } else { a };
                graph.add_arc_pair(other, sink, cap);
                debug!(
                    from = self.registry.name(other),
                    to = self.registry.name(sink),
                    cap,
                    "rule 2 (sink edge)"
                );
            } else {
                // Rule 3: internal edge, independent capacity each way.
                graph.add_arc_pair(a, b, cap);
                graph.add_arc_pair(b, a, cap);
                debug!(
                    a = self.registry.name(a),
                    b = self.registry.name(b),
                    cap,
                    "rule 3 (internal edge, bidirectional)"
                );
            }
        }

        Ok(FlowNetwork {
            graph,
            source,
            sink,
        })
    }

    /// Every edge endpoint must name a registered node; a topology built
    /// against a different registry is rejected before any arc exists.
    fn check_edge_endpoints(&self) -> GraphResult<()> {
        let len = self.registry.len();
        for edge in self.topology.edges() {
            for id in [edge.a, edge.b] {
                if id.as_usize() >= len {
                    return Err(GraphError::NodeOutOfRange {
                        index: id.index(),
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> GraphResult<NodeId> {
        self.registry
            .resolve(name)
            .ok_or_else(|| GraphError::MissingEndpoint {
                name: name.to_string(),
            })
    }
}
