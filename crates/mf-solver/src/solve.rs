//! High-level solve interface: build the network, then run the engine.

use crate::engine::{FlowSummary, max_flow_with_progress};
use crate::error::SolverResult;
use crate::events::StepEvent;
use mf_graph::{FlowNetwork, NetworkBuilder, NodeRegistry, RawTopology};

/// Convert `topology` into a fresh residual network for the named
/// endpoints and saturate it.
///
/// This is the one-shot entry point: it performs the endpoint precondition
/// check (surfacing [`mf_graph::GraphError::MissingEndpoint`] before any
/// arc is created), builds the network, runs the engine, and returns both
/// the summary and the network so callers can inspect final arc flows.
pub fn solve(
    topology: &RawTopology,
    registry: &NodeRegistry,
    source: &str,
    sink: &str,
    mut progress: Option<&mut dyn FnMut(StepEvent)>,
) -> SolverResult<(FlowSummary, FlowNetwork)> {
    let mut net = NetworkBuilder::new(topology, registry).build(source, sink)?;

    let mut events = Vec::new();
    let total = max_flow_with_progress(
        &mut net.graph,
        net.source,
        net.sink,
        Some(&mut |event: StepEvent| {
            if let Some(cb) = progress.as_deref_mut() {
                cb(event.clone());
            }
            events.push(event);
        }),
    )?;

    Ok((FlowSummary { total, events }, net))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf_graph::GraphError;
    use crate::error::SolverError;

    fn setup(edges: &[(&str, &str, u32)]) -> (NodeRegistry, RawTopology) {
        let mut registry = NodeRegistry::new();
        let mut topology = RawTopology::new();
        for &(a, b, w) in edges {
            let a = registry.intern(a);
            let b = registry.intern(b);
            topology.upsert(a, b, w);
        }
        (registry, topology)
    }

    #[test]
    fn missing_endpoint_surfaces_before_any_work() {
        let (registry, topology) = setup(&[("A", "B", 1)]);
        let err = solve(&topology, &registry, "S", "B", None).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Graph(GraphError::MissingEndpoint { ref name }) if name == "S"
        ));
    }

    #[test]
    fn summary_and_network_agree_on_the_total() {
        let (registry, topology) = setup(&[("S", "A", 10), ("A", "B", 5), ("B", "T", 10)]);
        let (summary, net) = solve(&topology, &registry, "S", "T", None).unwrap();

        assert_eq!(summary.total, 5);
        // Flow leaving the source equals the reported total.
        let out: i64 = net.graph.arcs(net.source).iter().map(|a| a.flow).sum();
        assert_eq!(out, 5);
    }
}
