//! Property tests: invariants over randomized topologies, checked against
//! a brute-force min-cut reference on small graphs.

use proptest::prelude::*;

use mf_core::NodeId;
use mf_graph::{ArcRef, NetworkBuilder, NodeRegistry, RawTopology, ResidualGraph};
use mf_solver::max_flow;

const NODE_NAMES: [&str; 6] = ["S", "A", "B", "C", "D", "T"];

/// A random undirected topology over at most 6 nodes.
fn topology_strategy() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    prop::collection::vec(
        (0..NODE_NAMES.len(), 0..NODE_NAMES.len(), 0u32..20).prop_filter(
            "no self edges",
            |(a, b, _)| a != b,
        ),
        0..12,
    )
}

fn build(edges: &[(usize, usize, u32)]) -> (NodeRegistry, RawTopology) {
    let mut registry = NodeRegistry::new();
    // Register every name so source and sink always resolve.
    for name in NODE_NAMES {
        registry.intern(name);
    }
    let mut topology = RawTopology::new();
    for &(a, b, w) in edges {
        let a = registry.resolve(NODE_NAMES[a]).unwrap();
        let b = registry.resolve(NODE_NAMES[b]).unwrap();
        topology.upsert(a, b, w);
    }
    (registry, topology)
}

/// Minimum cut by subset enumeration: cheapest set of forward arcs leaving
/// any source side that contains the source and excludes the sink.
fn brute_force_min_cut(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> u64 {
    let n = graph.node_count();
    assert!(n <= 16, "enumeration only meant for small graphs");
    let mut best = u64::MAX;
    for mask in 0u32..(1 << n) {
        if mask & (1 << source.index()) == 0 || mask & (1 << sink.index()) != 0 {
            continue;
        }
        let mut cut = 0u64;
        for i in 0..n {
            if mask & (1 << i) == 0 {
                continue;
            }
            for arc in graph.arcs(NodeId::from_index(i as u32)) {
                if mask & (1 << arc.to.index()) == 0 {
                    cut += arc.capacity as u64;
                }
            }
        }
        best = best.min(cut);
    }
    best
}

proptest! {
    #[test]
    fn run_preserves_pairing_capacity_and_conservation(edges in topology_strategy()) {
        let (registry, topology) = build(&edges);
        let net = NetworkBuilder::new(&topology, &registry).build("S", "T").unwrap();
        let (source, sink) = (net.source, net.sink);
        let mut graph = net.graph;
        max_flow(&mut graph, source, sink).unwrap();

        for r in graph.arc_refs().collect::<Vec<_>>() {
            let arc = graph.arc(r);
            if arc.capacity > 0 {
                prop_assert!(arc.flow >= 0);
                prop_assert!(arc.flow <= arc.capacity as i64);
            }
            let rev = graph.arc(ArcRef { node: arc.to, pos: arc.pair_pos() });
            prop_assert_eq!(rev.flow, -arc.flow);
        }

        for i in 0..graph.node_count() {
            let id = NodeId::from_index(i as u32);
            if id == source || id == sink {
                continue;
            }
            let net_out: i64 = graph.arcs(id).iter().map(|a| a.flow).sum();
            prop_assert_eq!(net_out, 0);
        }
    }

    #[test]
    fn total_flow_matches_brute_force_min_cut(edges in topology_strategy()) {
        let (registry, topology) = build(&edges);
        let net = NetworkBuilder::new(&topology, &registry).build("S", "T").unwrap();
        let (source, sink) = (net.source, net.sink);
        let reference = brute_force_min_cut(&net.graph, source, sink);

        let mut graph = net.graph;
        let summary = max_flow(&mut graph, source, sink).unwrap();
        prop_assert_eq!(summary.total, reference);
    }

    #[test]
    fn event_sequence_shape_is_pairs_then_no_path(edges in topology_strategy()) {
        use mf_solver::StepEvent;

        let (registry, topology) = build(&edges);
        let net = NetworkBuilder::new(&topology, &registry).build("S", "T").unwrap();
        let (source, sink) = (net.source, net.sink);
        let mut graph = net.graph;
        let summary = max_flow(&mut graph, source, sink).unwrap();

        let events = &summary.events;
        prop_assert_eq!(events.last(), Some(&StepEvent::NoPathFound));
        prop_assert_eq!((events.len() - 1) % 2, 0);
        let mut running = 0u64;
        for pair in events[..events.len() - 1].chunks(2) {
            match pair {
                [StepEvent::PathFound { path, bottleneck }, StepEvent::FlowCommitted { total_so_far }] => {
                    prop_assert!(*bottleneck > 0);
                    prop_assert_eq!(path.first(), Some(&source));
                    prop_assert_eq!(path.last(), Some(&sink));
                    running += *bottleneck as u64;
                    prop_assert_eq!(*total_so_far, running);
                }
                other => prop_assert!(false, "unexpected event pair: {:?}", other),
            }
        }
        prop_assert_eq!(running, summary.total);
    }
}
