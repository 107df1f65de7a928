//! The Edmonds-Karp augmentation loop.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::error::{SolverError, SolverResult};
use crate::events::StepEvent;
use mf_core::NodeId;
use mf_graph::{ArcRef, ResidualGraph};

/// Final outcome of a run: the max flow and every event that was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSummary {
    pub total: u64,
    pub events: Vec<StepEvent>,
}

/// Run max flow over `graph`, collecting the full event sequence.
pub fn max_flow(
    graph: &mut ResidualGraph,
    source: NodeId,
    sink: NodeId,
) -> SolverResult<FlowSummary> {
    let mut events = Vec::new();
    let total = max_flow_with_progress(graph, source, sink, Some(&mut |e| events.push(e)))?;
    Ok(FlowSummary { total, events })
}

/// Run max flow over `graph`, reporting each step through `progress`.
///
/// The callback runs at exactly the emission points: after each shortest
/// augmenting path is found (with the path arcs highlighted in the graph),
/// after each augmentation is committed, and once at termination. The
/// highlight marks stay on the most recently found path until the next
/// path replaces them, so a view rendered between events or after the run
/// always shows the last reported path. Pass `None` to run silently.
///
/// Endpoints are checked up front; once the loop starts it cannot fail and
/// always terminates, since every augmentation strictly increases the
/// total, which is bounded by the capacity leaving the source.
pub fn max_flow_with_progress(
    graph: &mut ResidualGraph,
    source: NodeId,
    sink: NodeId,
    mut progress: Option<&mut dyn FnMut(StepEvent)>,
) -> SolverResult<u64> {
    check_endpoints(graph, source, sink)?;

    let mut emit = |event: StepEvent| {
        if let Some(cb) = progress.as_deref_mut() {
            cb(event);
        }
    };

    let mut total: u64 = 0;
    let mut prev_path: Vec<ArcRef> = Vec::new();
    loop {
        let Some(parents) = bfs(graph, source, sink) else {
            emit(StepEvent::NoPathFound);
            break;
        };

        // Walk discovering arcs back from the sink, then flip to read
        // source -> sink.
        let mut path_arcs: Vec<ArcRef> = Vec::new();
        let mut path_nodes: Vec<NodeId> = vec![sink];
        let mut bottleneck = u32::MAX;
        let mut curr = sink;
        while curr != source {
            let r = parents[curr.as_usize()]
                .expect("reached sink implies a chain of discovering arcs");
            let arc = graph.arc(r);
            bottleneck = bottleneck.min(arc.residual() as u32);
            curr = arc.from;
            path_arcs.push(r);
            path_nodes.push(curr);
        }
        path_arcs.reverse();
        path_nodes.reverse();

        for &r in &prev_path {
            graph.set_highlight(r, false);
        }
        for &r in &path_arcs {
            graph.set_highlight(r, true);
        }
        emit(StepEvent::PathFound {
            path: path_nodes,
            bottleneck,
        });

        for &r in &path_arcs {
            graph.augment(r, bottleneck);
        }
        total += bottleneck as u64;
        debug!(bottleneck, total, "augmented");
        emit(StepEvent::FlowCommitted {
            total_so_far: total,
        });
        prev_path = path_arcs;
    }

    info!(total, "max flow complete");
    Ok(total)
}

/// Breadth-first search for a shortest augmenting path.
///
/// Returns the discovering-arc table if the sink was reached, `None`
/// otherwise. An arc `(u, v)` discovers `v` iff `v` has no discovering arc
/// yet, `v` is not the source (the search never re-enters it, even through
/// an arc pointing back), and the arc has positive residual capacity.
/// Neighbors are visited in adjacency insertion order, which fixes the
/// tie-break among equal-length paths.
fn bfs(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> Option<Vec<Option<ArcRef>>> {
    let mut parents: Vec<Option<ArcRef>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        if u == sink {
            return Some(parents);
        }
        for (pos, arc) in graph.arcs(u).iter().enumerate() {
            let v = arc.to;
            if parents[v.as_usize()].is_none() && v != source && arc.residual() > 0 {
                parents[v.as_usize()] = Some(ArcRef { node: u, pos });
                queue.push_back(v);
            }
        }
    }
    None
}

fn check_endpoints(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> SolverResult<()> {
    let n = graph.node_count();
    if source.as_usize() >= n {
        return Err(SolverError::BadEndpoint {
            what: "source index out of range",
        });
    }
    if sink.as_usize() >= n {
        return Err(SolverError::BadEndpoint {
            what: "sink index out of range",
        });
    }
    if source == sink {
        return Err(SolverError::BadEndpoint {
            what: "source and sink are the same node",
        });
    }
    Ok(())
}
