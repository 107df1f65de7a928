//! Step events emitted by the engine during a run.

use core::fmt;

use mf_core::NodeId;
use mf_graph::NodeRegistry;

/// One observable step of a max-flow run.
///
/// A run emits zero or more (`PathFound`, `FlowCommitted`) pairs in
/// augmentation order, followed by exactly one `NoPathFound` marking
/// termination. These are the only externally observable artifacts of a
/// run besides the final total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    /// A shortest augmenting path was found. `path` reads source to sink;
    /// `bottleneck` is the minimum residual capacity along it and is
    /// always positive.
    PathFound { path: Vec<NodeId>, bottleneck: u32 },

    /// The bottleneck amount was pushed along the path just reported.
    FlowCommitted { total_so_far: u64 },

    /// No augmenting path remains; the max-flow optimum is reached.
    NoPathFound,
}

impl StepEvent {
    /// Render the event the way the step log presents it, with node names
    /// taken from the registry.
    pub fn describe(&self, registry: &NodeRegistry) -> String {
        let name = |id: &NodeId| {
            registry
                .name(*id)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string())
        };
        match self {
            StepEvent::PathFound { path, bottleneck } => {
                let route: Vec<String> = path.iter().map(name).collect();
                format!(
                    "Path Found:\n  {}\n  Flow Added: {}",
                    route.join(" -> "),
                    bottleneck
                )
            }
            StepEvent::FlowCommitted { total_so_far } => {
                format!("  Total Flow: {total_so_far}")
            }
            StepEvent::NoPathFound => ">>> NO MORE PATHS FOUND.".to_string(),
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::PathFound { path, bottleneck } => {
                let route: Vec<String> = path.iter().map(|id| id.to_string()).collect();
                write!(f, "path [{}] bottleneck {}", route.join(" -> "), bottleneck)
            }
            StepEvent::FlowCommitted { total_so_far } => {
                write!(f, "committed, total {total_so_far}")
            }
            StepEvent::NoPathFound => write!(f, "no path found"),
        }
    }
}
