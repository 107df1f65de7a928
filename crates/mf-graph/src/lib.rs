//! mf-graph: graph/model layer for the max-flow workspace.
//!
//! Provides:
//! - `NodeRegistry`: interns node display names to dense 0-based indices
//! - `RawTopology`: the undirected, weighted edge list entered by the user
//! - `ResidualGraph`: directed arc arena with paired reverse arcs
//! - `NetworkBuilder`: converts a topology into a residual network for a
//!   chosen source and sink
//!
//! # Example
//!
//! ```
//! use mf_graph::{NetworkBuilder, NodeRegistry, RawTopology};
//!
//! let mut registry = NodeRegistry::new();
//! let mut topology = RawTopology::new();
//! let s = registry.intern("S");
//! let t = registry.intern("T");
//! topology.upsert(s, t, 7);
//!
//! let net = NetworkBuilder::new(&topology, &registry)
//!     .build("S", "T")
//!     .unwrap();
//! assert_eq!(net.graph.arcs(net.source).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod residual;
pub mod topology;

// Re-exports for ergonomics
pub use builder::{FlowNetwork, NetworkBuilder};
pub use error::{GraphError, GraphResult};
pub use residual::{Arc, ArcRef, ResidualGraph};
pub use topology::{NodeRegistry, RawEdge, RawTopology, UpsertOutcome};
