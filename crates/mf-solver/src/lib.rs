//! Shortest-augmenting-path max-flow solver with step events.
//!
//! This crate runs Edmonds-Karp over a [`mf_graph::ResidualGraph`] and
//! reports every step of the computation as a [`StepEvent`], so an external
//! observer (a renderer, a logger, a test) can follow the run without the
//! engine knowing anything about presentation or pacing.

pub mod engine;
pub mod error;
pub mod events;
pub mod solve;

pub use engine::{FlowSummary, max_flow, max_flow_with_progress};
pub use error::{SolverError, SolverResult};
pub use events::StepEvent;
pub use solve::solve;
