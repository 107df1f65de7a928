//! Error types for solver operations.

use mf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur before a run starts.
///
/// Once the engine is running it cannot fail: it always terminates with a
/// trailing `NoPathFound` event and a final total.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Bad endpoint: {what}")]
    BadEndpoint { what: &'static str },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;
