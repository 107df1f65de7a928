//! Session-level error aggregation.

use mf_graph::GraphError;
use mf_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Boundary rejection: malformed weight or empty node name. Never
    /// reaches the topology.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl SessionError {
    /// Whether this is the missing source/sink precondition failure.
    pub fn is_missing_endpoint(&self) -> bool {
        matches!(
            self,
            SessionError::Graph(GraphError::MissingEndpoint { .. })
                | SessionError::Solver(SolverError::Graph(GraphError::MissingEndpoint { .. }))
        )
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
