//! Graph-specific error types.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The configured source or sink name is not a registered node.
    /// Raised before any arc is created; a run must not start on this.
    #[error("Endpoint {name:?} is not a known node")]
    MissingEndpoint { name: String },

    /// A topology edge references a node index outside the registry.
    #[error("Node index {index} out of range (len={len})")]
    NodeOutOfRange { index: u32, len: usize },
}
