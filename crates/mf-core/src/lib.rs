//! mf-core: stable foundation for the max-flow workspace.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)

pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
