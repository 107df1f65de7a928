//! mf-session: the owning application layer around the max-flow core.
//!
//! A [`Session`] holds the node registry and raw topology, validates user
//! input at the boundary, discards stale networks whenever the topology
//! changes, and exposes read-only views for a presentation layer. The
//! algorithmic crates stay free of any input-parsing or lifecycle concerns.

pub mod error;
pub mod session;
pub mod view;

pub use error::{SessionError, SessionResult};
pub use session::Session;
pub use view::{ArcSnapshot, NodeSnapshot};
