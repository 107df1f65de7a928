//! Read-only snapshot types for presentation layers.

use mf_core::NodeId;
use serde::Serialize;

/// One registered node: stable index plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub name: String,
}

/// One directed arc of the most recently built network.
///
/// Enough for a renderer to draw edges and labels; node placement is the
/// renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArcSnapshot {
    pub from: NodeId,
    pub from_name: String,
    pub to: NodeId,
    pub to_name: String,
    pub capacity: u32,
    pub flow: i64,
    /// Whether this arc or its paired reverse arc is part of the path most
    /// recently reported by a `PathFound` event.
    pub highlighted: bool,
}
