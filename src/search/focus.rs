//! Camera focus requests for the rendering surface
//!
//! Selecting an index entry never touches the graph. It produces a request
//! the rendering surface may act on, using the position its layout pass
//! last reported for the node.

use crate::graph::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pan duration in milliseconds
pub const CENTER_DURATION_MS: u32 = 1000;
/// Zoom factor applied on focus
pub const FOCUS_ZOOM: f64 = 8.0;
/// Zoom duration in milliseconds
pub const ZOOM_DURATION_MS: u32 = 2000;

/// Layout coordinates reported by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPosition {
    pub x: f64,
    pub y: f64,
}

/// Node positions keyed by id
pub type LayoutPositions = HashMap<NodeId, LayoutPosition>;

/// "Center and zoom to entity at (x, y)"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusRequest {
    pub node_id: NodeId,
    pub x: f64,
    pub y: f64,
    pub center_ms: u32,
    pub zoom: f64,
    pub zoom_ms: u32,
}

/// Build a focus request for `node`, if the layout has placed it
pub fn focus_request(node: &Node, positions: &LayoutPositions) -> Option<FocusRequest> {
    let position = positions.get(&node.id)?;
    if !position.x.is_finite() || !position.y.is_finite() {
        return None;
    }

    Some(FocusRequest {
        node_id: node.id.clone(),
        x: position.x,
        y: position.y,
        center_ms: CENTER_DURATION_MS,
        zoom: FOCUS_ZOOM,
        zoom_ms: ZOOM_DURATION_MS,
    })
}
