//! Raw node/edge records as delivered by the `/network/` and `/ontology/`
//! endpoints.
//!
//! These types are deliberately permissive: missing ids, missing endpoints
//! and unknown categories all deserialize, and the builder decides what to
//! keep.

use super::edge::{Endpoint, ResolvedEndpoint};
use super::types::Category;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw node record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireNode")]
pub struct RawNode {
    pub id: Option<String>,

    pub label: Option<String>,

    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RawNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: Category) -> Self {
        RawNode {
            id: Some(id.into()),
            label: Some(label.into()),
            category,
            source: None,
        }
    }
}

/// Raw edge record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireEdge")]
pub struct RawEdge {
    pub from: Option<Endpoint>,

    pub to: Option<Endpoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RawEdge {
    pub fn new(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        RawEdge {
            from: Some(from.into()),
            to: Some(to.into()),
            label: None,
        }
    }

    pub fn labelled(from: impl Into<Endpoint>, to: impl Into<Endpoint>, label: impl Into<String>) -> Self {
        RawEdge {
            from: Some(from.into()),
            to: Some(to.into()),
            label: Some(label.into()),
        }
    }
}

/// Node record as it arrives. The `/network/` endpoint sends the category
/// as `group`; both keys may be present.
#[derive(Deserialize)]
struct WireNode {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    label: Option<Value>,
    #[serde(default)]
    category: Option<Value>,
    #[serde(default)]
    group: Option<Value>,
    #[serde(default)]
    source: Option<Value>,
}

impl From<WireNode> for RawNode {
    fn from(wire: WireNode) -> Self {
        let category = [wire.category, wire.group]
            .iter()
            .flatten()
            .map(Category::from_wire)
            .find(|category| *category != Category::Unknown)
            .unwrap_or_default();

        RawNode {
            id: wire.id.and_then(scalar_text),
            label: wire.label.and_then(scalar_text),
            category,
            source: wire.source.and_then(scalar_text),
        }
    }
}

/// Edge record as it arrives. A layout pass may write `source`/`target`
/// next to `from`/`to`; the `from`/`to` pair wins when both are usable.
#[derive(Deserialize)]
struct WireEdge {
    #[serde(default)]
    from: Option<Value>,
    #[serde(default)]
    to: Option<Value>,
    #[serde(default)]
    source: Option<Value>,
    #[serde(default)]
    target: Option<Value>,
    #[serde(default)]
    label: Option<Value>,
}

impl From<WireEdge> for RawEdge {
    fn from(wire: WireEdge) -> Self {
        RawEdge {
            from: wire.from.and_then(endpoint).or_else(|| wire.source.and_then(endpoint)),
            to: wire.to.and_then(endpoint).or_else(|| wire.target.and_then(endpoint)),
            label: wire.label.and_then(scalar_text),
        }
    }
}

/// Strings pass through, numbers become their decimal text, anything
/// else is treated as absent
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Endpoint from a plain id or from a node object carrying an `id`
fn endpoint(value: Value) -> Option<Endpoint> {
    match value {
        Value::Object(mut object) => {
            let id = object.remove("id").and_then(scalar_text)?;
            Some(Endpoint::Resolved(ResolvedEndpoint {
                id,
                x: object.get("x").and_then(Value::as_f64),
                y: object.get("y").and_then(Value::as_f64),
            }))
        }
        other => scalar_text(other).map(Endpoint::Id),
    }
}

/// A graph response body: `{ nodes: [...], edges: [...] }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl GraphPayload {
    pub fn new(nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> Self {
        GraphPayload { nodes, edges }
    }
}
