//! Typed diagram descriptions: the normalized input consumed by the layout
//! engines.
//!
//! These types sit at the model boundary — they deserialize whatever JSON the
//! upstream model produced, so every field is optional or defaulted. A
//! missing field is never an error; only a type-level mismatch (e.g. `nodes`
//! holding a number) fails decoding, and the caller converts that into the
//! uniform error shape.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

/// Which diagram family a request asks for. Selects the description type and
/// layout engine; `general` is handled as a flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Flowchart,
    Process,
    MindMap,
    General,
}

/// Raw upstream model output: either a structured JSON value or free text.
///
/// Untagged so that a JSON string deserializes as `Text` and anything
/// structured as `Json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LlmResponse {
    Text(String),
    Json(serde_json::Value),
}

impl From<&str> for LlmResponse {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<serde_json::Value> for LlmResponse {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Semantic role of a flowchart node. Unknown strings decode as `Process`
/// rather than failing, matching the everything-else-is-a-box styling rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeType {
    Start,
    End,
    #[default]
    Process,
    Decision,
    Input,
    Document,
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "start" => Self::Start,
            "end" => Self::End,
            "decision" => Self::Decision,
            "input" => Self::Input,
            "document" => Self::Document,
            _ => Self::Process,
        }
    }
}

/// A single diagram node. Identity is the `id`; nodes without one are
/// assigned a positional default at layout time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A directed edge between two node ids. Duplicate edges are allowed and all
/// drawn; an endpoint that never resolves drops the edge, silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A flowchart: nodes in source order plus directed connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowchartSpec {
    /// Absent only on the heuristic text path, which emits no title shape.
    #[serde(default = "default_flowchart_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

fn default_flowchart_title() -> Option<String> {
    Some("Flowchart".to_owned())
}

/// A named group of process steps. Grouping is descriptive metadata only —
/// it has no effect on layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Node>,
}

/// A process diagram: phases of steps, flattened to a flowchart for layout.
/// Also accepts a flat `nodes` list, which older model prompts produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    #[serde(default = "default_flowchart_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl ProcessSpec {
    /// Flatten to the flowchart shape the layout engine consumes: all phase
    /// steps concatenated in phase order, or the flat `nodes` list when no
    /// phases were given.
    #[must_use]
    pub fn into_flowchart(self) -> FlowchartSpec {
        let nodes = if self.phases.is_empty() {
            self.nodes
        } else {
            self.phases.into_iter().flat_map(|phase| phase.steps).collect()
        };
        FlowchartSpec {
            title: self.title,
            description: self.description,
            nodes,
            connections: self.connections,
        }
    }
}

/// A mind-map branch: itself a positioned node plus a cluster of sub-topics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// A mind map: one central topic, radial branches, optional cross-links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMapSpec {
    /// Absent only on the heuristic text path, which emits no title shape.
    #[serde(default = "default_mind_map_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "centralNode", default)]
    pub central_node: Node,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

fn default_mind_map_title() -> Option<String> {
    Some("Mind Map".to_owned())
}

/// Anchor lookup for connection resolution.
///
/// Node identity must be unique for an endpoint to resolve: recording the
/// same id twice poisons it, so connections referencing an ambiguous id are
/// dropped rather than attached to an arbitrary occurrence.
#[derive(Debug, Default)]
pub(crate) struct PositionTable {
    anchors: HashMap<String, Option<(f64, f64)>>,
}

impl PositionTable {
    pub(crate) fn record(&mut self, id: String, anchor: (f64, f64)) {
        match self.anchors.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(Some(anchor));
            }
            Entry::Occupied(mut entry) => {
                entry.insert(None);
            }
        }
    }

    pub(crate) fn resolve(&self, id: &str) -> Option<(f64, f64)> {
        self.anchors.get(id).copied().flatten()
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
