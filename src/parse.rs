//! Parsing strategies for upstream model output.
//!
//! Each diagram kind runs the same prioritized sequence — the first strategy
//! that applies wins:
//!
//! 1. structured: the response is already a JSON value → typed decode;
//! 2. embedded: the response is text containing a `{…}` substring that
//!    parses as JSON → typed decode of that substring;
//! 3. heuristic: line-by-line extraction from free text (infallible).
//!
//! A decode failure in (1) or (2) is a real error — the payload claimed to
//! be structured and wasn't — and surfaces as the uniform error shape. Only
//! the *absence* of parseable JSON falls through to heuristics.

use tracing::debug;

use crate::consts::{MAX_BRANCH_TOPICS, MAX_TEXT_NODES, MAX_TOPICS, MAX_TOPIC_LEN, MIN_TOPICS};
use crate::model::{Branch, Connection, FlowchartSpec, LlmResponse, MindMapSpec, Node, NodeType, ProcessSpec};
use crate::style;

/// Labels marking a flowchart step line, matched case-insensitively anywhere
/// in the line.
const STEP_LABELS: [&str; 5] = ["node:", "step:", "process:", "action:", "decision:"];

/// Labels marking the central mind-map topic.
const CENTRAL_LABELS: [&str; 6] =
    ["main topic:", "central concept:", "central idea:", "main idea:", "central:", "root:"];

/// Labels marking a mind-map branch line.
const BRANCH_LABELS: [&str; 3] = ["main branch:", "branch:", "primary:"];

/// Labels marking a mind-map sub-topic line.
const SUB_LABELS: [&str; 3] = ["sub-topic:", "sub branch:", "secondary:"];

/// Normalize a response into a flowchart description.
///
/// # Errors
///
/// Returns the decode error when a structured payload does not match the
/// flowchart description shape.
pub fn flowchart(response: &LlmResponse) -> Result<FlowchartSpec, serde_json::Error> {
    match response {
        LlmResponse::Json(value) => serde_json::from_value(value.clone()),
        LlmResponse::Text(text) => match embedded_json(text) {
            Some(value) => serde_json::from_value(value),
            None => Ok(flowchart_from_text(text)),
        },
    }
}

/// Normalize a response into a process-diagram description, flattened to the
/// flowchart shape the layout engine consumes.
///
/// # Errors
///
/// Returns the decode error when a structured payload does not match the
/// process description shape.
pub fn process(response: &LlmResponse) -> Result<FlowchartSpec, serde_json::Error> {
    match response {
        LlmResponse::Json(value) => {
            serde_json::from_value::<ProcessSpec>(value.clone()).map(ProcessSpec::into_flowchart)
        }
        LlmResponse::Text(text) => match embedded_json(text) {
            Some(value) => serde_json::from_value::<ProcessSpec>(value).map(ProcessSpec::into_flowchart),
            None => Ok(flowchart_from_text(text)),
        },
    }
}

/// Normalize a response into a mind-map description.
///
/// # Errors
///
/// Returns the decode error when a structured payload does not match the
/// mind-map description shape.
pub fn mind_map(response: &LlmResponse) -> Result<MindMapSpec, serde_json::Error> {
    match response {
        LlmResponse::Json(value) => serde_json::from_value(value.clone()),
        LlmResponse::Text(text) => match embedded_json(text) {
            Some(value) => serde_json::from_value(value),
            None => Ok(mind_map_from_text(text)),
        },
    }
}

/// Extract the JSON object embedded in free text, if any: the substring from
/// the first `{` to the last `}`. Not-quite-JSON never propagates — the
/// caller falls back to heuristics.
fn embedded_json(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(%err, "brace-delimited substring is not JSON; using text heuristics");
            None
        }
    }
}

// ── Flowchart heuristics ────────────────────────────────────────

/// Build a flowchart description from unstructured text: extract step labels
/// and chain them in source order. No title — the text gave us none.
fn flowchart_from_text(text: &str) -> FlowchartSpec {
    let labels = extract_step_labels(text);
    debug!(node_count = labels.len(), "flowchart built from text heuristics");

    let nodes = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Node {
            id: Some(format!("node-{i}")),
            text: Some(label.clone()),
            node_type: infer_node_type(label),
            color: None,
        })
        .collect();

    let connections = (1..labels.len())
        .map(|i| Connection { from: format!("node-{}", i - 1), to: format!("node-{i}"), label: None })
        .collect();

    FlowchartSpec { title: None, description: String::new(), nodes, connections }
}

/// Pull step texts out of free text, trying progressively looser patterns:
/// explicit step labels, then list items, then bare non-empty lines.
fn extract_step_labels(text: &str) -> Vec<String> {
    let mut found: Vec<String> = text
        .lines()
        .filter_map(|line| label_suffix(line, &STEP_LABELS))
        .map(ToOwned::to_owned)
        .collect();
    if !found.is_empty() {
        return found;
    }

    found = text
        .lines()
        .filter_map(|line| list_item_text(line.trim()))
        .map(ToOwned::to_owned)
        .collect();
    if !found.is_empty() {
        return found;
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_TEXT_NODES)
        .map(ToOwned::to_owned)
        .collect()
}

/// Guess a node type from its text so the fallback path still gets start/end
/// ellipses and decision diamonds.
fn infer_node_type(text: &str) -> NodeType {
    let lower = text.to_ascii_lowercase();
    if lower.contains("decision") || lower.contains("if") || lower.contains('?') {
        NodeType::Decision
    } else if lower.contains("start") || lower.contains("begin") {
        NodeType::Start
    } else if lower.contains("end") || lower.contains("finish") {
        NodeType::End
    } else {
        NodeType::Process
    }
}

// ── Mind-map heuristics ─────────────────────────────────────────

/// Build a mind-map description from unstructured text. This path is
/// deliberately shallower than the structured one: a violet central topic,
/// palette-colored branches, no sub-topic tier, no title.
fn mind_map_from_text(text: &str) -> MindMapSpec {
    let topics = extract_mind_map_topics(text);
    debug!(topic_count = topics.len(), "mind map built from text heuristics");

    let central_text = topics.first().cloned().unwrap_or_default();
    let branches = topics
        .iter()
        .skip(1)
        .take(MAX_BRANCH_TOPICS)
        .map(|topic| Branch { id: None, text: Some(topic.clone()), color: None, nodes: Vec::new() })
        .collect();

    MindMapSpec {
        title: None,
        description: String::new(),
        central_node: Node {
            id: Some("center".to_owned()),
            text: Some(central_text),
            node_type: NodeType::Process,
            color: Some(style::VIOLET.to_owned()),
        },
        branches,
        connections: Vec::new(),
    }
}

/// Collect mind-map topics from free text: central topic first, then branch
/// and sub-topic labels, backfilled from remaining short lines when the
/// labeled harvest is thin. Capped at one central plus eight branches.
fn extract_mind_map_topics(text: &str) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    // Trimmed lines that already produced a topic. Later passes and backfill
    // skip them, so one line never contributes twice — in particular the
    // central line can't reappear as a branch.
    let mut consumed: Vec<&str> = Vec::new();

    match text.lines().find(|line| label_suffix(line, &CENTRAL_LABELS).is_some()) {
        Some(line) => {
            if let Some(topic) = label_suffix(line, &CENTRAL_LABELS) {
                topics.push(topic.to_owned());
            }
            consumed.push(line.trim());
        }
        None => {
            let first = text.trim().lines().next().unwrap_or_default().trim();
            topics.push(first.to_owned());
            consumed.push(first);
        }
    }

    for line in text.lines() {
        let trimmed = line.trim();
        if consumed.contains(&trimmed) {
            continue;
        }
        let captured = prefix_label_suffix(trimmed, &BRANCH_LABELS).or_else(|| list_item_text(trimmed));
        if let Some(topic) = captured {
            if !topic.is_empty() && topic.chars().count() < MAX_TOPIC_LEN {
                topics.push(topic.to_owned());
                consumed.push(trimmed);
            }
        }
    }

    for line in text.lines() {
        let trimmed = line.trim();
        if consumed.contains(&trimmed) {
            continue;
        }
        if let Some(topic) = prefix_label_suffix(trimmed, &SUB_LABELS) {
            topics.push(topic.to_owned());
            consumed.push(trimmed);
        }
    }

    if topics.len() < MIN_TOPICS {
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.chars().count() >= MAX_TOPIC_LEN
                || consumed.contains(&trimmed)
                || topics.iter().any(|topic| topic == trimmed)
            {
                continue;
            }
            topics.push(trimmed.to_owned());
            if topics.len() >= MAX_TOPICS {
                break;
            }
        }
    }

    topics
}

// ── Line scanning ───────────────────────────────────────────────

/// Find the earliest of `labels` in the line (case-insensitive, anywhere in
/// the line) and return the trimmed text after it. Longer labels win ties so
/// `main branch:` is never misread as `branch:`.
fn label_suffix<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let lower = line.to_ascii_lowercase();
    let mut best: Option<(usize, usize)> = None;
    for label in labels {
        if let Some(idx) = lower.find(label) {
            let candidate = (idx, label.len());
            let better = match best {
                None => true,
                Some((best_idx, best_len)) => idx < best_idx || (idx == best_idx && label.len() > best_len),
            };
            if better {
                best = Some(candidate);
            }
        }
    }
    best.map(|(idx, len)| line[idx + len..].trim())
}

/// Like [`label_suffix`] but anchored at the start of the (pre-trimmed) line.
fn prefix_label_suffix<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let lower = line.to_ascii_lowercase();
    labels
        .iter()
        .find(|label| lower.starts_with(*label))
        .map(|label| line[label.len()..].trim())
}

/// Return the text of a `1.` / `*` / `-` list item, if the (pre-trimmed)
/// line is one.
fn list_item_text(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('*').or_else(|| line.strip_prefix('-')) {
        return Some(rest.trim());
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            return Some(rest.trim());
        }
    }
    None
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
