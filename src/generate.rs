//! Public entry point: upstream model output + diagram kind → shape list.
//!
//! The caller always receives a renderable shape list. Parse and layout run
//! inside a fallible pipeline, and any failure collapses to a single red
//! error label — graceful degradation at every layer, never a raised fault.

use tracing::{info, warn};

use crate::model::{DiagramKind, LlmResponse};
use crate::shape::Shape;
use crate::{flowchart, mindmap, parse};

/// Errors produced while turning model output into a diagram.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A structured payload was present but did not match the expected
    /// diagram description shape.
    #[error("invalid diagram description: {0}")]
    InvalidDescription(#[from] serde_json::Error),
}

/// Generate the shape list for one request.
///
/// Total function: malformed input degrades to text heuristics, connections
/// with unknown endpoints are dropped, and any remaining failure yields the
/// single-element error shape list.
#[must_use]
pub fn generate_shapes(response: &LlmResponse, kind: DiagramKind) -> Vec<Shape> {
    let result = match kind {
        DiagramKind::Flowchart | DiagramKind::General => flowchart_shapes(response),
        DiagramKind::Process => process_shapes(response),
        DiagramKind::MindMap => mind_map_shapes(response),
    };

    match result {
        Ok(shapes) => {
            info!(?kind, shape_count = shapes.len(), "diagram generated");
            shapes
        }
        Err(err) => {
            warn!(?kind, %err, "diagram generation failed; emitting error shape");
            vec![Shape::error_text(&error_message(kind, &err))]
        }
    }
}

fn flowchart_shapes(response: &LlmResponse) -> Result<Vec<Shape>, GenerateError> {
    let spec = parse::flowchart(response)?;
    Ok(flowchart::layout(&spec))
}

fn process_shapes(response: &LlmResponse) -> Result<Vec<Shape>, GenerateError> {
    let spec = parse::process(response)?;
    let mut shapes = flowchart::layout(&spec);
    flowchart::restyle_as_process(&mut shapes);
    Ok(shapes)
}

fn mind_map_shapes(response: &LlmResponse) -> Result<Vec<Shape>, GenerateError> {
    let spec = parse::mind_map(response)?;
    Ok(mindmap::layout(&spec))
}

fn error_message(kind: DiagramKind, err: &GenerateError) -> String {
    match kind {
        DiagramKind::Flowchart | DiagramKind::General => format!("Error generating diagram: {err}"),
        DiagramKind::Process => format!("Error generating process diagram: {err}"),
        DiagramKind::MindMap => format!("Error generating mind map: {err}"),
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
