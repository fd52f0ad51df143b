//! Flowchart layout engine: grid-positioned nodes with connection arrows.
//!
//! Also serves process diagrams, which lay out identically and then get a
//! restyle pass (solid strokes, light-green step boxes).

use tracing::debug;

use crate::consts::*;
use crate::model::{FlowchartSpec, Node, PositionTable};
use crate::shape::{Dash, GeoKind, GeoProps, Offset, Shape, Size};
use crate::style;

/// Lay out a flowchart description as a shape list.
///
/// Nodes are placed left-to-right, top-to-bottom on a grid whose column
/// count grows with the square root of the node count, capped at
/// [`GRID_MAX_COLS`]. Node *i*'s position depends only on its index and the
/// column count, never on other nodes' content.
#[must_use]
pub fn layout(spec: &FlowchartSpec) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if let Some(title) = &spec.title {
        shapes.push(Shape::title(TITLE_X, TITLE_Y, title));
    }

    let cols = grid_columns(spec.nodes.len());
    let mut positions = PositionTable::default();

    for (i, node) in spec.nodes.iter().enumerate() {
        let (x, y) = grid_position(i, cols);
        let geo = style::geometry_for(node.node_type);
        let (w, h) = style::node_size(geo);
        let text = node.text.clone().unwrap_or_else(|| format!("Node {}", i + 1));
        shapes.push(Shape::geo(x, y, GeoProps::node(w, h, geo, style::color_for(node.node_type), &text)));
        positions.record(node_id(node, i), (x, y));
    }

    for conn in &spec.connections {
        let (Some(from), Some(to)) = (positions.resolve(&conn.from), positions.resolve(&conn.to)) else {
            debug!(from = %conn.from, to = %conn.to, "dropping connection with unresolved endpoint");
            continue;
        };

        if let Some(label) = conn.label.as_deref() {
            if !label.is_empty() {
                let mid_x = f64::midpoint(from.0, to.0);
                let mid_y = f64::midpoint(from.1, to.1);
                shapes.push(Shape::label(mid_x + LABEL_OFFSET, mid_y - LABEL_OFFSET, label));
            }
        }

        // The arrow anchors at the source node's visual center but its head
        // offset is computed from the raw top-left anchors. The resulting
        // skew is what the renderer has always been fed; keep it.
        shapes.push(Shape::arrow(
            from.0 + ARROW_ANCHOR_DX,
            from.1 + ARROW_ANCHOR_DY,
            Offset { x: to.0 - from.0, y: to.1 - from.1 },
            style::BLACK,
            Dash::Draw,
            Size::M,
        ));
    }

    shapes
}

/// Restyle a laid-out flowchart as a process diagram: every node gets a
/// solid stroke, and plain step boxes turn light-green.
pub fn restyle_as_process(shapes: &mut [Shape]) {
    for shape in shapes {
        if let Shape::Geo { props, .. } = shape {
            props.dash = Some(Dash::Solid);
            if props.geo == GeoKind::Rectangle {
                props.color = style::LIGHT_GREEN.to_owned();
            }
        }
    }
}

/// Column count for `node_count` nodes: `ceil(sqrt(n))` clamped to
/// `1..=GRID_MAX_COLS`.
#[must_use]
pub fn grid_columns(node_count: usize) -> usize {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let root = (node_count as f64).sqrt().ceil() as usize;
    root.clamp(1, GRID_MAX_COLS)
}

/// Top-left anchor of the `index`-th node in a `cols`-wide grid.
#[must_use]
pub fn grid_position(index: usize, cols: usize) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let (col, row) = ((index % cols) as f64, (index / cols) as f64);
    (GRID_ORIGIN_X + col * GRID_COL_WIDTH, GRID_ORIGIN_Y + row * GRID_ROW_HEIGHT)
}

fn node_id(node: &Node, index: usize) -> String {
    node.id.clone().unwrap_or_else(|| (index + 1).to_string())
}

#[cfg(test)]
#[path = "flowchart_test.rs"]
mod tests;
