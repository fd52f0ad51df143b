//! Shape/style policy: the single source of truth for how semantic node
//! roles map to geometry and color.
//!
//! Both layout engines and both parsing paths (structured and heuristic)
//! resolve styling through this module, so the two can never drift apart.
//! Colors are the renderer's named palette entries, passed through as
//! strings on the wire.

use crate::consts::{DECISION_H, DECISION_W, NODE_H, NODE_W};
use crate::model::NodeType;
use crate::shape::GeoKind;

pub const BLACK: &str = "black";
pub const BLUE: &str = "blue";
pub const GREEN: &str = "green";
pub const ORANGE: &str = "orange";
pub const RED: &str = "red";
pub const VIOLET: &str = "violet";
pub const YELLOW: &str = "yellow";
pub const GRAY: &str = "gray";
pub const LIGHT_BLUE: &str = "light-blue";
pub const LIGHT_GREEN: &str = "light-green";

/// Branch colors cycled by index for branches without an explicit color.
pub const BRANCH_PALETTE: [&str; 8] = [BLUE, GREEN, ORANGE, RED, VIOLET, LIGHT_BLUE, YELLOW, LIGHT_GREEN];

/// Geometry drawn for a node of the given type.
#[must_use]
pub fn geometry_for(node_type: NodeType) -> GeoKind {
    match node_type {
        NodeType::Start | NodeType::End => GeoKind::Ellipse,
        NodeType::Decision => GeoKind::Diamond,
        NodeType::Input => GeoKind::Parallelogram,
        NodeType::Process | NodeType::Document => GeoKind::Rectangle,
    }
}

/// Fill color for a node of the given type.
#[must_use]
pub fn color_for(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Start => BLUE,
        NodeType::End => GREEN,
        NodeType::Decision => ORANGE,
        NodeType::Process | NodeType::Input | NodeType::Document => LIGHT_BLUE,
    }
}

/// Box size for a geometry kind. Diamonds get extra room for their label.
#[must_use]
pub fn node_size(geo: GeoKind) -> (f64, f64) {
    match geo {
        GeoKind::Diamond => (DECISION_W, DECISION_H),
        _ => (NODE_W, NODE_H),
    }
}

/// Deterministic palette pick for the `index`-th branch.
#[must_use]
pub fn branch_color(index: usize) -> &'static str {
    BRANCH_PALETTE[index % BRANCH_PALETTE.len()]
}

#[cfg(test)]
#[path = "style_test.rs"]
mod tests;
