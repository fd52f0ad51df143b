//! Mind-map layout engine: a central topic with branches on a ring and
//! sub-topics fanned on arcs.
//!
//! Unlike the flowchart engine, the position table stores shape *centers* —
//! branch arrows radiate from center to center, and the renderer draws the
//! boxes around them.

use std::f64::consts::TAU;

use tracing::debug;

use crate::consts::*;
use crate::model::{MindMapSpec, PositionTable};
use crate::shape::{Dash, Fill, GeoKind, GeoProps, Offset, Shape, Size};
use crate::style;

/// Lay out a mind-map description as a shape list.
///
/// Branch *i* of *N* sits at angle `2πi/N` on a ring around the central
/// node; sub-topic *j* of *M* sits on an arc spanning ±30° around its
/// branch's heading. Cross-connections are drawn gray and dashed to stand
/// apart from the structural arrows.
#[must_use]
pub fn layout(spec: &MindMapSpec) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if let Some(title) = &spec.title {
        shapes.push(Shape::title(MINDMAP_CENTER_X - CENTRAL_W / 2.0, TITLE_Y, title));
    }

    let central = &spec.central_node;
    let central_color = central.color.clone().unwrap_or_else(|| style::BLUE.to_owned());
    let central_text = central.text.clone().unwrap_or_else(|| "Central Topic".to_owned());
    shapes.push(Shape::geo(
        MINDMAP_CENTER_X - CENTRAL_W / 2.0,
        MINDMAP_CENTER_Y - CENTRAL_H / 2.0,
        GeoProps {
            fill: Some(Fill::Solid),
            ..GeoProps::node(CENTRAL_W, CENTRAL_H, GeoKind::Ellipse, &central_color, &central_text)
        },
    ));

    let mut positions = PositionTable::default();
    positions.record(
        central.id.clone().unwrap_or_else(|| "center".to_owned()),
        (MINDMAP_CENTER_X, MINDMAP_CENTER_Y),
    );

    for (i, branch) in spec.branches.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * i as f64 / branch_count_divisor(spec.branches.len());
        let bx = MINDMAP_CENTER_X + BRANCH_RADIUS * angle.cos();
        let by = MINDMAP_CENTER_Y + BRANCH_RADIUS * angle.sin();

        let branch_id = branch.id.clone().unwrap_or_else(|| format!("branch{}", i + 1));
        let branch_text = branch.text.clone().unwrap_or_else(|| format!("Branch {}", i + 1));
        let branch_color = branch.color.clone().unwrap_or_else(|| style::branch_color(i).to_owned());

        shapes.push(Shape::geo(
            bx - BRANCH_W / 2.0,
            by - BRANCH_H / 2.0,
            GeoProps {
                fill: Some(Fill::Solid),
                ..GeoProps::node(BRANCH_W, BRANCH_H, GeoKind::Rectangle, &branch_color, &branch_text)
            },
        ));
        positions.record(branch_id.clone(), (bx, by));

        shapes.push(Shape::arrow(
            MINDMAP_CENTER_X,
            MINDMAP_CENTER_Y,
            Offset { x: bx - MINDMAP_CENTER_X, y: by - MINDMAP_CENTER_Y },
            &branch_color,
            Dash::Draw,
            Size::M,
        ));

        for (j, sub) in branch.nodes.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let fraction = j as f64 / branch_count_divisor(branch.nodes.len().saturating_sub(1));
            let sub_angle = angle - SUB_ARC_HALF_ANGLE + 2.0 * SUB_ARC_HALF_ANGLE * fraction;
            let sx = bx + SUB_RADIUS * sub_angle.cos();
            let sy = by + SUB_RADIUS * sub_angle.sin();

            let sub_id = sub.id.clone().unwrap_or_else(|| format!("{branch_id}-{}", j + 1));
            let sub_text = sub.text.clone().unwrap_or_else(|| format!("Sub-topic {}", j + 1));
            let sub_color = sub.color.clone().unwrap_or_else(|| branch_color.clone());

            shapes.push(Shape::geo(
                sx - SUB_W / 2.0,
                sy - SUB_H / 2.0,
                GeoProps {
                    dash: Some(Dash::Draw),
                    ..GeoProps::node(SUB_W, SUB_H, GeoKind::Rectangle, &sub_color, &sub_text)
                },
            ));
            positions.record(sub_id, (sx, sy));

            shapes.push(Shape::arrow(
                bx,
                by,
                Offset { x: sx - bx, y: sy - by },
                &sub_color,
                Dash::Draw,
                Size::S,
            ));
        }
    }

    for conn in &spec.connections {
        let (Some(from), Some(to)) = (positions.resolve(&conn.from), positions.resolve(&conn.to)) else {
            debug!(from = %conn.from, to = %conn.to, "dropping cross-connection with unresolved endpoint");
            continue;
        };

        if let Some(label) = conn.label.as_deref() {
            if !label.is_empty() {
                shapes.push(Shape::label(
                    f64::midpoint(from.0, to.0) + CROSS_LABEL_DX,
                    f64::midpoint(from.1, to.1) + CROSS_LABEL_DY,
                    label,
                ));
            }
        }

        shapes.push(Shape::arrow(
            from.0,
            from.1,
            Offset { x: to.0 - from.0, y: to.1 - from.1 },
            style::GRAY,
            Dash::Dashed,
            Size::S,
        ));
    }

    shapes
}

/// Angle divisor that tolerates empty collections: a lone item divides by 1.
#[allow(clippy::cast_precision_loss)]
fn branch_count_divisor(count: usize) -> f64 {
    count.max(1) as f64
}

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod tests;
