//! Shared numeric constants for the layout engines and text extraction.
//!
//! All positions are in board world-coordinates (logical pixels). The values
//! here are part of the wire contract with the renderer: existing boards were
//! produced with these exact anchors, so changing them moves every diagram a
//! client re-generates.

// ── Titles ──────────────────────────────────────────────────────

/// Y anchor for the diagram title text.
pub const TITLE_Y: f64 = 50.0;

/// X anchor for the flowchart title text.
pub const TITLE_X: f64 = 100.0;

// ── Flowchart grid ──────────────────────────────────────────────

/// Top-left corner of the first grid cell.
pub const GRID_ORIGIN_X: f64 = 100.0;
pub const GRID_ORIGIN_Y: f64 = 150.0;

/// Horizontal pitch between grid columns.
pub const GRID_COL_WIDTH: f64 = 250.0;

/// Vertical pitch between grid rows.
pub const GRID_ROW_HEIGHT: f64 = 150.0;

/// The grid never grows wider than this many columns.
pub const GRID_MAX_COLS: usize = 3;

/// Default node box size.
pub const NODE_W: f64 = 160.0;
pub const NODE_H: f64 = 80.0;

/// Decision diamonds are drawn slightly larger so the label fits.
pub const DECISION_W: f64 = 180.0;
pub const DECISION_H: f64 = 100.0;

/// Connection labels sit at the midpoint of the two node anchors, nudged
/// up-right by this amount.
pub const LABEL_OFFSET: f64 = 15.0;

/// Connection arrows anchor at the source node's visual center assuming the
/// default node size. The offset is fixed even for diamonds; the renderer
/// expects this exact anchor.
pub const ARROW_ANCHOR_DX: f64 = NODE_W / 2.0;
pub const ARROW_ANCHOR_DY: f64 = NODE_H / 2.0;

// ── Mind map ────────────────────────────────────────────────────

/// Center point of the central topic ellipse.
pub const MINDMAP_CENTER_X: f64 = 400.0;
pub const MINDMAP_CENTER_Y: f64 = 300.0;

/// Central topic ellipse size.
pub const CENTRAL_W: f64 = 200.0;
pub const CENTRAL_H: f64 = 100.0;

/// Distance from the central node to each branch center.
pub const BRANCH_RADIUS: f64 = 250.0;

/// Branch box size.
pub const BRANCH_W: f64 = 160.0;
pub const BRANCH_H: f64 = 80.0;

/// Distance from a branch center to its sub-topic centers.
pub const SUB_RADIUS: f64 = 150.0;

/// Sub-topic box size.
pub const SUB_W: f64 = 140.0;
pub const SUB_H: f64 = 70.0;

/// Sub-topics fan across ±30° around the branch heading.
pub const SUB_ARC_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Cross-connection labels are nudged left and up from the midpoint.
pub const CROSS_LABEL_DX: f64 = -40.0;
pub const CROSS_LABEL_DY: f64 = -10.0;

// ── Error shape ─────────────────────────────────────────────────

/// Anchor of the single error label emitted when generation fails.
pub const ERROR_X: f64 = 100.0;
pub const ERROR_Y: f64 = 100.0;

// ── Text extraction caps ────────────────────────────────────────

/// Maximum nodes taken from unstructured text when no pattern matches.
pub const MAX_TEXT_NODES: usize = 10;

/// Maximum mind-map topics: one central plus up to eight branches.
pub const MAX_TOPICS: usize = 9;
pub const MAX_BRANCH_TOPICS: usize = 8;

/// Below this many extracted topics, backfill from remaining short lines.
pub const MIN_TOPICS: usize = 5;

/// Lines at or above this many characters are never treated as topics.
pub const MAX_TOPIC_LEN: usize = 100;
