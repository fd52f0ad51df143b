//! Output contract: positioned visual primitives ready for the board renderer.
//!
//! Every shape is independently renderable — it carries its own absolute
//! anchor and all visual properties, with no references to other shapes.
//! On the wire a shape is a flat record `{type, x, y, props}` where `props`
//! holds the per-kind visual properties; the renderer matches on `type` and
//! reads nothing else at the top level, so the nesting here must not change.

use serde::{Deserialize, Serialize};

use crate::consts::{ERROR_X, ERROR_Y};
use crate::style;

/// A single positioned visual primitive.
///
/// For text and geo shapes `(x, y)` is the top-left anchor. For arrows it is
/// the source point; the head and tail are stored as offsets relative to it
/// so the renderer can reposition the whole arrow by moving one anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Free-standing text: titles, connection labels, error messages.
    Text { x: f64, y: f64, props: TextProps },
    /// A filled geometric node with centered text.
    Geo { x: f64, y: f64, props: GeoProps },
    /// A directed arrow from `(x, y)` to `(x, y) + end`.
    Arrow { x: f64, y: f64, props: ArrowProps },
}

/// Visual properties of a [`Shape::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub font: Font,
    pub size: Size,
    pub color: String,
    /// Titles are center-aligned; plain labels omit alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

/// Visual properties of a [`Shape::Geo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProps {
    pub w: f64,
    pub h: f64,
    pub geo: GeoKind,
    pub color: String,
    pub text: String,
    pub align: Align,
    pub font: Font,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

/// Visual properties of a [`Shape::Arrow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowProps {
    /// Tail offset from the anchor. Always zero — the anchor is the tail.
    pub start: Offset,
    /// Head offset from the anchor.
    pub end: Offset,
    pub color: String,
    pub dash: Dash,
    pub size: Size,
}

/// A 2D offset relative to a shape's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// Geometry of a geo shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoKind {
    Rectangle,
    Ellipse,
    Diamond,
    Parallelogram,
}

/// Text rendering font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Draw,
    Sans,
    Serif,
    Mono,
}

/// Stroke / text size step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    S,
    M,
    L,
    Xl,
}

/// Horizontal text alignment within a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Middle,
    End,
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Draw,
    Dashed,
    Dotted,
    Solid,
}

/// Interior fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    Semi,
    Solid,
    Pattern,
}

impl Shape {
    /// A diagram title: extra-large, centered, black.
    #[must_use]
    pub fn title(x: f64, y: f64, text: &str) -> Self {
        Self::Text {
            x,
            y,
            props: TextProps {
                text: text.to_owned(),
                font: Font::Draw,
                size: Size::Xl,
                color: style::BLACK.to_owned(),
                align: Some(Align::Middle),
            },
        }
    }

    /// A small free-standing label (connection labels).
    #[must_use]
    pub fn label(x: f64, y: f64, text: &str) -> Self {
        Self::Text {
            x,
            y,
            props: TextProps {
                text: text.to_owned(),
                font: Font::Draw,
                size: Size::S,
                color: style::BLACK.to_owned(),
                align: None,
            },
        }
    }

    /// The uniform error label every engine falls back to: the renderer
    /// always receives something drawable, even on total failure.
    #[must_use]
    pub fn error_text(message: &str) -> Self {
        Self::Text {
            x: ERROR_X,
            y: ERROR_Y,
            props: TextProps {
                text: message.to_owned(),
                font: Font::Draw,
                size: Size::M,
                color: style::RED.to_owned(),
                align: None,
            },
        }
    }

    /// A geo shape at a top-left anchor.
    #[must_use]
    pub fn geo(x: f64, y: f64, props: GeoProps) -> Self {
        Self::Geo { x, y, props }
    }

    /// An arrow from `(x, y)` to `(x, y) + end`.
    #[must_use]
    pub fn arrow(x: f64, y: f64, end: Offset, color: &str, dash: Dash, size: Size) -> Self {
        Self::Arrow {
            x,
            y,
            props: ArrowProps { start: Offset::ZERO, end, color: color.to_owned(), dash, size },
        }
    }
}

impl GeoProps {
    /// Base node props: centered draw-font text, no fill or dash override.
    #[must_use]
    pub fn node(w: f64, h: f64, geo: GeoKind, color: &str, text: &str) -> Self {
        Self {
            w,
            h,
            geo,
            color: color.to_owned(),
            text: text.to_owned(),
            align: Align::Middle,
            font: Font::Draw,
            fill: None,
            dash: None,
        }
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
