//! Prompt-to-diagram shape synthesis for an infinite-canvas board.
//!
//! This crate owns the deterministic middle of the AI drawing pipeline: it
//! normalizes whatever the language model produced (structured JSON, text
//! with JSON buried in it, or plain prose) into a typed diagram description,
//! lays the description out with fixed per-kind formulas, and emits a flat
//! list of positioned shape records ready for the board renderer. The
//! transport session that carries prompts and the model call itself live in
//! the host application.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Entry point: response + kind → shape list, error fallback |
//! | [`model`] | Typed diagram descriptions and the response input union |
//! | [`parse`] | Structured / embedded-JSON / heuristic-text parsing strategies |
//! | [`flowchart`] | Grid layout engine (flowcharts and process diagrams) |
//! | [`mindmap`] | Radial layout engine |
//! | [`style`] | Node-type → geometry/color policy and the branch palette |
//! | [`shape`] | Output shape records and their wire serialization |
//! | [`consts`] | Shared layout constants (anchors, pitches, radii, caps) |

pub mod consts;
pub mod flowchart;
pub mod generate;
pub mod mindmap;
pub mod model;
pub mod parse;
pub mod shape;
pub mod style;

pub use generate::{GenerateError, generate_shapes};
pub use model::{DiagramKind, LlmResponse};
pub use shape::Shape;
