//! 2D primitives for the duality pipeline.
//!
//! Purpose
//! - Value types (`Point`, `Line`, `OrientedLine`, `Arc`, `ViewBox`) and the
//!   small predicates every later stage relies on: `left_turn`, `line_through`,
//!   `intersect`, `segment_intersect` and the multi-line intersection helpers.
//!
//! Conventions
//! - Floating point throughout; no tolerance is applied inside the predicates.
//!   Degenerate configurations surface as `DualityError::DegenerateInput`,
//!   non-existent intersections as `None`.
//!
//! Code cross-refs: `transform` (dual maps), `hull` (uses `left_turn`),
//! `envelope` and `merge` (use the intersection helpers).

mod predicates;
mod types;

pub use predicates::{
    intersect, left_turn, line_through, neighboring_intersections, pairwise_intersections,
    segment_intersect,
};
pub use types::{Arc, Line, Orientation, OrientedLine, Point, ViewBox};

#[cfg(test)]
mod tests;
