//! Planar geometry: segments, vertex-ring polygons and convex clipping.
//!
//! Purpose
//! - `Line`: finite segment with tolerance-aware containment and a
//!   segment–segment intersection that resolves parallel, collinear and
//!   shared-endpoint cases.
//! - `Polygon`: cyclic vertex ring with simplification (`reduce`), convexity,
//!   containment and convex clipping (`intersection`).
//!
//! Conventions
//! - One tolerance scheme, `GeomCfg`, drives predicates, deduplication and equality.
//! - Results of variable shape are tagged unions (`LineIntersection`,
//!   `PolygonIntersection`); callers match on them.
//! - Polygons are expected in counter-clockwise order; nothing is normalized implicitly.
//!
//! Code cross-refs: `Line`, `Polygon`, `GeomCfg`, `GeomError`

mod clip;
mod error;
mod line;
mod polygon;
pub mod rand;
mod types;
mod util;

pub use clip::PolygonIntersection;
pub use error::{GeomError, Operand, Result};
pub use line::{Line, LineIntersection};
pub use polygon::Polygon;
pub use types::{pt, GeomCfg, Point, Winding};
pub use util::points_close;

#[cfg(test)]
mod proptests;
