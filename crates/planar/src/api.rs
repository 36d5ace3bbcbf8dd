//! Curated flat API (unstable).
//!
//! Convenience surface for the CLI and experiments. Breaking changes are
//! allowed; prefer these re-exports for consistency across call sites.

// Segments and polygons
pub use crate::geom2::{
    points_close, pt, GeomCfg, GeomError, Line, LineIntersection, Operand, Point, Polygon,
    PolygonIntersection, Winding,
};
// Random convex polygons
pub use crate::geom2::rand::{draw_convex, DrawSeed, RadialCfg};
