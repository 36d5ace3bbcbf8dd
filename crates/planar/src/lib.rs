//! Planar geometry core: segments, polygons and convex clipping.
//!
//! Layout
//! - `geom2`: `Line`, `Polygon`, tolerances (`GeomCfg`), errors and a seeded
//!   sampler of random convex polygons (`geom2::rand`).
//! - `api`: flat re-export surface for callers that want a single import path.
//!
//! All operations are pure functions over immutable values. Shapes of
//! variable kind come back as tagged unions (`LineIntersection`,
//! `PolygonIntersection`).

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    pt, GeomCfg, GeomError, Line, LineIntersection, Point, Polygon, PolygonIntersection, Winding,
};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_convex, DrawSeed, RadialCfg};
    pub use crate::geom2::{
        points_close, pt, GeomCfg, GeomError, Line, LineIntersection, Operand, Point, Polygon,
        PolygonIntersection, Winding,
    };
}
