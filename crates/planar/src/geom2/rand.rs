//! Seeded random convex polygons for property tests and benchmarks.
//!
//! Vertices are placed at jittered angles and radii around `center`, then the
//! convex hull is taken. A `DrawSeed { seed, index }` fixes the draw, so a
//! failing case can be replayed from the two numbers alone.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::types::Point;

/// Shape of the random polygons.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Inclusive range of vertices placed before the hull; at least 3.
    pub vertices: (usize, usize),
    pub radius: f64,
    /// Angle noise (fraction of the vertex spacing) and radius noise
    /// (fraction of `radius`), clamped to `[0, 0.49]`.
    pub jitter: f64,
    pub center: Point,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertices: (3, 12),
            radius: 1.0,
            jitter: 0.3,
            center: Point::zeros(),
        }
    }
}

/// Identifies one draw: same seed and index, same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawSeed {
    pub seed: u64,
    pub index: u64,
}

impl DrawSeed {
    fn rng(self) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }
}

/// Draw a convex polygon in counter-clockwise order.
///
/// `None` if the hull has fewer than three vertices (only possible with a
/// zero radius).
pub fn draw_convex(cfg: RadialCfg, seed: DrawSeed) -> Option<Polygon> {
    let mut rng = seed.rng();
    let lo = cfg.vertices.0.max(3);
    let n = rng.gen_range(lo..=cfg.vertices.1.max(lo));
    let jitter = cfg.jitter.clamp(0.0, 0.49);
    let step = TAU / n as f64;
    let start = rng.gen_range(0.0..TAU);
    let points: Vec<Point> = (0..n)
        .map(|k| {
            let angle = start + step * (k as f64 + rng.gen_range(-jitter..=jitter));
            let r = cfg.radius * (1.0 + rng.gen_range(-jitter..=jitter));
            cfg.center + Point::new(angle.cos(), angle.sin()) * r
        })
        .collect();
    let hull = Polygon::from_convex_hull(&points).ok()?;
    (hull.len() >= 3).then_some(hull)
}
