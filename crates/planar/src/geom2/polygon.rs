//! Vertex-ring polygons: edges, simplification, convexity and containment.
//!
//! Conventions
//! - Vertices are interpreted cyclically; the last vertex connects back to the first.
//! - `convex()` and `contains()` assume counter-clockwise winding and do not
//!   normalize it. Use `winding()` / `to_ccw()` to check or fix the orientation
//!   explicitly before calling them on untrusted input.
//! - All comparisons go through `GeomCfg`; the `*_cfg` variants take a custom one.
//!   The length scale for point comparisons is `extent()`, so results do not
//!   depend on where the polygon sits in the plane.
//!
//! Code cross-refs: `line::Line`, `clip` (polygon intersection), `util::{phase, wrap_angle}`

use std::f64::consts::PI;
use std::fmt;

use super::error::{GeomError, Result};
use super::line::Line;
use super::types::{GeomCfg, Point, Winding};
use super::util::{convex_hull, cross, phase, points_close, wrap_angle};

/// Ordered, non-empty vertex ring.
///
/// Invariants:
/// - At least one vertex.
/// - Duplicate or collinear vertices are allowed (see `reduce`).
#[derive(Clone, Debug)]
pub struct Polygon {
    pub(super) points: Vec<Point>,
}

#[allow(clippy::len_without_is_empty)]
impl Polygon {
    /// Build from vertices; rejects an empty list.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeomError::EmptyPolygon);
        }
        Ok(Self { points })
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Counter-clockwise convex hull of `points` (collinear hull points dropped).
    pub fn from_convex_hull(points: &[Point]) -> Result<Self> {
        Self::new(convex_hull(points))
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Vertex x-coordinates in ring order, for plotting.
    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Vertex y-coordinates in ring order, for plotting.
    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Diagonal of the axis-aligned bounding box.
    pub fn extent(&self) -> f64 {
        let (lo, hi) = self
            .points
            .iter()
            .fold((self.points[0], self.points[0]), |(lo, hi), p| {
                (lo.inf(p), hi.sup(p))
            });
        (hi - lo).norm()
    }

    /// Cyclic edges `(p_i, p_{i+1 mod n})`; always `n` of them.
    pub fn pairs(&self) -> Vec<(Point, Point)> {
        let n = self.points.len();
        (0..n)
            .map(|i| (self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Same edges as `pairs`, as segments.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    #[inline]
    pub fn reduce(&self) -> Polygon {
        self.reduce_cfg(GeomCfg::default())
    }

    /// Drop vertices lying on the segment between their neighbours.
    ///
    /// The scan does not advance after a removal, so a run of redundant
    /// vertices collapses in one pass. Vertex 0 and the last vertex are
    /// re-checked at the end because their cyclic neighbours may have changed.
    pub fn reduce_cfg(&self, cfg: GeomCfg) -> Polygon {
        let redundant = |a: Point, m: Point, b: Point| Line::new(a, b).contains_cfg(m, cfg);
        let mut points = self.points.clone();
        let mut i = 1;
        while i < points.len() {
            let n = points.len();
            if redundant(points[i - 1], points[i], points[(i + 1) % n]) {
                points.remove(i);
            } else {
                i += 1;
            }
        }
        while points.len() >= 3 {
            let n = points.len();
            if redundant(points[n - 2], points[n - 1], points[0]) {
                points.pop();
            } else if redundant(points[n - 1], points[0], points[1]) {
                points.remove(0);
            } else {
                break;
            }
        }
        Polygon { points }
    }

    /// Direction phases in `[0, 2π)` of the edges with non-zero length.
    fn edge_phases(&self, cfg: GeomCfg) -> Vec<f64> {
        let tol = cfg.tol(self.extent());
        self.pairs()
            .into_iter()
            .filter(|&(a, b)| !points_close(a, b, tol))
            .map(|(a, b)| phase(b - a))
            .collect()
    }

    #[inline]
    pub fn convex(&self) -> bool {
        self.convex_cfg(GeomCfg::default())
    }

    /// Convex iff no edge-to-edge turn is clockwise and the boundary turns
    /// exactly once around. Clockwise input is reported as non-convex.
    pub fn convex_cfg(&self, cfg: GeomCfg) -> bool {
        let phases = self.edge_phases(cfg);
        let n = phases.len();
        if n < 2 {
            return true;
        }
        let mut total = 0.0;
        for i in 0..n {
            let turn = wrap_angle(phases[(i + 1) % n] - phases[i]);
            if turn < -cfg.eps_angle {
                return false;
            }
            total += turn;
        }
        // turns of a closed ring sum to a multiple of 2π
        total < 3.0 * PI
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_cfg(p, GeomCfg::default())
    }

    /// Closed containment (interior or boundary) for convex CCW polygons.
    ///
    /// Interior: the phase from every vertex to `p`, taken relative to the
    /// phase of the outgoing edge, lies in `[0, π]`. Otherwise falls back to
    /// checking the boundary edge by edge.
    pub fn contains_cfg(&self, p: Point, cfg: GeomCfg) -> bool {
        let tol = cfg.tol(self.extent());
        let mut directed = 0usize;
        let mut interior = true;
        for (a, b) in self.pairs() {
            if points_close(a, b, tol) {
                continue;
            }
            directed += 1;
            if points_close(p, a, tol) {
                continue;
            }
            let rel = wrap_angle(phase(p - a) - phase(b - a));
            if rel < -cfg.eps_angle {
                interior = false;
                break;
            }
        }
        if directed > 0 && interior {
            return true;
        }
        self.edges().any(|e| e.contains_cfg(p, cfg))
    }

    /// Shoelace area about vertex 0; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let o = self.points[0];
        let twice: f64 = self.pairs().into_iter().map(|(p, q)| cross(o, p, q)).sum();
        0.5 * twice
    }

    /// Orientation; rings whose area is below `tol(extent) * extent` are `Degenerate`.
    pub fn winding(&self) -> Winding {
        let a = self.signed_area();
        let extent = self.extent();
        if a.abs() <= GeomCfg::default().tol(extent) * extent {
            Winding::Degenerate
        } else if a > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Counter-clockwise copy; clockwise rings are reversed keeping vertex 0 first.
    pub fn to_ccw(&self) -> Polygon {
        match self.winding() {
            Winding::Clockwise => {
                let mut points = Vec::with_capacity(self.points.len());
                points.push(self.points[0]);
                points.extend(self.points[1..].iter().rev());
                Polygon { points }
            }
            Winding::CounterClockwise | Winding::Degenerate => self.clone(),
        }
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeomError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Polygon::new(points)
    }
}

/// Cyclic-rotation equality: same ring up to the choice of starting vertex.
/// Reflections and redundant vertices are not normalized away.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        let tol = GeomCfg::default().tol(self.extent().max(other.extent()));
        let p0 = self.points[0];
        let Some(i) = other.points.iter().position(|&q| points_close(q, p0, tol)) else {
            return false;
        };
        let rotated = other.points[i..].iter().chain(other.points[..i].iter());
        self.points
            .iter()
            .zip(rotated)
            .all(|(&a, &b)| points_close(a, b, tol))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon([")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        write!(f, "])")
    }
}
