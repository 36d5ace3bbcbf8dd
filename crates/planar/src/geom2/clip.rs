//! Convex polygon clipping by boundary walk.
//!
//! Walk the argument's edges in order. For every edge `(a, b)` record `a` if it
//! lies in the receiver, then every crossing with the receiver's boundary
//! (both ends of a collinear overlap), sorted by distance from `a` so the
//! ring keeps traversal order. Receiver vertices inside the argument are not
//! visited by the walk; when there are any, they are merged in and the ring is
//! re-sorted around its centroid, which is valid since the result is convex.
//!
//! The result is classified by its number of distinct points: nothing, a
//! point, a segment, or a (reduced) polygon.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use super::error::{GeomError, Operand, Result};
use super::line::{Line, LineIntersection};
use super::polygon::Polygon;
use super::types::{GeomCfg, Point};
use super::util::{dedup_close, points_close, sort_ccw_around_centroid};

/// Shape of the overlap of two convex polygons.
#[derive(Clone, Debug)]
pub enum PolygonIntersection {
    Empty,
    Point(Point),
    Segment(Line),
    Polygon(Polygon),
}

impl PolygonIntersection {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, PolygonIntersection::Empty)
    }
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        if let PolygonIntersection::Polygon(p) = self {
            Some(p)
        } else {
            None
        }
    }
    #[inline]
    pub fn into_polygon(self) -> Option<Polygon> {
        if let PolygonIntersection::Polygon(p) = self {
            Some(p)
        } else {
            None
        }
    }
}

impl From<LineIntersection> for PolygonIntersection {
    fn from(i: LineIntersection) -> Self {
        match i {
            LineIntersection::Empty => PolygonIntersection::Empty,
            LineIntersection::Point(p) => PolygonIntersection::Point(p),
            LineIntersection::Segment(l) => PolygonIntersection::Segment(l),
        }
    }
}

impl PartialEq for PolygonIntersection {
    fn eq(&self, other: &Self) -> bool {
        use PolygonIntersection as I;
        match (self, other) {
            (I::Empty, I::Empty) => true,
            (I::Point(a), I::Point(b)) => points_close(*a, *b, GeomCfg::default().eps_abs),
            (I::Segment(a), I::Segment(b)) => a == b,
            (I::Polygon(a), I::Polygon(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for PolygonIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonIntersection::Empty => write!(f, "Empty"),
            PolygonIntersection::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            PolygonIntersection::Segment(l) => write!(f, "{l}"),
            PolygonIntersection::Polygon(p) => write!(f, "{p}"),
        }
    }
}

impl Polygon {
    /// Overlap of two convex, counter-clockwise polygons.
    ///
    /// Errors with `GeomError::NonConvex` if either operand fails `convex()`.
    #[inline]
    pub fn intersection(&self, other: &Polygon) -> Result<PolygonIntersection> {
        self.intersection_cfg(other, GeomCfg::default())
    }

    pub fn intersection_cfg(&self, other: &Polygon, cfg: GeomCfg) -> Result<PolygonIntersection> {
        if !self.convex_cfg(cfg) {
            debug!(vertices = self.len(), "intersection rejected: receiver not convex");
            return Err(GeomError::NonConvex {
                operand: Operand::Receiver,
            });
        }
        if !other.convex_cfg(cfg) {
            debug!(vertices = other.len(), "intersection rejected: argument not convex");
            return Err(GeomError::NonConvex {
                operand: Operand::Argument,
            });
        }

        let walked = boundary_walk(self, other, cfg);
        let tol = cfg.tol(self.extent().min(other.extent()));
        let mut ring = dedup_close(&walked, tol);
        let inner: Vec<Point> = self
            .points
            .iter()
            .copied()
            .filter(|&v| other.contains_cfg(v, cfg))
            .filter(|&v| !ring.iter().any(|&q| points_close(q, v, tol)))
            .collect();
        if !inner.is_empty() {
            ring.extend_from_slice(&inner);
            sort_ccw_around_centroid(&mut ring);
        }
        trace!(
            walked = walked.len(),
            unique = ring.len(),
            merged = inner.len(),
            "intersection ring"
        );
        Ok(classify(ring, cfg))
    }
}

/// Candidate points along `subject`'s boundary, in traversal order.
fn boundary_walk(clip: &Polygon, subject: &Polygon, cfg: GeomCfg) -> Vec<Point> {
    let mut out = Vec::with_capacity(subject.len() * 2);
    for (a, b) in subject.pairs() {
        let ab = Line::new(a, b);
        if clip.contains_cfg(a, cfg) {
            out.push(a);
        }
        let mut hits: Vec<Point> = Vec::new();
        for cd in clip.edges() {
            match ab.intersection_cfg(&cd, cfg) {
                LineIntersection::Empty => {}
                LineIntersection::Point(p) => hits.push(p),
                LineIntersection::Segment(s) => {
                    hits.push(s.p1);
                    hits.push(s.p2);
                }
            }
        }
        hits.sort_by(|p, q| {
            (p - a)
                .norm()
                .partial_cmp(&(q - a).norm())
                .unwrap_or(Ordering::Equal)
        });
        out.extend(hits);
    }
    out
}

fn classify(ring: Vec<Point>, cfg: GeomCfg) -> PolygonIntersection {
    match ring.len() {
        0 => PolygonIntersection::Empty,
        1 => PolygonIntersection::Point(ring[0]),
        2 => PolygonIntersection::Segment(Line::new(ring[0], ring[1])),
        _ => {
            let reduced = Polygon { points: ring }.reduce_cfg(cfg);
            match reduced.points.len() {
                1 => PolygonIntersection::Point(reduced.points[0]),
                2 => PolygonIntersection::Segment(Line::new(reduced.points[0], reduced.points[1])),
                _ => PolygonIntersection::Polygon(reduced),
            }
        }
    }
}
