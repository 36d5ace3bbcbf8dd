//! Finite line segments and segment–segment intersection.
//!
//! Intersections go through homogeneous coordinates: the line through `p`
//! and `q` is `(p, 1) × (q, 1)` and two lines meet at the cross product of
//! their representations. A vanishing weight means the lines are parallel, in
//! which case the collinear overlap (if any) is recovered from the endpoints.
//!
//! Degenerate segments (`p1 ≈ p2`) are valid and behave as a single point.

use std::fmt;

use nalgebra::Vector3;

use super::types::{GeomCfg, Point};
use super::util::points_close;

/// Segment between two endpoints. Equality ignores endpoint order.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

/// Result of intersecting two segments.
#[derive(Clone, Copy, Debug)]
pub enum LineIntersection {
    Empty,
    Point(Point),
    /// Collinear overlap of positive length.
    Segment(Line),
}

impl LineIntersection {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, LineIntersection::Empty)
    }
    #[inline]
    pub fn point(self) -> Option<Point> {
        if let LineIntersection::Point(p) = self {
            Some(p)
        } else {
            None
        }
    }
    #[inline]
    pub fn segment(self) -> Option<Line> {
        if let LineIntersection::Segment(l) = self {
            Some(l)
        } else {
            None
        }
    }
}

impl PartialEq for LineIntersection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LineIntersection::Empty, LineIntersection::Empty) => true,
            (LineIntersection::Point(a), LineIntersection::Point(b)) => {
                points_close(*a, *b, GeomCfg::default().eps_abs)
            }
            (LineIntersection::Segment(a), LineIntersection::Segment(b)) => a == b,
            _ => false,
        }
    }
}

#[inline]
fn homogeneous(p: Point) -> Vector3<f64> {
    Vector3::new(p.x, p.y, 1.0)
}

impl Line {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Endpoint x-coordinates, for plotting.
    #[inline]
    pub fn x(&self) -> [f64; 2] {
        [self.p1.x, self.p2.x]
    }

    /// Endpoint y-coordinates, for plotting.
    #[inline]
    pub fn y(&self) -> [f64; 2] {
        [self.p1.y, self.p2.y]
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.p1 + self.p2) * 0.5
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() <= GeomCfg::default().eps_abs
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        let d = self.p2 - self.p1;
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return (p - self.p1).norm();
        }
        let t = ((p - self.p1).dot(&d) / len2).clamp(0.0, 1.0);
        (p - (self.p1 + d * t)).norm()
    }

    /// Whether `p` lies on the segment (endpoints included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_cfg(p, GeomCfg::default())
    }

    /// `p` is within `cfg.tol(length)` of the segment.
    ///
    /// Equivalent to `|p1 p| + |p p2| ≈ |p1 p2|`, with the slack measured as a
    /// distance off the segment rather than as excess path length.
    pub fn contains_cfg(&self, p: Point, cfg: GeomCfg) -> bool {
        self.distance_to(p) <= cfg.tol(self.length())
    }

    #[inline]
    pub fn intersection(&self, other: &Line) -> LineIntersection {
        self.intersection_cfg(other, GeomCfg::default())
    }

    pub fn intersection_cfg(&self, other: &Line, cfg: GeomCfg) -> LineIntersection {
        // local origin shared by both argument orders, keeps the products small
        let o = (self.midpoint() + other.midpoint()) * 0.5;
        let l1 = homogeneous(self.p1 - o).cross(&homogeneous(self.p2 - o));
        let l2 = homogeneous(other.p1 - o).cross(&homogeneous(other.p2 - o));
        let m = l1.cross(&l2);
        // m.z is the cross product of the two directions
        let scale = self.length() * other.length();
        if m.z.abs() > cfg.eps_det * scale {
            let p = o + Point::new(m.x / m.z, m.y / m.z);
            return if self.contains_cfg(p, cfg) && other.contains_cfg(p, cfg) {
                LineIntersection::Point(p)
            } else {
                LineIntersection::Empty
            };
        }
        self.collinear_overlap(other, cfg)
    }

    /// Parallel case: endpoints of either segment lying on the other one.
    fn collinear_overlap(&self, other: &Line, cfg: GeomCfg) -> LineIntersection {
        let tol = cfg.tol(self.length().min(other.length()));
        let mut found: Vec<Point> = Vec::with_capacity(4);
        for (host, guest) in [(self, other), (other, self)] {
            for q in [guest.p1, guest.p2] {
                if host.contains_cfg(q, cfg) && !found.iter().any(|&f| points_close(f, q, tol)) {
                    found.push(q);
                }
            }
        }
        match found.len() {
            0 => LineIntersection::Empty,
            1 => LineIntersection::Point(found[0]),
            2 => LineIntersection::Segment(Line::new(found[0], found[1])),
            _ => LineIntersection::Segment(farthest_pair(&found)),
        }
    }
}

/// Two points of `pts` furthest apart (first pair wins ties). Needs `pts.len() >= 2`.
fn farthest_pair(pts: &[Point]) -> Line {
    let mut best = Line::new(pts[0], pts[1]);
    let mut best_d = best.length();
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let d = (pts[j] - pts[i]).norm();
            if d > best_d {
                best = Line::new(pts[i], pts[j]);
                best_d = d;
            }
        }
    }
    best
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        let tol = GeomCfg::default().tol(self.length().max(other.length()));
        let same = points_close(self.p1, other.p1, tol) && points_close(self.p2, other.p2, tol);
        let swapped = points_close(self.p1, other.p2, tol) && points_close(self.p2, other.p1, tol);
        same || swapped
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line(({}, {}), ({}, {}))",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

impl fmt::Display for LineIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineIntersection::Empty => write!(f, "Empty"),
            LineIntersection::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            LineIntersection::Segment(l) => write!(f, "{l}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::types::pt;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Line {
        Line::new(pt(a.0, a.1), pt(b.0, b.1))
    }

    #[test]
    fn equality_ignores_endpoint_order() {
        assert_eq!(seg((0.0, 0.0), (1.0, 1.0)), seg((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(seg((0.0, 0.0), (1.0, 1.0)), seg((1.0, 1.0), (0.0, 0.0)));
        assert_ne!(seg((0.0, 0.0), (1.0, 1.0)), seg((0.0, 0.0), (1.0, 2.0)));
    }

    #[test]
    fn contains_table() {
        let cases = [
            (seg((0.0, 0.0), (1.0, 1.0)), (0.0, 0.0), true),
            (seg((0.0, 0.0), (1.0, 1.0)), (0.5, 0.5), true),
            (seg((0.0, 0.0), (1.0, 1.0)), (1.0, 1.0), true),
            (seg((0.0, 0.0), (1.0, 1.0)), (1.0, 0.0), false),
            (seg((0.0, 0.0), (1.0, 1.0)), (0.0, 1.0), false),
            (seg((0.0, 0.0), (1.0, 1.0)), (-1.0, 0.0), false),
            (seg((0.0, 0.0), (1.0, 1.0)), (0.0, -1.0), false),
            (seg((0.0, 0.0), (3.0, 3.0)), (1.0, 1.0), true),
            (seg((0.0, 0.0), (3.0, 3.0)), (2.0, 2.0), true),
        ];
        for (line, (x, y), exp) in cases {
            assert_eq!(line.contains(pt(x, y)), exp, "{line} contains ({x}, {y})");
        }
    }

    #[test]
    fn contains_rejects_points_on_the_extension() {
        let l = seg((0.0, 0.0), (1.0, 0.0));
        assert!(!l.contains(pt(1.5, 0.0)));
        assert!(!l.contains(pt(-0.01, 0.0)));
    }

    #[test]
    fn intersection_table() {
        use LineIntersection::{Empty, Point as P, Segment as S};
        let cases = [
            (seg((0.0, 0.0), (2.0, 2.0)), seg((0.0, 2.0), (2.0, 0.0)), P(pt(1.0, 1.0))),
            (seg((0.0, 0.0), (1.0, 1.0)), seg((1.0, 2.0), (2.0, 1.0)), Empty),
            (seg((0.0, 0.0), (1.0, 1.0)), seg((0.0, 3.0), (1.0, 2.0)), Empty),
            (seg((0.0, 0.0), (1.0, 1.0)), seg((1.0, 1.0), (2.0, 0.0)), P(pt(1.0, 1.0))),
            (seg((0.0, 0.0), (1.0, 1.0)), seg((1.0, 1.0), (2.0, 2.0)), P(pt(1.0, 1.0))),
            (seg((0.0, 0.0), (1.0, 1.0)), seg((0.0, 1.0), (1.0, 2.0)), Empty),
            (
                seg((0.0, 0.0), (2.0, 2.0)),
                seg((1.0, 1.0), (3.0, 3.0)),
                S(seg((1.0, 1.0), (2.0, 2.0))),
            ),
            (
                seg((0.0, 0.0), (3.0, 3.0)),
                seg((1.0, 1.0), (2.0, 2.0)),
                S(seg((1.0, 1.0), (2.0, 2.0))),
            ),
            (
                seg((0.0, 0.0), (2.0, 2.0)),
                seg((0.0, 0.0), (1.0, 1.0)),
                S(seg((0.0, 0.0), (1.0, 1.0))),
            ),
            (
                seg((0.0, 0.0), (2.0, 2.0)),
                seg((1.0, 1.0), (2.0, 2.0)),
                S(seg((1.0, 1.0), (2.0, 2.0))),
            ),
            (
                seg((0.0, 0.0), (1.0, 1.0)),
                seg((0.0, 0.0), (1.0, 1.0)),
                S(seg((0.0, 0.0), (1.0, 1.0))),
            ),
        ];
        for (a, b, exp) in cases {
            assert_eq!(a.intersection(&b), exp, "{a} ∩ {b}");
            assert_eq!(b.intersection(&a), exp, "{b} ∩ {a}");
        }
    }

    #[test]
    fn degenerate_segments_do_not_panic() {
        let dot = seg((1.0, 1.0), (1.0, 1.0));
        assert!(dot.is_degenerate());
        assert!(dot.contains(pt(1.0, 1.0)));
        assert!(!dot.contains(pt(1.0, 1.5)));
        let diag = seg((0.0, 0.0), (2.0, 2.0));
        assert_eq!(dot.intersection(&diag), LineIntersection::Point(pt(1.0, 1.0)));
        assert_eq!(diag.intersection(&dot), LineIntersection::Point(pt(1.0, 1.0)));
        let off = seg((5.0, 0.0), (5.0, 0.0));
        assert!(off.intersection(&diag).is_empty());
        assert_eq!(dot.intersection(&dot), LineIntersection::Point(pt(1.0, 1.0)));
    }

    #[test]
    fn accessors_and_display() {
        let l = seg((0.0, 1.0), (2.0, 3.0));
        assert_eq!(l.x(), [0.0, 2.0]);
        assert_eq!(l.y(), [1.0, 3.0]);
        assert_eq!(l.midpoint(), pt(1.0, 2.0));
        assert_eq!(l.to_string(), "Line((0, 1), (2, 3))");
    }

    #[test]
    fn custom_tolerance_is_honoured() {
        let l = seg((0.0, 0.0), (1.0, 0.0));
        let near = pt(0.5, 1e-2);
        assert!(!l.contains(near));
        assert!(l.contains_cfg(near, GeomCfg::with_tolerances(2e-2, 0.0)));
        assert!(l.contains_cfg(near, GeomCfg::with_tolerances(0.0, 2e-2)));
    }

    #[test]
    fn contains_slack_is_a_distance_off_the_segment() {
        let long = seg((0.0, 0.0), (1000.0, 0.0));
        assert!(!long.contains(pt(500.0, 2.0)));
        assert!(!long.contains(pt(500.0, 0.1)));
        assert!(long.contains(pt(500.0, 1e-3)));
        assert_eq!(long.distance_to(pt(1003.0, 4.0)), 5.0);
        assert_eq!(long.distance_to(pt(250.0, -3.0)), 3.0);
    }

    #[test]
    fn far_from_origin_matches_near_origin() {
        let o = 1e6;
        // perpendicular segments sharing a corner are different segments
        assert_ne!(seg((o, o), (o + 5.0, o)), seg((o, o), (o, o + 5.0)));
        assert_eq!(seg((o, o), (o + 5.0, o)), seg((o + 5.0, o), (o, o)));
        let a = seg((o, o), (o + 2.0, o + 2.0));
        let b = seg((o, o + 2.0), (o + 2.0, o));
        assert_eq!(a.intersection(&b), LineIntersection::Point(pt(o + 1.0, o + 1.0)));
        let c = seg((o + 1.0, o + 1.0), (o + 3.0, o + 3.0));
        assert_eq!(
            a.intersection(&c).segment(),
            Some(seg((o + 1.0, o + 1.0), (o + 2.0, o + 2.0)))
        );
        assert!(a.intersection(&seg((o, o + 1.0), (o + 1.0, o + 2.0))).is_empty());
        assert!(!seg((o, o), (o + 1e-3, o)).is_degenerate());
    }
}
