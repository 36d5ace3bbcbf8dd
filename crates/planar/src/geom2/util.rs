use std::f64::consts::{PI, TAU};

use super::types::{GeomCfg, Point};

/// Direction angle of `d` normalized into `[0, 2π)`.
#[inline]
pub(crate) fn phase(d: Point) -> f64 {
    let a = d.y.atan2(d.x).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Wrap an angle into `(-π, π]`.
#[inline]
pub(crate) fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -PI {
        x += TAU;
    }
    while x > PI {
        x -= TAU;
    }
    x
}

/// Whether `a` and `b` are at most `tol` apart (see `GeomCfg::tol`).
#[inline]
pub fn points_close(a: Point, b: Point, tol: f64) -> bool {
    (a - b).norm() <= tol
}

/// Drop points within `tol` of an earlier one, keeping first-seen order.
pub(crate) fn dedup_close(points: &[Point], tol: f64) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.iter().any(|&q| points_close(p, q, tol)) {
            out.push(p);
        }
    }
    out
}

/// Twice the signed area of the triangle `(a, b, c)`.
#[inline]
pub(crate) fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b - a).perp(&(c - a))
}

/// Counter-clockwise convex hull (monotone chain); collinear hull points are dropped.
/// Fewer than three distinct points come back sorted.
pub(crate) fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut hull = half_hull(pts.iter());
    hull.extend(half_hull(pts.iter().rev()));
    hull
}

/// One chain of strict left turns, without its last point (the other chain starts there).
fn half_hull<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for &p in pts {
        while let [.., a, b] = chain.as_slice() {
            if cross(*a, *b, p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}

/// Order points by angle around their centroid (CCW, starting near angle -π).
pub(crate) fn sort_ccw_around_centroid(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let c = points.iter().fold(Point::zeros(), |acc, p| acc + p) / points.len() as f64;
    points.sort_by(|a, b| {
        let aa = (a.y - c.y).atan2(a.x - c.x);
        let bb = (b.y - c.y).atan2(b.x - c.x);
        aa.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
    });
}
