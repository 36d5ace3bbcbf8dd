//! Basic 2D types and tolerances shared by segments and polygons.
//!
//! - `Point`: a 2D coordinate pair (`nalgebra::Vector2<f64>`).
//! - `GeomCfg`: centralizes epsilons for closeness, angle and parallelism checks.
//!
//! Code cross-refs: `line::Line`, `polygon::Polygon`, `util::points_close`

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Shorthand constructor, handy in tests and call sites with literal coordinates.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Geometry configuration (tolerances).
///
/// Two points are close when their distance is at most
/// `eps_abs + eps_rel * scale`, where `scale` is a length of the shapes being
/// compared (segment length, polygon extent), never a coordinate magnitude.
/// Results therefore do not change when both operands are translated.
///
/// `Line::contains` uses the same slack for the distance from the point to the
/// segment, so a point may sit up to `eps_rel` times the segment length off the
/// line and still count as on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Absolute distance slack.
    pub eps_abs: f64,
    /// Distance slack per unit of shape size.
    pub eps_rel: f64,
    /// Slack (radians) for turning angles and relative phases.
    pub eps_angle: f64,
    /// Relative threshold on the homogeneous weight below which two lines are parallel.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_abs: 1e-8,
            eps_rel: 1e-5,
            eps_angle: 1e-9,
            eps_det: 1e-12,
        }
    }
}

impl GeomCfg {
    /// Same angle/determinant slack, custom closeness tolerances.
    #[inline]
    pub fn with_tolerances(eps_abs: f64, eps_rel: f64) -> Self {
        Self {
            eps_abs,
            eps_rel,
            ..Self::default()
        }
    }

    /// Distance slack for shapes of size `scale`.
    #[inline]
    pub fn tol(&self, scale: f64) -> f64 {
        self.eps_abs + self.eps_rel * scale.abs()
    }
}

/// Orientation of a vertex ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area (collinear or single-point rings).
    Degenerate,
}
