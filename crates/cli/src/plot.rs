//! Plot-data documents for an external renderer.
//!
//! Each shape is written as ordered `x`/`y` coordinate lists plus its kind;
//! polygons are not closed (the renderer repeats the first vertex).

use anyhow::{Context, Result};
use planar::api::{Line, Point, Polygon, PolygonIntersection};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Empty,
    Point,
    Segment,
    Polygon,
}

#[derive(Clone, Debug, Serialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Shape {
    pub fn polygon(p: &Polygon) -> Self {
        Self {
            kind: ShapeKind::Polygon,
            x: p.x(),
            y: p.y(),
        }
    }

    fn point(p: Point) -> Self {
        Self {
            kind: ShapeKind::Point,
            x: vec![p.x],
            y: vec![p.y],
        }
    }

    fn segment(l: &Line) -> Self {
        Self {
            kind: ShapeKind::Segment,
            x: l.x().to_vec(),
            y: l.y().to_vec(),
        }
    }
}

impl From<&PolygonIntersection> for Shape {
    fn from(i: &PolygonIntersection) -> Self {
        match i {
            PolygonIntersection::Empty => Shape {
                kind: ShapeKind::Empty,
                x: Vec::new(),
                y: Vec::new(),
            },
            PolygonIntersection::Point(p) => Shape::point(*p),
            PolygonIntersection::Segment(l) => Shape::segment(l),
            PolygonIntersection::Polygon(p) => Shape::polygon(p),
        }
    }
}

/// Operands and result of one intersection, tagged with the library version.
#[derive(Clone, Debug, Serialize)]
pub struct PlotDoc {
    pub version: &'static str,
    pub operands: Vec<Shape>,
    pub result: Shape,
}

impl PlotDoc {
    pub fn intersection(a: &Polygon, b: &Polygon, result: &PolygonIntersection) -> Self {
        Self {
            version: planar::VERSION,
            operands: vec![Shape::polygon(a), Shape::polygon(b)],
            result: Shape::from(result),
        }
    }
}

/// Write `doc` as pretty JSON, creating parent directories as needed.
pub fn write_plot<P: AsRef<Path>>(path: P, doc: &PlotDoc) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating plot dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
