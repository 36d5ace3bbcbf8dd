//! Coordinate parsing for command-line shapes.
//!
//! Points are written `x,y`; polygons and segments are whitespace-separated
//! point lists, e.g. `"0,0 2,0 2,2 0,2"`.

use anyhow::{bail, Context, Result};
use planar::api::{pt, Line, Point, Polygon};

pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.trim().split_once(',') else {
        bail!("expected `x,y`, got `{s}`");
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in `{s}`"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in `{s}`"))?;
    Ok(pt(x, y))
}

pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split_whitespace().map(parse_point).collect()
}

pub fn parse_polygon(s: &str) -> Result<Polygon> {
    let points = parse_points(s)?;
    Polygon::new(points).with_context(|| format!("polygon `{s}`"))
}

pub fn parse_segment(s: &str) -> Result<Line> {
    match parse_points(s)?.as_slice() {
        [a, b] => Ok(Line::new(*a, *b)),
        other => bail!("segment needs two points, got {}", other.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_with_spaces_and_signs() {
        assert_eq!(parse_point("1.5,-2").unwrap(), pt(1.5, -2.0));
        assert_eq!(parse_point(" 3 , 4 ").unwrap(), pt(3.0, 4.0));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,b").is_err());
    }

    #[test]
    fn parses_polygon_ring() {
        let p = parse_polygon("0,0 2,0 2,2 0,2").unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.x(), vec![0.0, 2.0, 2.0, 0.0]);
        assert_eq!(p.y(), vec![0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn empty_polygon_is_an_error() {
        let err = parse_polygon("   ").unwrap_err();
        assert!(format!("{err:#}").contains("no vertices"), "{err:#}");
    }

    #[test]
    fn segment_needs_exactly_two_points() {
        assert_eq!(
            parse_segment("0,0 1,1").unwrap(),
            Line::new(pt(1.0, 1.0), pt(0.0, 0.0))
        );
        assert!(parse_segment("0,0").is_err());
        assert!(parse_segment("0,0 1,1 2,2").is_err());
    }
}
