//! Property tests over random segments and random convex polygons.

use proptest::prelude::*;

use super::rand::{draw_convex, DrawSeed, RadialCfg};
use super::{pt, GeomCfg, Line, LineIntersection, Point, Polygon, PolygonIntersection};

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| pt(x, y))
}

fn far() -> impl Strategy<Value = f64> {
    -1e6..1e6f64
}

fn convex_poly(seed: u64, index: u64, center: Point) -> Polygon {
    let cfg = RadialCfg {
        center,
        ..RadialCfg::default()
    };
    draw_convex(cfg, DrawSeed { seed, index }).expect("hull of >= 3 jittered points")
}

fn area(i: &PolygonIntersection) -> f64 {
    match i {
        PolygonIntersection::Polygon(p) => p.signed_area().abs(),
        PolygonIntersection::Empty
        | PolygonIntersection::Point(_)
        | PolygonIntersection::Segment(_) => 0.0,
    }
}

fn vertices(i: &PolygonIntersection) -> Vec<Point> {
    match i {
        PolygonIntersection::Empty => vec![],
        PolygonIntersection::Point(p) => vec![*p],
        PolygonIntersection::Segment(l) => vec![l.p1, l.p2],
        PolygonIntersection::Polygon(p) => p.points().to_vec(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn segment_contains_endpoints_and_midpoint(a in point(), b in point()) {
        let l = Line::new(a, b);
        prop_assert!(l.contains(a));
        prop_assert!(l.contains(b));
        prop_assert!(l.contains(l.midpoint()));
    }

    #[test]
    fn segment_equality_ignores_order(a in point(), b in point()) {
        prop_assert_eq!(Line::new(a, b), Line::new(b, a));
    }

    #[test]
    fn segment_intersection_is_symmetric(a in point(), b in point(), c in point(), d in point()) {
        let ab = Line::new(a, b);
        let cd = Line::new(c, d);
        prop_assert_eq!(ab.intersection(&cd), cd.intersection(&ab));
    }

    #[test]
    fn segment_intersection_lies_on_both(a in point(), b in point(), c in point(), d in point()) {
        let ab = Line::new(a, b);
        let cd = Line::new(c, d);
        if let LineIntersection::Point(p) = ab.intersection(&cd) {
            prop_assert!(ab.contains(p) && cd.contains(p));
        }
    }

    #[test]
    fn shared_endpoint_is_the_intersection(a in point(), b in point(), c in point()) {
        // skip near-collinear and short segments
        let turn = (b - a).perp(&(c - a));
        prop_assume!((b - a).norm() > 1.0 && (c - a).norm() > 1.0);
        prop_assume!(turn.abs() > 1e-2 * (b - a).norm() * (c - a).norm());
        let got = Line::new(a, b).intersection(&Line::new(a, c));
        let p = got.point();
        prop_assert!(p.is_some(), "{:?}", got);
        prop_assert!(p.is_some_and(|p| (p - a).norm() < 1e-6));
    }

    #[test]
    fn reduce_only_removes(coords in prop::collection::vec((coord(), coord()), 1..12)) {
        let p = Polygon::from_coords(&coords).unwrap();
        let r = p.reduce();
        prop_assert!(r.len() <= p.len());
        for v in r.points() {
            prop_assert!(p.points().contains(v));
        }
    }

    #[test]
    fn random_convex_polygons_are_convex(seed in any::<u64>(), index in 0u64..1000) {
        let p = convex_poly(seed, index, pt(0.0, 0.0));
        prop_assert!(p.convex());
        for &v in p.points() {
            prop_assert!(p.contains(v));
        }
        prop_assert!(p.edges().all(|e| p.contains(e.midpoint())));
    }

    #[test]
    fn clipping_is_commutative(
        seed in any::<u64>(),
        dx in -1.5..1.5f64,
        dy in -1.5..1.5f64,
    ) {
        let a = convex_poly(seed, 0, pt(0.0, 0.0));
        let b = convex_poly(seed, 1, pt(dx, dy));
        let ab = a.intersection(&b).unwrap();
        let ba = b.intersection(&a).unwrap();
        prop_assert!((area(&ab) - area(&ba)).abs() < 1e-6, "{:?} vs {:?}", ab, ba);
        let loose = GeomCfg::with_tolerances(1e-6, 1e-6);
        for v in vertices(&ab).into_iter().chain(vertices(&ba)) {
            prop_assert!(a.contains_cfg(v, loose) && b.contains_cfg(v, loose));
        }
    }

    #[test]
    fn polygons_far_from_origin_stay_convex(seed in any::<u64>(), cx in far(), cy in far()) {
        let p = convex_poly(seed, 5, pt(cx, cy));
        prop_assert!(p.convex(), "{}", p);
        for &v in p.points() {
            prop_assert!(p.contains(v));
        }
        prop_assert!(p.edges().all(|e| p.contains(e.midpoint())));
        prop_assert_eq!(p.intersection(&p).unwrap(), PolygonIntersection::Polygon(p.reduce()));
    }

    #[test]
    fn clipping_area_ignores_translation(
        seed in any::<u64>(),
        dx in -1.5..1.5f64,
        dy in -1.5..1.5f64,
        cx in far(),
        cy in far(),
    ) {
        let near = convex_poly(seed, 0, pt(0.0, 0.0))
            .intersection(&convex_poly(seed, 1, pt(dx, dy)))
            .unwrap();
        let shifted = convex_poly(seed, 0, pt(cx, cy))
            .intersection(&convex_poly(seed, 1, pt(cx + dx, cy + dy)))
            .unwrap();
        prop_assert!((area(&near) - area(&shifted)).abs() < 1e-6, "{:?} vs {:?}", near, shifted);
    }

    #[test]
    fn clipping_with_itself_is_identity(seed in any::<u64>()) {
        let a = convex_poly(seed, 3, pt(0.0, 0.0));
        let got = a.intersection(&a).unwrap();
        prop_assert_eq!(got, PolygonIntersection::Polygon(a.reduce()));
    }
}
