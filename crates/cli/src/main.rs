use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::api::{GeomCfg, Polygon, Winding};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod plot;
mod shapes;

use shapes::{parse_point, parse_polygon, parse_segment};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Segments, polygons and convex clipping in the plane")]
#[command(version = planar::VERSION)]
struct Cmd {
    /// Absolute tolerance for point comparisons
    #[arg(long, global = true)]
    abs_tol: Option<f64>,

    /// Relative tolerance for point comparisons
    #[arg(long, global = true)]
    rel_tol: Option<f64>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a counter-clockwise polygon is convex
    Convex {
        /// Vertices as "x,y x,y ..."
        #[arg(long)]
        poly: String,
    },
    /// Closed point-in-polygon test for a convex counter-clockwise polygon
    Contains {
        #[arg(long)]
        poly: String,
        #[arg(long)]
        point: String,
    },
    /// Drop vertices lying on the segment between their neighbours
    Reduce {
        #[arg(long)]
        poly: String,
    },
    /// Intersect two segments given as "x,y x,y"
    Segments {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Intersect two convex counter-clockwise polygons
    Intersect {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        /// Write plot data (JSON) for operands and result
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .init();

    let cfg = tolerances(cmd.abs_tol, cmd.rel_tol);
    match cmd.action {
        Action::Convex { poly } => convex(&poly, cfg),
        Action::Contains { poly, point } => contains(&poly, &point, cfg),
        Action::Reduce { poly } => reduce(&poly, cfg),
        Action::Segments { a, b } => segments(&a, &b, cfg),
        Action::Intersect { a, b, out } => intersect(&a, &b, out, cfg),
    }
}

fn tolerances(abs_tol: Option<f64>, rel_tol: Option<f64>) -> GeomCfg {
    let base = GeomCfg::default();
    GeomCfg::with_tolerances(
        abs_tol.unwrap_or(base.eps_abs),
        rel_tol.unwrap_or(base.eps_rel),
    )
}

/// Log a warning when a polygon is not counter-clockwise; the predicates assume it.
fn check_winding(name: &str, p: &Polygon) {
    let w = p.winding();
    if w != Winding::CounterClockwise {
        tracing::warn!(polygon = name, winding = ?w, "expected counter-clockwise vertices");
    }
}

fn convex(poly: &str, cfg: GeomCfg) -> Result<()> {
    let p = parse_polygon(poly)?;
    tracing::info!(vertices = p.len(), "convex");
    check_winding("poly", &p);
    println!("{}", p.convex_cfg(cfg));
    Ok(())
}

fn contains(poly: &str, point: &str, cfg: GeomCfg) -> Result<()> {
    let p = parse_polygon(poly)?;
    let q = parse_point(point)?;
    tracing::info!(vertices = p.len(), x = q.x, y = q.y, "contains");
    check_winding("poly", &p);
    println!("{}", p.contains_cfg(q, cfg));
    Ok(())
}

fn reduce(poly: &str, cfg: GeomCfg) -> Result<()> {
    let p = parse_polygon(poly)?;
    let r = p.reduce_cfg(cfg);
    tracing::info!(before = p.len(), after = r.len(), "reduce");
    println!("{r}");
    Ok(())
}

fn segments(a: &str, b: &str, cfg: GeomCfg) -> Result<()> {
    let la = parse_segment(a).context("segment --a")?;
    let lb = parse_segment(b).context("segment --b")?;
    tracing::info!(a = %la, b = %lb, "segments");
    println!("{}", la.intersection_cfg(&lb, cfg));
    Ok(())
}

fn intersect(a: &str, b: &str, out: Option<PathBuf>, cfg: GeomCfg) -> Result<()> {
    let pa = parse_polygon(a).context("polygon --a")?;
    let pb = parse_polygon(b).context("polygon --b")?;
    tracing::info!(a = pa.len(), b = pb.len(), "intersect");
    check_winding("a", &pa);
    check_winding("b", &pb);
    let result = pa
        .intersection_cfg(&pb, cfg)
        .context("polygon intersection")?;
    println!("{result}");
    if let Some(path) = out {
        plot::write_plot(&path, &plot::PlotDoc::intersection(&pa, &pb, &result))?;
        tracing::info!(out = %path.display(), "plot data written");
    }
    Ok(())
}
