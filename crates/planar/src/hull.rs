//! Andrew's monotone chain convex hull.
//!
//! Algorithm
//! - Sort by (x, y) and collapse points equal under `GeomCfg::points_eq`.
//!   Such points lie within `eps` of each other in x, so each point is only
//!   compared against the kept points of that x-window.
//! - Lower pass left to right, then upper pass right to left, both into one
//!   per-call buffer. Pops read the exact orientation sign, which agrees with
//!   the exact sort. The upper pass never pops into the finished lower chain.
//!   The last pushed point repeats the first one and is dropped.
//! - A sweep around the closed chain removes vertices collinear with their
//!   neighbours under `cfg`.
//! - `HullMode::KeepCollinear` then inserts every input point lying on a hull
//!   edge under `cfg`, in order along the edge.
//!
//! Output: CCW order, starting at the lexicographically smallest hull point.
//!
//! Degenerate input is rejected: fewer than 3 distinct points give
//! `InsufficientPoints`, a set collinear under `cfg` gives `CollinearPoints`.

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::predicates::{on_segment, orient, orientation, Orientation};
use crate::vec2::{dot, lex_cmp, Point};

/// Treatment of points lying on a hull edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullMode {
    /// Keep only strict turns; collinear boundary points are dropped.
    #[default]
    Strict,
    /// Keep boundary points lying on hull edges.
    KeepCollinear,
}

/// Convex hull with collinear boundary points excluded.
pub fn convex_hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>> {
    convex_hull_with(points, HullMode::Strict, cfg)
}

/// Convex hull with an explicit `HullMode`.
pub fn convex_hull_with(points: &[Point], mode: HullMode, cfg: GeomCfg) -> Result<Vec<Point>> {
    let pts = distinct_sorted(points, cfg);
    if pts.len() < 3 {
        tracing::debug!(input = points.len(), distinct = pts.len(), "hull rejected");
        return Err(GeomError::InsufficientPoints {
            expected: 3,
            actual: pts.len(),
        });
    }
    let (first, last) = (pts[0], pts[pts.len() - 1]);
    if pts
        .iter()
        .all(|&p| orientation(first, last, p, cfg) == Orientation::Collinear)
    {
        tracing::debug!(distinct = pts.len(), "hull rejected: collinear input");
        return Err(GeomError::CollinearPoints { count: pts.len() });
    }

    let hull = drop_flat_vertices(monotone_chain(&pts), cfg);
    if hull.len() < 3 {
        tracing::debug!(distinct = pts.len(), "hull rejected: flat within tolerance");
        return Err(GeomError::CollinearPoints { count: pts.len() });
    }
    let mut hull = match mode {
        HullMode::Strict => hull,
        HullMode::KeepCollinear => with_edge_points(&hull, &pts, cfg),
    };
    if let Some(start) = (0..hull.len()).min_by(|&i, &j| lex_cmp(&hull[i], &hull[j])) {
        hull.rotate_left(start);
    }
    tracing::trace!(input = points.len(), hull = hull.len(), ?mode, "convex hull");
    Ok(hull)
}

/// Lexicographically sorted input, each `points_eq` class reduced to its
/// first member.
fn distinct_sorted(points: &[Point], cfg: GeomCfg) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(lex_cmp);
    let mut kept: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted {
        let seen = kept
            .iter()
            .rev()
            .take_while(|q| p.x - q.x <= cfg.eps)
            .any(|q| cfg.points_eq(*q, p));
        if !seen {
            kept.push(p);
        }
    }
    kept
}

/// Closed CCW chain over sorted distinct points, strictly convex in exact
/// arithmetic. The closing point is not repeated.
fn monotone_chain(pts: &[Point]) -> Vec<Point> {
    let exact = GeomCfg::exact();
    let turns_left = |chain: &[Point], p: Point| {
        let n = chain.len();
        orientation(chain[n - 2], chain[n - 1], p, exact) == Orientation::CounterClockwise
    };
    let mut chain: Vec<Point> = Vec::with_capacity(pts.len() + 1);
    for &p in pts {
        while chain.len() >= 2 && !turns_left(&chain, p) {
            chain.pop();
        }
        chain.push(p);
    }
    let lower_len = chain.len();
    for &p in pts.iter().rev().skip(1) {
        while chain.len() > lower_len && !turns_left(&chain, p) {
            chain.pop();
        }
        chain.push(p);
    }
    // closing point == pts[0]
    chain.pop();
    chain
}

/// Removes vertices that are collinear with their neighbours under `cfg`,
/// including across the wrap-around.
fn drop_flat_vertices(chain: Vec<Point>, cfg: GeomCfg) -> Vec<Point> {
    let turns_left = |a: Point, b: Point, c: Point| {
        orientation(a, b, c, cfg) == Orientation::CounterClockwise
    };
    let mut hull: Vec<Point> = Vec::with_capacity(chain.len());
    for p in chain {
        while hull.len() >= 2 && !turns_left(hull[hull.len() - 2], hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(p);
    }
    loop {
        let n = hull.len();
        if n < 3 {
            break;
        }
        if !turns_left(hull[n - 2], hull[n - 1], hull[0]) {
            hull.pop();
        } else if !turns_left(hull[n - 1], hull[0], hull[1]) {
            hull.remove(0);
        } else {
            break;
        }
    }
    hull
}

/// Index `w` in `1..n - 1` of the fan triangle `(hull[0], hull[w], hull[w + 1])`
/// whose angle at `hull[0]` holds `q`. Points outside the fan map to an end.
fn fan_wedge(hull: &[Point], q: Point) -> usize {
    let (mut lo, mut hi) = (1, hull.len() - 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if orient(hull[0], hull[mid], q) >= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// `hull` (at least 3 vertices) with the non-vertex points of `pts` that lie
/// on one of its edges inserted after the edge's start, ordered along it.
fn with_edge_points(hull: &[Point], pts: &[Point], cfg: GeomCfg) -> Vec<Point> {
    let n = hull.len();
    let mut corners = hull.to_vec();
    corners.sort_by(lex_cmp);
    let mut extra: Vec<(usize, f64, Point)> = Vec::new();
    for &q in pts {
        if corners.binary_search_by(|v| lex_cmp(v, &q)).is_ok() {
            continue;
        }
        // the fan edges at hull[0] plus the far edge of q's wedge and its
        // neighbours, which catch points near a vertex
        let w = fan_wedge(hull, q);
        let edge = [0, w - 1, w, w + 1, n - 1]
            .into_iter()
            .map(|k| (k, hull[k], hull[(k + 1) % n]))
            .find(|&(_, a, b)| on_segment(a, b, q, cfg));
        if let Some((k, a, b)) = edge {
            extra.push((k, dot(q - a, b - a), q));
        }
    }
    extra.sort_by(|x, y| x.0.cmp(&y.0).then(x.1.total_cmp(&y.1)));
    let mut out = Vec::with_capacity(n + extra.len());
    let mut rest = extra.into_iter().peekable();
    for (k, &v) in hull.iter().enumerate() {
        out.push(v);
        while let Some((_, _, q)) = rest.next_if(|e| e.0 == k) {
            out.push(q);
        }
    }
    out
}
