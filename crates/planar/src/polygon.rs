//! Simple polygons as implicitly closed vertex slices.
//!
//! Either winding is accepted. Area is reported unsigned unless the name
//! says otherwise; `signed_area_polygon` is positive for CCW input.
//!
//! Containment
//! - `point_in_polygon` is the plain ray-casting parity test. Each edge is
//!   taken over the half-open y-interval `[y_min, y_max)` and counted when it
//!   lies strictly right of the query point. Boundary points therefore land
//!   on whichever side that rule puts them: for an axis-aligned box the
//!   left and bottom sides count as inside, the right and top sides as outside.
//! - `locate_point` adds an explicit `Boundary` answer on top of it.

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::predicates::{on_segment, orient, orientation};
use crate::vec2::{abs, cross, Point};

/// Three-way answer of `locate_point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointLocation {
    Inside,
    Outside,
    Boundary,
}

/// Wrap-around edge iterator `(p[i], p[i + 1 mod n])`.
#[inline]
fn edges(p: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = p.len();
    (0..n).map(move |i| (p[i], p[(i + 1) % n]))
}

/// True iff the turns along the polygon never take both signs.
/// Collinear triples are ignored, so repeated or straight vertices are fine.
pub fn is_convex(p: &[Point], cfg: GeomCfg) -> bool {
    let n = p.len();
    let mut has_pos = false;
    let mut has_neg = false;
    for i in 0..n {
        match orientation(p[i], p[(i + 1) % n], p[(i + 2) % n], cfg).signum() {
            1 => has_pos = true,
            -1 => has_neg = true,
            _ => {}
        }
    }
    !(has_pos && has_neg)
}

#[inline]
pub fn area_triangle(a: Point, b: Point, c: Point) -> f64 {
    orient(a, b, c).abs() / 2.0
}

/// Shoelace area, positive for counterclockwise vertex order.
pub fn signed_area_polygon(p: &[Point]) -> f64 {
    edges(p).map(|(a, b)| cross(a, b)).sum::<f64>() / 2.0
}

#[inline]
pub fn area_polygon(p: &[Point]) -> f64 {
    signed_area_polygon(p).abs()
}

/// Area centroid. Zero-area polygons have none; the area is judged
/// against the perimeter, so a sliver thinner than `eps` counts as zero.
pub fn centroid_polygon(p: &[Point], cfg: GeomCfg) -> Result<Point> {
    let area = signed_area_polygon(p);
    let perimeter: f64 = edges(p).map(|(a, b)| abs(b - a)).sum();
    if cfg.sign_scaled(area, perimeter) == 0 {
        return Err(GeomError::invalid("centroid of a zero-area polygon"));
    }
    let sum = edges(p).fold(Point::zeros(), |acc, (a, b)| acc + (a + b) * cross(a, b));
    Ok(sum / (6.0 * area))
}

/// Ray-casting parity test (see module docs for boundary behavior).
pub fn point_in_polygon(p: &[Point], q: Point) -> bool {
    let mut inside = false;
    for (a, b) in edges(p) {
        let spans = (a.y <= q.y && q.y < b.y) || (b.y <= q.y && q.y < a.y);
        if spans && q.x < a.x + (b.x - a.x) * (q.y - a.y) / (b.y - a.y) {
            inside = !inside;
        }
    }
    inside
}

/// Inside/outside/boundary classification.
pub fn locate_point(p: &[Point], q: Point, cfg: GeomCfg) -> PointLocation {
    if edges(p).any(|(a, b)| on_segment(a, b, q, cfg)) {
        PointLocation::Boundary
    } else if point_in_polygon(p, q) {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}
