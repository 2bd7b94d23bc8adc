//! Closed segments given by endpoint pairs.
//!
//! Two tiers of intersection test:
//! - `proper_inter`: single crossing point strictly inside both segments.
//! - `inters`: any contact, including touching endpoints and collinear overlap.
//!
//! Both read orientation signs through the same `GeomCfg`, so a touching
//! configuration is never reported as a proper crossing.

use crate::cfg::GeomCfg;
use crate::line::Line;
use crate::predicates::{on_segment, orient, orientation};
use crate::vec2::{abs, Point};

/// Crossing point of `ab` and `cd` if they cross properly.
///
/// Endpoints of each segment must lie strictly on opposite sides of the
/// other one; the point is interpolated along the orientation values.
pub fn proper_inter(a: Point, b: Point, c: Point, d: Point, cfg: GeomCfg) -> Option<Point> {
    let side = |p: Point, q: Point, r: Point| orientation(p, q, r, cfg).signum();
    if side(c, d, a) * side(c, d, b) < 0 && side(a, b, c) * side(a, b, d) < 0 {
        let oa = orient(c, d, a);
        let ob = orient(c, d, b);
        Some((a * ob - b * oa) / (ob - oa))
    } else {
        None
    }
}

/// Whether closed segments `ab` and `cd` share at least one point.
pub fn inters(a: Point, b: Point, c: Point, d: Point, cfg: GeomCfg) -> bool {
    proper_inter(a, b, c, d, cfg).is_some()
        || on_segment(c, d, a, cfg)
        || on_segment(c, d, b, cfg)
        || on_segment(a, b, c, cfg)
        || on_segment(a, b, d, cfg)
}

/// Distance from `p` to segment `ab`. A degenerate segment is a point.
pub fn seg_point(a: Point, b: Point, p: Point, cfg: GeomCfg) -> f64 {
    if let Ok(l) = Line::through(a, b, cfg) {
        if l.cmp_proj(a, p, cfg) && l.cmp_proj(p, b, cfg) {
            return l.dist(p);
        }
    }
    abs(p - a).min(abs(p - b))
}

/// Distance between segments `ab` and `cd`.
pub fn seg_seg(a: Point, b: Point, c: Point, d: Point, cfg: GeomCfg) -> f64 {
    if proper_inter(a, b, c, d, cfg).is_some() {
        return 0.0;
    }
    seg_point(a, b, c, cfg)
        .min(seg_point(a, b, d, cfg))
        .min(seg_point(c, d, a, cfg))
        .min(seg_point(c, d, b, cfg))
}
