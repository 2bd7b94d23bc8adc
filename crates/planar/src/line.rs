//! Lines in the plane, stored as direction `v` and offset `c`.
//!
//! A point `p` lies on the line iff `cross(v, p) == c`. The sign of
//! `side(p) = cross(v, p) - c` tells on which side `p` is: positive means to
//! the left when walking along `v`.
//!
//! Invariant: `v` is non-zero. The fields are private and every constructor
//! checks it against the caller's `GeomCfg`; the helper methods rely on it
//! and do not re-check.

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::vec2::{abs, cross, dot, perp, sq, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    v: Point,
    c: f64,
}

impl Line {
    /// Line through `p` and `q`, directed from `p` to `q`.
    pub fn through(p: Point, q: Point, cfg: GeomCfg) -> Result<Self> {
        if cfg.points_eq(p, q) {
            tracing::debug!(?p, "line through coincident points");
            return Err(GeomError::invalid("line through coincident points"));
        }
        let v = q - p;
        Ok(Self { v, c: cross(v, p) })
    }

    /// Line `a·x + b·y = c`.
    pub fn from_equation(a: f64, b: f64, c: f64, cfg: GeomCfg) -> Result<Self> {
        Self::from_direction(Point::new(b, -a), c, cfg)
    }

    /// Line with direction `v` and offset `c`.
    pub fn from_direction(v: Point, c: f64, cfg: GeomCfg) -> Result<Self> {
        if cfg.is_zero(v.x) && cfg.is_zero(v.y) {
            tracing::debug!(?v, "line with zero direction");
            return Err(GeomError::invalid("line with zero direction"));
        }
        Ok(Self { v, c })
    }

    /// Direction vector (non-zero).
    #[inline]
    pub fn direction(&self) -> Point {
        self.v
    }

    /// Offset `c` of `cross(v, p) == c`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.c
    }

    /// Signed side value: > 0 left of the line, < 0 right, 0 on it.
    #[inline]
    pub fn side(&self, p: Point) -> f64 {
        cross(self.v, p) - self.c
    }

    #[inline]
    pub fn dist(&self, p: Point) -> f64 {
        self.side(p).abs() / abs(self.v)
    }

    #[inline]
    pub fn sq_dist(&self, p: Point) -> f64 {
        let s = self.side(p);
        s * s / sq(self.v)
    }

    /// Perpendicular line through `p`.
    #[inline]
    pub fn perp_through(&self, p: Point) -> Line {
        let v = perp(self.v);
        Line { v, c: cross(v, p) }
    }

    /// Whether `p` comes strictly before `q` when both are projected onto
    /// the line and ordered along `v`.
    #[inline]
    pub fn cmp_proj(&self, p: Point, q: Point, cfg: GeomCfg) -> bool {
        cfg.sign_scaled(dot(self.v, q - p), abs(self.v)) > 0
    }

    /// Translation by vector `t`.
    #[inline]
    pub fn translate(&self, t: Point) -> Line {
        Line {
            v: self.v,
            c: self.c + cross(self.v, t),
        }
    }

    /// Parallel line shifted `dist` to the left (negative shifts right).
    #[inline]
    pub fn shift_left(&self, dist: f64) -> Line {
        Line {
            v: self.v,
            c: self.c + dist * abs(self.v),
        }
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn proj(&self, p: Point) -> Point {
        p - perp(self.v) * self.side(p) / sq(self.v)
    }

    /// Mirror image of `p` across the line.
    #[inline]
    pub fn refl(&self, p: Point) -> Point {
        p - perp(self.v) * 2.0 * self.side(p) / sq(self.v)
    }
}

/// Parallel up to an angle whose sine is within `eps`.
#[inline]
pub fn are_parallel(l1: &Line, l2: &Line, cfg: GeomCfg) -> bool {
    cfg.sign_scaled(cross(l1.v, l2.v), abs(l1.v) * abs(l2.v)) == 0
}

/// Parallel and within `eps` of each other, i.e. the same point set.
pub fn are_same(l1: &Line, l2: &Line, cfg: GeomCfg) -> bool {
    are_parallel(l1, l2, cfg) && cfg.is_zero(l1.dist(l2.proj(Point::zeros())))
}

/// Unique intersection point, or `None` for parallel (or identical) lines.
/// Use `are_same` to tell those two apart.
pub fn inter(l1: &Line, l2: &Line, cfg: GeomCfg) -> Option<Point> {
    if are_parallel(l1, l2, cfg) {
        return None;
    }
    Some((l2.v * l1.c - l1.v * l2.c) / cross(l1.v, l2.v))
}

/// Bisector of the angle between two crossing lines.
///
/// With `interior` the result bisects the angle between the two direction
/// vectors; otherwise it bisects the supplementary angle.
pub fn int_bisector(l1: &Line, l2: &Line, interior: bool, cfg: GeomCfg) -> Result<Line> {
    if are_parallel(l1, l2, cfg) {
        return Err(GeomError::invalid("bisector of parallel lines"));
    }
    let sign = if interior { 1.0 } else { -1.0 };
    let (n1, n2) = (abs(l1.v), abs(l2.v));
    Ok(Line {
        v: l2.v / n2 + l1.v * sign / n1,
        c: l2.c / n2 + l1.c * sign / n1,
    })
}
