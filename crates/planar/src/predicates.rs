//! Orientation predicate and the tests built directly on it.
//!
//! `orient` is the single source of turn direction for the whole crate:
//! segment intersection, convexity, containment and the hull all read its
//! sign through `orientation`, which scales the tolerance by the longest
//! side of the triple.

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::vec2::{abs, cross, dot, Point};

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// +1 for CCW, -1 for CW, 0 for collinear.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// `cross(b - a, c - a)`: twice the signed area of triangle (a, b, c).
/// Positive when (a, b, c) turn counterclockwise.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}

/// Tolerant classification of `orient(a, b, c)`.
///
/// Collinear when the triangle's height over its longest side is within
/// `eps`, i.e. some vertex lies within `eps` of the line through the other
/// two. Symmetric under any permutation of the triple.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Orientation {
    let longest = abs(b - a).max(abs(c - a)).max(abs(c - b));
    match cfg.sign_scaled(orient(a, b, c), longest) {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Whether ray `a→x` lies in the sector spanned at `a` by `b` and `c`,
/// taken the short way round. Boundary rays count as inside.
///
/// Errors with `InvalidGeometry` if (a, b, c) is collinear: the sector is
/// then undefined (zero or a half-plane with no preferred side).
pub fn in_angle(a: Point, b: Point, c: Point, x: Point, cfg: GeomCfg) -> Result<bool> {
    let (b, c) = match orientation(a, b, c, cfg) {
        Orientation::Collinear => {
            return Err(GeomError::invalid("in_angle: sector rays are collinear"))
        }
        Orientation::Clockwise => (c, b),
        Orientation::CounterClockwise => (b, c),
    };
    Ok(orientation(a, b, x, cfg) != Orientation::Clockwise
        && orientation(a, c, x, cfg) != Orientation::CounterClockwise)
}

/// Whether `p` lies in the closed disk with diameter `ab`, up to `eps`
/// beyond its rim.
#[inline]
pub fn in_disk(a: Point, b: Point, p: Point, cfg: GeomCfg) -> bool {
    // dot = (|p - m| - r) * (|p - m| + r) for midpoint m and radius r
    let rim = abs(p - (a + b) / 2.0) + abs(a - b) / 2.0;
    cfg.sign_scaled(dot(a - p, b - p), rim) <= 0
}

/// Whether `p` lies on the closed segment `ab` (collinear and within the disk).
#[inline]
pub fn on_segment(a: Point, b: Point, p: Point, cfg: GeomCfg) -> bool {
    orientation(a, b, p, cfg) == Orientation::Collinear && in_disk(a, b, p, cfg)
}
