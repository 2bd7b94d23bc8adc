//! Circles: construction from points, intersections, common tangents.
//!
//! Counting results (`Crossing`, `Tangents`) distinguish the generic case
//! from tangency through the `GeomCfg` sign of the discriminant. Each
//! discriminant is a difference of squares `x² - y²` and is tested against
//! `eps * (x + y)`, so tangency means the two lengths agree within `eps`.
//! Infinite solution sets (coincident circles) are an error, not a count.

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::predicates::{orientation, Orientation};
use crate::vec2::{abs, perp, sq, Point};

/// Circle with `center` and radius `r >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, r: f64) -> Self {
        Self { center, r }
    }

    /// Circumcircle of a non-degenerate triangle.
    pub fn through(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Result<Self> {
        let center = circum_center(a, b, c, cfg)?;
        Ok(Self {
            center,
            r: abs(a - center),
        })
    }
}

/// Intersection of a circle with a line or another circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    None,
    Tangent(Point),
    Secant(Point, Point),
}

impl Crossing {
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Crossing::None => 0,
            Crossing::Tangent(_) => 1,
            Crossing::Secant(..) => 2,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match *self {
            Crossing::None => Vec::new(),
            Crossing::Tangent(p) => vec![p],
            Crossing::Secant(p, q) => vec![p, q],
        }
    }
}

/// Tangency points `(on first circle, on second circle)` of one common tangent.
pub type TangentPair = (Point, Point);

/// Common tangents of two circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tangents {
    None,
    One(TangentPair),
    Two(TangentPair, TangentPair),
}

impl Tangents {
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Tangents::None => 0,
            Tangents::One(_) => 1,
            Tangents::Two(..) => 2,
        }
    }

    pub fn pairs(&self) -> Vec<TangentPair> {
        match *self {
            Tangents::None => Vec::new(),
            Tangents::One(t) => vec![t],
            Tangents::Two(t, u) => vec![t, u],
        }
    }
}

/// Center of the circle through `a`, `b`, `c`; collinear input is invalid.
pub fn circum_center(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Result<Point> {
    if orientation(a, b, c, cfg) == Orientation::Collinear {
        return Err(GeomError::invalid("circumcenter of collinear points"));
    }
    let b = b - a;
    let c = c - a;
    Ok(a + perp(b * sq(c) - c * sq(b)) / b.perp(&c) / 2.0)
}

/// Center of a circle of radius `r` through `p1` and `p2`.
///
/// Of the two candidates this returns the one to the left of `p1 → p2`;
/// swap the points for the other. `None` when `r` is below half the
/// distance between the points.
pub fn circle_2pts_rad(p1: Point, p2: Point, r: f64, cfg: GeomCfg) -> Result<Option<Point>> {
    if cfg.points_eq(p1, p2) {
        return Err(GeomError::invalid("circle through coincident points"));
    }
    let d2 = sq(p1 - p2);
    let det = r * r / d2 - 0.25;
    if cfg.sign(det) < 0 {
        return Ok(None);
    }
    let h = det.max(0.0).sqrt();
    Ok(Some(Point::new(
        (p1.x + p2.x) * 0.5 + (p1.y - p2.y) * h,
        (p1.y + p2.y) * 0.5 + (p2.x - p1.x) * h,
    )))
}

/// Intersection of a circle with a line.
///
/// Secant points are ordered along the line direction.
pub fn circle_line(circle: &Circle, l: &Line, cfg: GeomCfg) -> Crossing {
    let dist = l.dist(circle.center);
    let h2 = circle.r * circle.r - dist * dist;
    let p = l.proj(circle.center);
    match cfg.sign_scaled(h2, circle.r + dist) {
        -1 => Crossing::None,
        0 => Crossing::Tangent(p),
        _ => {
            let v = l.direction();
            let h = v * h2.sqrt() / abs(v);
            Crossing::Secant(p - h, p + h)
        }
    }
}

/// Intersection of two circles.
///
/// Concentric circles with different radii do not meet; concentric circles
/// with equal radii coincide and are reported as `CoincidentCircles`.
pub fn circle_circle(c1: &Circle, c2: &Circle, cfg: GeomCfg) -> Result<Crossing> {
    if cfg.points_eq(c1.center, c2.center) {
        if cfg.approx_eq(c1.r, c2.r) {
            tracing::debug!(center = ?c1.center, r = c1.r, "coincident circles");
            return Err(GeomError::CoincidentCircles);
        }
        return Ok(Crossing::None);
    }
    let d = c2.center - c1.center;
    let d2 = sq(d);
    let pd = (d2 + c1.r * c1.r - c2.r * c2.r) / 2.0;
    let h2 = c1.r * c1.r - pd * pd / d2;
    let p = c1.center + d * pd / d2;
    Ok(match cfg.sign_scaled(h2, c1.r + pd.abs() / d2.sqrt()) {
        -1 => Crossing::None,
        0 => Crossing::Tangent(p),
        _ => {
            let h = perp(d) * (h2 / d2).sqrt();
            Crossing::Secant(p - h, p + h)
        }
    })
}

/// Common tangents of two circles, external or (with `inner`) internal.
///
/// Each tangent is reported by its two tangency points. Internal tangents
/// of overlapping circles, or any tangent of nested circles, do not exist.
pub fn tangents(c1: &Circle, c2: &Circle, inner: bool, cfg: GeomCfg) -> Result<Tangents> {
    let r1 = c1.r;
    let r2 = if inner { -c2.r } else { c2.r };
    let d = c2.center - c1.center;
    let dr = r1 - r2;
    let d2 = sq(d);
    let h2 = d2 - dr * dr;
    let concentric = cfg.points_eq(c1.center, c2.center);
    if concentric && cfg.is_zero(dr) {
        tracing::debug!(center = ?c1.center, r = r1, inner, "tangents of coincident circles");
        return Err(GeomError::CoincidentCircles);
    }
    let h_sign = cfg.sign_scaled(h2, d2.sqrt() + dr.abs());
    if concentric || h_sign < 0 {
        return Ok(Tangents::None);
    }
    let root = h2.max(0.0).sqrt();
    let pair = |sign: f64| -> TangentPair {
        let v = (d * dr + perp(d) * root * sign) / d2;
        (c1.center + v * r1, c2.center + v * r2)
    };
    if h_sign == 0 {
        Ok(Tangents::One(pair(1.0)))
    } else {
        Ok(Tangents::Two(pair(-1.0), pair(1.0)))
    }
}
