//! Point/vector algebra in R².
//!
//! `Point` is `nalgebra::Vector2<f64>` and plays both roles (position and
//! displacement). Addition, subtraction, scalar `*`/`/`, `dot` and `norm`
//! come from nalgebra; this module adds the 2D-specific pieces.
//!
//! Division by a zero scalar follows IEEE-754 (inf/NaN), no checks here.

use std::cmp::Ordering;

use nalgebra::{Rotation2, Vector2};

use crate::cfg::GeomCfg;

pub type Point = Vector2<f64>;

/// Squared norm.
#[inline]
pub fn sq(p: Point) -> f64 {
    p.norm_squared()
}

/// Euclidean norm.
#[inline]
pub fn abs(p: Point) -> f64 {
    p.norm()
}

#[inline]
pub fn dot(v: Point, w: Point) -> f64 {
    v.dot(&w)
}

/// Signed area of the parallelogram spanned by `v` and `w`.
/// Positive for v→w counterclockwise.
#[inline]
pub fn cross(v: Point, w: Point) -> f64 {
    v.perp(&w)
}

/// Rotation by 90° counterclockwise.
#[inline]
pub fn perp(p: Point) -> Point {
    Vector2::new(-p.y, p.x)
}

/// Rotation about the origin by `angle` radians (CCW).
#[inline]
pub fn rot(p: Point, angle: f64) -> Point {
    Rotation2::new(angle) * p
}

#[inline]
pub fn translate(v: Point, p: Point) -> Point {
    p + v
}

/// Homothety with center `c` and ratio `factor`.
#[inline]
pub fn scale_about(c: Point, factor: f64, p: Point) -> Point {
    c + (p - c) * factor
}

/// Perpendicular up to an angle whose cosine is within `eps`.
#[inline]
pub fn is_perp(v: Point, w: Point, cfg: GeomCfg) -> bool {
    cfg.sign_scaled(dot(v, w), abs(v) * abs(w)) == 0
}

/// Unsigned angle between `v` and `w`, in [0, π].
///
/// The cosine is clamped to [-1, 1] against rounding. Zero vectors give NaN.
pub fn small_angle(v: Point, w: Point) -> f64 {
    let cos_theta = (dot(v, w) / abs(v) / abs(w)).clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// Lexicographic order (x, then y); the base order of the monotone chain.
/// Total on all doubles (`f64::total_cmp`), NaN sorts last.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
