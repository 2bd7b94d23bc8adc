//! Tolerance configuration shared by every predicate.
//!
//! Policy
//! - One `eps` for all sign/zero/equality decisions, so that e.g. `on_segment`
//!   and `proper_inter` never disagree on whether a triple is collinear.
//! - `eps` is a length. Quantities that carry a length factor (cross and dot
//!   products, squared distances) go through `sign_scaled` with that factor,
//!   so a test answers the same at every coordinate scale: a triple is
//!   collinear when its smallest height is within `eps`, two directions are
//!   parallel when the sine of their angle is within `eps`.

use crate::vec2::Point;

/// Default tolerance (the classic `1e-8` used by contest geometry kits).
pub const DEFAULT_EPS: f64 = 1e-8;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl GeomCfg {
    /// Exact comparisons (`eps = 0`).
    #[inline]
    pub fn exact() -> Self {
        Self { eps: 0.0 }
    }

    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps: eps.abs() }
    }

    /// Three-way sign of `x`; values within `eps` of zero map to 0.
    #[inline]
    pub fn sign(&self, x: f64) -> i8 {
        self.sign_scaled(x, 1.0)
    }

    /// Three-way sign of `x`, which carries the length factor `scale`:
    /// zero when `|x| <= eps * scale`.
    #[inline]
    pub fn sign_scaled(&self, x: f64, scale: f64) -> i8 {
        let tol = self.eps * scale;
        if x > tol {
            1
        } else if x < -tol {
            -1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        self.sign(x) == 0
    }

    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }

    /// Coordinate-wise tolerant point equality.
    #[inline]
    pub fn points_eq(&self, p: Point, q: Point) -> bool {
        self.approx_eq(p.x, q.x) && self.approx_eq(p.y, q.y)
    }
}
