//! 2D computational-geometry primitives.
//!
//! Layers (leaf first):
//! - `vec2`: point/vector algebra on `nalgebra::Vector2<f64>`.
//! - `predicates`: the orientation predicate and everything built directly on it.
//! - `line`, `segment`: line representation, intersections, distances.
//! - `circle`: circle–line, circle–circle, common tangents.
//! - `polygon`: convexity, area, centroid, containment.
//! - `hull`: Andrew's monotone chain.
//!
//! Numerics
//! - Every sign, zero and equality test goes through one `GeomCfg` tolerance;
//!   nothing here compares computed doubles with `==`. Use `GeomCfg::exact()`
//!   to get exact arithmetic tests.
//! - Degenerate input where a unique construction is required returns a
//!   `GeomError`; "no solution" is an `Option`/enum result instead.

pub mod cfg;
pub mod circle;
pub mod error;
pub mod hull;
pub mod line;
pub mod polygon;
pub mod predicates;
pub mod segment;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};
pub use nalgebra::Vector2 as Vec2;
pub use vec2::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::circle::{
        circle_2pts_rad, circle_circle, circle_line, circum_center, tangents, Circle, Crossing,
        Tangents,
    };
    pub use crate::error::GeomError;
    pub use crate::hull::{convex_hull, convex_hull_with, HullMode};
    pub use crate::line::{are_parallel, are_same, int_bisector, inter, Line};
    pub use crate::polygon::{
        area_polygon, area_triangle, centroid_polygon, is_convex, locate_point, point_in_polygon,
        signed_area_polygon, PointLocation,
    };
    pub use crate::predicates::{in_angle, in_disk, on_segment, orient, orientation, Orientation};
    pub use crate::segment::{inters, proper_inter, seg_point, seg_seg};
    pub use crate::vec2::{cross, dot, perp, rot, sq, Point};
}
