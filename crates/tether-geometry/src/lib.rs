//! Pure math/data for drag geometry in Tether
//!
//! This crate contains the geometry primitives shared by the drag
//! controller and its host integrations: points, sizes, rectangles, and
//! the bounds type that constrains where a dragged element may land.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Bounds, Point, Rect, Size};
}
