//! Geometric primitives: Point, Size, Rect, Bounds

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The region, in the coordinate space of a dragged element's positioned
/// ancestor, within which the element's top-left corner may range.
///
/// Invariant: `right >= left` and `bottom >= top`. Both constructors keep
/// that invariant because a region's width and height are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds covering a region rect, shifted into the coordinate space of
    /// an ancestor whose own offset is `ancestor_offset`.
    pub fn from_region(region: Rect, ancestor_offset: Point) -> Self {
        Self {
            left: -ancestor_offset.x,
            top: -ancestor_offset.y,
            right: region.width - ancestor_offset.x,
            bottom: region.height - ancestor_offset.y,
        }
    }

    /// Clamps a candidate top-left position so that an element of `size`
    /// stays fully inside these bounds.
    ///
    /// Each axis clamps independently, lower limit applied last: when the
    /// element is wider or taller than the bounds the element pins to
    /// `left`/`top` rather than oscillating between the two limits.
    pub fn clamp_origin(&self, candidate: Point, size: Size) -> Point {
        Point::new(
            clamp_axis(candidate.x, self.left, self.right - size.width),
            clamp_axis(candidate.y, self.top, self.bottom - size.height),
        )
    }
}

// Upper limit first, lower limit last, so the lower limit wins when the
// limits cross.
fn clamp_axis(value: f32, low: f32, high: f32) -> f32 {
    value.min(high).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let grab = Point::new(10.0, 10.0) - Point::new(30.0, 30.0);
        assert_eq!(grab, Point::new(-20.0, -20.0));
        assert_eq!(Point::new(300.0, 300.0) + grab, Point::new(280.0, 280.0));
    }

    #[test]
    fn clamp_origin_inside_bounds_is_identity() {
        let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let size = Size::new(50.0, 50.0);
        let pos = Point::new(20.0, 30.0);
        assert_eq!(bounds.clamp_origin(pos, size), pos);
    }

    #[test]
    fn clamp_origin_limits_each_axis_independently() {
        let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let size = Size::new(50.0, 50.0);
        assert_eq!(
            bounds.clamp_origin(Point::new(280.0, 10.0), size),
            Point::new(150.0, 10.0)
        );
        assert_eq!(
            bounds.clamp_origin(Point::new(-40.0, 280.0), size),
            Point::new(0.0, 50.0)
        );
    }

    #[test]
    fn clamp_origin_lower_limit_wins_for_oversized_element() {
        let bounds = Bounds::new(10.0, 10.0, 200.0, 100.0);
        let size = Size::new(300.0, 300.0);
        assert_eq!(
            bounds.clamp_origin(Point::new(50.0, 50.0), size),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn from_region_shifts_by_ancestor_offset() {
        let region = Rect {
            x: 40.0,
            y: 60.0,
            width: 400.0,
            height: 300.0,
        };
        let bounds = Bounds::from_region(region, Point::new(25.0, 15.0));
        assert_eq!(bounds, Bounds::new(-25.0, -15.0, 375.0, 285.0));
        assert!(bounds.right >= bounds.left);
        assert!(bounds.bottom >= bounds.top);
    }

    #[test]
    fn from_region_with_zero_offset_spans_region_size() {
        let region = Rect::from_size(Size::new(200.0, 100.0));
        let bounds = Bounds::from_region(region, Point::ZERO);
        assert_eq!(bounds, Bounds::new(0.0, 0.0, 200.0, 100.0));
    }
}
