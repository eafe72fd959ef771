use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tether_foundation::drag::DragSurface;
use tether_foundation::input::PointerTarget;
use tether_geometry::{Point, Rect, Size};

/// In-memory [`DragSurface`] that records every position write.
///
/// Geometry defaults: the positioned ancestor is an 800x600 region at the
/// viewport origin, the element's viewport bounding box coincides with its
/// offset position, and the drag handle is target id 1.
pub struct RecordingSurface {
    position: Cell<Point>,
    size: Cell<Size>,
    bounding: Cell<Rect>,
    parent: Cell<Rect>,
    regions: RefCell<HashMap<String, Rect>>,
    handle: Cell<PointerTarget>,
    writes: RefCell<Vec<Point>>,
    pins: RefCell<Vec<Point>>,
}

impl RecordingSurface {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position: Cell::new(position),
            size: Cell::new(size),
            bounding: Cell::new(Rect::from_origin_size(position, size)),
            parent: Cell::new(Rect::from_size(Size::new(800.0, 600.0))),
            regions: RefCell::new(HashMap::new()),
            handle: Cell::new(PointerTarget(1)),
            writes: RefCell::new(Vec::new()),
            pins: RefCell::new(Vec::new()),
        }
    }

    /// Overrides the positioned ancestor's viewport rect.
    pub fn with_parent(self, parent: Rect) -> Self {
        self.parent.set(parent);
        self
    }

    /// Overrides the element's viewport bounding box.
    pub fn with_bounding_rect(self, bounding: Rect) -> Self {
        self.bounding.set(bounding);
        self
    }

    /// Registers a resolvable containing region under a selector.
    pub fn with_region(self, selector: &str, rect: Rect) -> Self {
        self.regions.borrow_mut().insert(selector.to_owned(), rect);
        self
    }

    /// The target id that counts as the drag handle.
    pub fn handle_target(&self) -> PointerTarget {
        self.handle.get()
    }

    /// A target id that does not match the handle.
    pub fn body_target(&self) -> PointerTarget {
        PointerTarget(self.handle.get().0 + 1)
    }

    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Every position written through [`DragSurface::set_position`], in
    /// order.
    pub fn writes(&self) -> Vec<Point> {
        self.writes.borrow().clone()
    }

    /// Positions written through [`DragSurface::pin`] at attach time.
    pub fn pins(&self) -> Vec<Point> {
        self.pins.borrow().clone()
    }
}

impl DragSurface for RecordingSurface {
    fn offset_position(&self) -> Point {
        self.position.get()
    }

    fn element_size(&self) -> Size {
        self.size.get()
    }

    fn bounding_rect(&self) -> Rect {
        self.bounding.get()
    }

    fn offset_parent(&self) -> Rect {
        self.parent.get()
    }

    fn resolve_region(&self, selector: &str) -> Option<Rect> {
        self.regions.borrow().get(selector).copied()
    }

    fn set_position(&self, position: Point) {
        self.position.set(position);
        self.writes.borrow_mut().push(position);
    }

    fn pin(&self, position: Point) {
        self.position.set(position);
        self.pins.borrow_mut().push(position);
    }

    fn matches_handle(&self, target: PointerTarget) -> bool {
        target == self.handle.get()
    }
}
