use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use tether_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerDevice {
    Mouse,
    Touch,
}

/// Opaque reference to a host element, used to match a `Down` event against
/// a controller's drag handle. The host assigns the identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerTarget(pub u64);

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// Events can be consumed by handlers (e.g., a drag controller claiming a
/// `Down` on its handle) to prevent ancestor handlers from also reacting to
/// them. The flag is shared via `Rc<Cell>` so consumption is visible across
/// clones of the same event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub device: PointerDevice,
    /// Milliseconds since the router's epoch, stamped on `push`.
    pub uptime: u64,
    position: Option<Point>,
    touches: SmallVec<[Point; 2]>,
    target: Option<PointerTarget>,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// A mouse event; `position` is the cursor location.
    pub fn mouse(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            device: PointerDevice::Mouse,
            uptime: 0,
            position: Some(position),
            touches: SmallVec::new(),
            target: None,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// A touch event carrying the currently active touch points. `Up` and
    /// `Cancel` events typically carry none.
    pub fn touch(kind: PointerEventKind, touches: impl IntoIterator<Item = Point>) -> Self {
        Self {
            kind,
            device: PointerDevice::Touch,
            uptime: 0,
            position: None,
            touches: touches.into_iter().collect(),
            target: None,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Sets the element the event landed on. Only meaningful for `Down`.
    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn target(&self) -> Option<PointerTarget> {
        self.target
    }

    /// The coordinate a gesture tracks: the first active touch point when
    /// one exists, otherwise the mouse cursor. Additional touch points are
    /// ignored for the duration of a gesture.
    pub fn primary_position(&self) -> Option<Point> {
        self.touches.first().copied().or(self.position)
    }

    /// Mark this event as consumed, preventing ancestor handlers from
    /// processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
