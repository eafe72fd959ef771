//! Constrained drag controller.
//!
//! Converts a raw pointer/touch input stream into a clamped element
//! position and notifies the host when a drag gesture completes. The
//! controller is a standalone behavior unit: it reaches the host's geometry
//! through the [`DragSurface`] capability trait and reports gesture
//! completion through a listener handed over at attach time, so any
//! positioned visual element can adopt it without subclassing.

use crate::input::{PointerEvent, PointerEventKind, PointerInputHandler, PointerTarget};
use std::rc::Rc;
use tether_geometry::{Bounds, Point, Rect, Size};

/// Geometry and position-write capabilities the host exposes to a
/// controller. All queries are answered in the host's own coordinate
/// spaces: offset positions relative to the element's positioned ancestor,
/// bounding rects in viewport space.
pub trait DragSurface {
    /// The element's current top/left relative to its positioned ancestor.
    fn offset_position(&self) -> Point;

    /// The element's current size.
    fn element_size(&self) -> Size;

    /// The element's viewport-space bounding box.
    fn bounding_rect(&self) -> Rect;

    /// The positioned ancestor's viewport rect, or the document body's when
    /// the element has no positioned ancestor.
    fn offset_parent(&self) -> Rect;

    /// Looks up an explicit containing region. `None` when the selector
    /// matches nothing in the document.
    fn resolve_region(&self, selector: &str) -> Option<Rect>;

    /// Writes the element's displayed top/left.
    fn set_position(&self, position: Point);

    /// Converts the element to explicit absolute top/left coordinates and
    /// removes any positioning transform, so later `set_position` writes
    /// are consistent.
    fn pin(&self, position: Point);

    /// Whether a `Down` event's target lies inside the drag handle.
    fn matches_handle(&self, target: PointerTarget) -> bool;
}

/// The containing region a dragged element is limited to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitRegion {
    /// The element's nearest positioned ancestor.
    OffsetParent,
    /// An explicit region looked up through [`DragSurface::resolve_region`].
    Selector(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragLocation {
    pub top: f32,
    pub left: f32,
}

/// Fired once per completed gesture with the element's final position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEndEvent {
    pub loc: DragLocation,
}

pub type DragEndListener = Rc<dyn Fn(&DragEndEvent)>;

/// Transient state for one gesture. Created on gesture start, read by
/// movement events of the same gesture, discarded on gesture end. A new
/// gesture allocates a new session.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Element position minus pointer position at gesture start, so
    /// movement preserves the initial grab point instead of snapping the
    /// element's corner to the pointer.
    origin_offset: Point,
    /// Element size captured at gesture start.
    element_size: Size,
}

/// Tracks one draggable element, clamping its top/left within the resolved
/// limits and emitting a drag-end notification when the gesture ends.
pub struct DragController {
    surface: Rc<dyn DragSurface>,
    limits: Option<Bounds>,
    session: Option<DragSession>,
    on_drag_end: DragEndListener,
}

impl DragController {
    /// Registers a controller against a surface.
    ///
    /// Resolves `region` into limits in the positioned ancestor's
    /// coordinate space and pins the element to explicit absolute top/left
    /// coordinates. When an explicit selector cannot be resolved the
    /// controller attaches inert: no limits, no pinning, and every gesture
    /// is a no-op.
    pub fn attach(
        surface: Rc<dyn DragSurface>,
        region: LimitRegion,
        on_drag_end: DragEndListener,
    ) -> Self {
        let parent = surface.offset_parent();
        let limits = match &region {
            LimitRegion::OffsetParent => Some(Bounds::from_region(parent, Point::ZERO)),
            LimitRegion::Selector(selector) => match surface.resolve_region(selector) {
                Some(region_rect) => {
                    // A selector that resolves to the offset parent itself
                    // needs no shift into the ancestor's space.
                    let shift = if region_rect == parent {
                        Point::ZERO
                    } else {
                        parent.origin()
                    };
                    Some(Bounds::from_region(region_rect, shift))
                }
                None => {
                    log::warn!("drag limit region {selector:?} not found; dragging disabled");
                    None
                }
            },
        };
        if limits.is_some() {
            let rect = surface.bounding_rect();
            surface.pin(rect.origin());
        }
        Self {
            surface,
            limits,
            session: None,
            on_drag_end,
        }
    }

    /// Begins a gesture when the event targets the drag handle.
    ///
    /// Consumes the event so ancestor handlers do not also start dragging
    /// from the same gesture. Mouse and first-touch input share this code
    /// path once the coordinate is extracted.
    pub fn on_gesture_start(&mut self, event: &PointerEvent) {
        if event.is_consumed() {
            return;
        }
        if !event
            .target()
            .is_some_and(|target| self.surface.matches_handle(target))
        {
            return;
        }
        if self.limits.is_none() {
            return;
        }
        let Some(pointer) = event.primary_position() else {
            return;
        };
        self.session = Some(DragSession {
            origin_offset: self.surface.offset_position() - pointer,
            element_size: self.surface.element_size(),
        });
        event.consume();
        log::trace!("drag gesture started at ({}, {})", pointer.x, pointer.y);
    }

    /// Moves the element to the clamped candidate position. No-op without
    /// an active session.
    pub fn on_gesture_move(&mut self, event: &PointerEvent) {
        let (Some(session), Some(limits)) = (self.session, self.limits) else {
            return;
        };
        let Some(pointer) = event.primary_position() else {
            return;
        };
        let candidate = pointer + session.origin_offset;
        self.surface
            .set_position(limits.clamp_origin(candidate, session.element_size));
    }

    /// Ends the gesture and fires the drag-end listener with the element's
    /// final position. No-op without an active session, so a stray `Up`
    /// with no preceding handle `Down` does nothing. Exactly one drag-end
    /// fires per started gesture, even when the gesture never moved.
    pub fn on_gesture_end(&mut self, _event: &PointerEvent) {
        if self.session.take().is_none() {
            return;
        }
        // Read the position back from the surface rather than replaying the
        // last candidate, so hosts that quantize writes observe their own
        // rounding.
        let position = self.surface.offset_position();
        let end = DragEndEvent {
            loc: DragLocation {
                top: position.y,
                left: position.x,
            },
        };
        log::trace!("drag gesture ended at ({}, {})", position.x, position.y);
        (self.on_drag_end)(&end);
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The resolved limits, `None` when the controller attached inert.
    pub fn limits(&self) -> Option<Bounds> {
        self.limits
    }
}

impl PointerInputHandler for DragController {
    fn accepts_down(&self, event: &PointerEvent) -> bool {
        event
            .target()
            .is_some_and(|target| self.surface.matches_handle(target))
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_gesture_start(event),
            PointerEventKind::Move => self.on_gesture_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_gesture_end(event),
        }
    }
}
