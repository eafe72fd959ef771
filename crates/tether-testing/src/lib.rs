//! Testing utilities and gesture harness for Tether
//!
//! Provides a headless [`GestureRobot`] that feeds synthetic mouse and
//! touch gestures through a real [`InputRouter`], plus a
//! [`RecordingSurface`] implementing [`DragSurface`] over in-memory
//! geometry so tests can assert on every position write a controller makes.

mod robot;
mod surface;

pub use robot::GestureRobot;
pub use surface::RecordingSurface;

use std::cell::RefCell;
use std::rc::Rc;
use tether_foundation::drag::{DragEndEvent, DragEndListener};

/// A drag-end listener that records every event it receives, for asserting
/// on notification counts and payloads.
pub fn recording_listener() -> (DragEndListener, Rc<RefCell<Vec<DragEndEvent>>>) {
    let events: Rc<RefCell<Vec<DragEndEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let listener: DragEndListener = Rc::new(move |event: &DragEndEvent| {
        sink.borrow_mut().push(*event);
    });
    (listener, events)
}
