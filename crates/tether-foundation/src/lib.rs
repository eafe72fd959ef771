//! Foundation elements for Tether: pointer input and the drag controller.
//!
//! The crate is split along the same seam as the host application: the
//! [`input`] module models raw pointer/touch events and their document-level
//! routing, while [`drag`] holds the constrained drag controller that turns
//! those events into clamped element positions.

pub mod drag;
pub mod input;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use drag::{
    DragController, DragEndEvent, DragEndListener, DragLocation, DragSurface, LimitRegion,
};
pub use input::{
    InputRouter, PointerDevice, PointerEvent, PointerEventKind, PointerInputHandler,
    PointerTarget, RegistrationId,
};

pub mod prelude {
    pub use crate::drag::{
        DragController, DragEndEvent, DragEndListener, DragLocation, DragSurface, LimitRegion,
    };
    pub use crate::input::{
        InputRouter, PointerDevice, PointerEvent, PointerEventKind, PointerInputHandler,
        PointerTarget, RegistrationId,
    };
    pub use tether_geometry::{Bounds, Point, Rect, Size};
}
