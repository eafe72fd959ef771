use std::cell::RefCell;
use std::rc::Rc;
use tether_foundation::input::{
    InputRouter, PointerEvent, PointerEventKind, PointerInputHandler, PointerTarget,
    RegistrationId,
};
use tether_geometry::Point;

/// Headless harness that drives synthetic pointer gestures through a real
/// [`InputRouter`].
///
/// The robot exposes mouse interactions (press, drag, release) and their
/// touch equivalents. Every call enqueues one event and dispatches the
/// queue, matching how a host delivers input on its event loop: one event
/// per callback, in order.
pub struct GestureRobot {
    router: InputRouter,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self {
            router: InputRouter::new(),
        }
    }

    /// Subscribes a handler to the robot's event stream.
    pub fn register(&mut self, handler: Rc<RefCell<dyn PointerInputHandler>>) -> RegistrationId {
        self.router.register(handler)
    }

    /// Releases a subscription.
    pub fn unregister(&mut self, id: RegistrationId) -> bool {
        self.router.unregister(id)
    }

    /// Presses the mouse at the provided coordinates on `target`. Returns
    /// whether a handler consumed the event.
    pub fn press(&mut self, x: f32, y: f32, target: PointerTarget) -> bool {
        let event =
            PointerEvent::mouse(PointerEventKind::Down, Point::new(x, y)).with_target(target);
        self.deliver(event)
    }

    /// Moves the mouse to the provided coordinates.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        self.deliver(PointerEvent::mouse(PointerEventKind::Move, Point::new(x, y)))
    }

    /// Releases the mouse at the provided coordinates.
    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.deliver(PointerEvent::mouse(PointerEventKind::Up, Point::new(x, y)))
    }

    /// Starts a touch gesture on `target` with the provided active touch
    /// points.
    pub fn touch_press(&mut self, touches: &[(f32, f32)], target: PointerTarget) -> bool {
        let event = PointerEvent::touch(PointerEventKind::Down, to_points(touches))
            .with_target(target);
        self.deliver(event)
    }

    /// Moves the active touch points.
    pub fn touch_drag_to(&mut self, touches: &[(f32, f32)]) -> bool {
        self.deliver(PointerEvent::touch(PointerEventKind::Move, to_points(touches)))
    }

    /// Lifts all touch points.
    pub fn touch_release(&mut self) -> bool {
        self.deliver(PointerEvent::touch(PointerEventKind::Up, []))
    }

    /// Cancels the in-flight gesture, as a host does when it loses the
    /// pointer stream.
    pub fn cancel(&mut self) -> bool {
        self.deliver(PointerEvent::touch(PointerEventKind::Cancel, []))
    }

    fn deliver(&mut self, event: PointerEvent) -> bool {
        let probe = event.clone();
        self.router.push(event);
        self.router.dispatch();
        probe.is_consumed()
    }
}

fn to_points(touches: &[(f32, f32)]) -> Vec<Point> {
    touches.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
