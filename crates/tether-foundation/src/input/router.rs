//! Pointer input routing.
//!
//! The host enqueues raw pointer events with [`InputRouter::push`] and
//! delivers them with [`InputRouter::dispatch`], all on its own event loop.
//! Routing mirrors how the host registers DOM listeners: `Move`, `Up`, and
//! `Cancel` go to every registered handler (document-level listeners, so a
//! drag survives the pointer leaving the element), while `Down` is delivered
//! only to handlers whose start region the event targets (handle-level
//! listeners).

use super::types::{PointerEvent, PointerEventKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_time::Instant;

pub type RegistrationId = u64;

/// A recipient of routed pointer events.
pub trait PointerInputHandler {
    /// Whether a `Down` event targets this handler's start region. Other
    /// event kinds are delivered unconditionally.
    fn accepts_down(&self, event: &PointerEvent) -> bool;

    fn on_pointer_event(&mut self, event: &PointerEvent);
}

pub struct InputRouter {
    handlers: Vec<(RegistrationId, Rc<RefCell<dyn PointerInputHandler>>)>,
    next_id: RegistrationId,
    queue: Vec<PointerEvent>,
    epoch: Instant,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
            queue: Vec::new(),
            epoch: Instant::now(),
        }
    }

    /// Subscribes a handler to the event stream. The returned id scopes the
    /// subscription: the owner must call [`unregister`](Self::unregister)
    /// when its element is destroyed.
    pub fn register(&mut self, handler: Rc<RefCell<dyn PointerInputHandler>>) -> RegistrationId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Releases a subscription. Returns false when the id is unknown.
    pub fn unregister(&mut self, id: RegistrationId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Enqueues an event, stamping its uptime from the router's clock.
    pub fn push(&mut self, mut event: PointerEvent) {
        event.uptime = self.epoch.elapsed().as_millis() as u64;
        self.queue.push(event);
    }

    /// Delivers all queued events in arrival order.
    pub fn dispatch(&mut self) {
        for event in self.queue.drain(..) {
            for (_, handler) in &self.handlers {
                if event.kind == PointerEventKind::Down && !handler.borrow().accepts_down(&event) {
                    continue;
                }
                handler.borrow_mut().on_pointer_event(&event);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
