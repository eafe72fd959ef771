use crate::input::{
    InputRouter, PointerEvent, PointerEventKind, PointerInputHandler, PointerTarget,
};
use std::cell::RefCell;
use std::rc::Rc;
use tether_geometry::Point;

// Handler that records what it receives and accepts Down only on one target.
struct RecordingHandler {
    handle: PointerTarget,
    received: Vec<(PointerEventKind, u64)>,
}

impl RecordingHandler {
    fn new(handle: PointerTarget) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            handle,
            received: Vec::new(),
        }))
    }
}

impl PointerInputHandler for RecordingHandler {
    fn accepts_down(&self, event: &PointerEvent) -> bool {
        event.target() == Some(self.handle)
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) {
        self.received.push((event.kind, event.uptime));
    }
}

fn down(target: PointerTarget) -> PointerEvent {
    PointerEvent::mouse(PointerEventKind::Down, Point::ZERO).with_target(target)
}

#[test]
fn down_is_delivered_only_to_matching_handlers() {
    let mut router = InputRouter::new();
    let ours = RecordingHandler::new(PointerTarget(7));
    let theirs = RecordingHandler::new(PointerTarget(8));
    router.register(ours.clone());
    router.register(theirs.clone());

    router.push(down(PointerTarget(7)));
    router.dispatch();

    assert_eq!(ours.borrow().received.len(), 1);
    assert!(theirs.borrow().received.is_empty());
}

#[test]
fn move_and_up_are_delivered_to_every_handler() {
    let mut router = InputRouter::new();
    let ours = RecordingHandler::new(PointerTarget(7));
    let theirs = RecordingHandler::new(PointerTarget(8));
    router.register(ours.clone());
    router.register(theirs.clone());

    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.push(PointerEvent::mouse(PointerEventKind::Up, Point::ZERO));
    router.dispatch();

    for handler in [&ours, &theirs] {
        let kinds: Vec<_> = handler
            .borrow()
            .received
            .iter()
            .map(|(kind, _)| *kind)
            .collect();
        assert_eq!(kinds, vec![PointerEventKind::Move, PointerEventKind::Up]);
    }
}

#[test]
fn events_are_delivered_in_push_order() {
    let mut router = InputRouter::new();
    let handler = RecordingHandler::new(PointerTarget(7));
    router.register(handler.clone());

    router.push(down(PointerTarget(7)));
    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.push(PointerEvent::mouse(PointerEventKind::Up, Point::ZERO));
    router.dispatch();

    let kinds: Vec<_> = handler
        .borrow()
        .received
        .iter()
        .map(|(kind, _)| *kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            PointerEventKind::Down,
            PointerEventKind::Move,
            PointerEventKind::Move,
            PointerEventKind::Up,
        ]
    );
}

#[test]
fn uptime_is_stamped_and_nondecreasing() {
    let mut router = InputRouter::new();
    let handler = RecordingHandler::new(PointerTarget(7));
    router.register(handler.clone());

    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.dispatch();

    let received = &handler.borrow().received;
    assert_eq!(received.len(), 2);
    assert!(received[1].1 >= received[0].1);
}

#[test]
fn unregister_releases_the_subscription() {
    let mut router = InputRouter::new();
    let handler = RecordingHandler::new(PointerTarget(7));
    let id = router.register(handler.clone());
    assert_eq!(router.handler_count(), 1);

    assert!(router.unregister(id));
    assert_eq!(router.handler_count(), 0);
    assert!(!router.unregister(id));

    router.push(PointerEvent::mouse(PointerEventKind::Move, Point::ZERO));
    router.dispatch();
    assert!(handler.borrow().received.is_empty());
}
