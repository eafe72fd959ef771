//! Pointer input model and routing.

pub mod router;
pub mod types;

pub use router::{InputRouter, PointerInputHandler, RegistrationId};
pub use types::{PointerDevice, PointerEvent, PointerEventKind, PointerTarget};

pub mod prelude {
    pub use super::router::{InputRouter, PointerInputHandler, RegistrationId};
    pub use super::types::{PointerDevice, PointerEvent, PointerEventKind, PointerTarget};
}
