pub mod event;
pub mod response;
pub mod slot;
pub mod validation;

pub use event::{IntentName, InvocationPhase, LexEvent};
pub use response::DialogResponse;
pub use slot::{Slot, SlotKind, SlotValue, Slots};
pub use validation::ValidationResult;
