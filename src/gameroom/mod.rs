//! Running a match: the controller state machine and its event stream.
mod event;
mod room;

pub use event::*;
pub use room::*;
