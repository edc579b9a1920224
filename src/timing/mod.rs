//! Clocks, interrupts, and the countdown that turns frames into a decision.
mod clock;
mod decider;
mod interrupt;

pub use clock::*;
pub use decider::*;
pub use interrupt::*;
