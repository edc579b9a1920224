//! The other participants in a match: the CPU opponent, and whoever
//! answers the continuation prompt.
//!
//! - [`Cpu`]: uniform random thrower over a seedable rng
//! - [`Prompt`]: continuation query ([`Always`], [`Replies`],
//!   and `Terminal` with the `cli` feature)
mod cpu;
mod prompt;
#[cfg(feature = "cli")]
mod terminal;

pub use cpu::*;
pub use prompt::*;
#[cfg(feature = "cli")]
pub use terminal::*;
