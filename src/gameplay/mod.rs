//! Rules of the game: throws, round resolution and match bookkeeping.
mod choice;
mod gesture;
mod outcome;
mod tally;
mod verdict;

pub use choice::*;
pub use gesture::*;
pub use outcome::*;
pub use tally::*;
pub use verdict::*;
