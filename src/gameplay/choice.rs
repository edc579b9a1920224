use crate::Fault;
use colored::Colorize;

/// A throw in Rock-Paper-Scissors.
///
/// Discriminants are the classifier's class indices, so the cyclic
/// dominance relation reduces to arithmetic mod 3.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    /// Rock: beats Scissors, loses to Paper.
    Rock = 0,
    /// Paper: beats Rock, loses to Scissors.
    Paper = 1,
    /// Scissors: beats Paper, loses to Rock.
    Scissors = 2,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    pub fn index(&self) -> u8 {
        *self as u8
    }
    /// `self` beats `other` iff `(self - other) mod 3 == 1`.
    pub fn beats(&self, other: &Self) -> bool {
        (3 + self.index() - other.index()) % 3 == 1
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = Fault;
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Rock),
            1 => Ok(Self::Paper),
            2 => Ok(Self::Scissors),
            _ => Err(Fault::InvalidChoice),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "{}", self.label().yellow()),
            Self::Paper => write!(f, "{}", self.label().cyan()),
            Self::Scissors => write!(f, "{}", self.label().magenta()),
        }
    }
}
