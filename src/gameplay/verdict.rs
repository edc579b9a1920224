use super::*;
use crate::Fault;
use colored::Colorize;

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A side reached the win threshold.
    Won(Side, Tally),
    /// The player declined to continue. No winner.
    Stopped(Tally),
    /// Invalid gesture, equipment failure or interrupt. No winner.
    Aborted(Fault, Tally),
}

impl Verdict {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Won(side, _) => Some(*side),
            _ => None,
        }
    }
    pub fn tally(&self) -> &Tally {
        match self {
            Self::Won(_, tally) | Self::Stopped(tally) | Self::Aborted(_, tally) => tally,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Won(Side::Player, t) => write!(f, "{} ({})", "Player wins!".green().bold(), t),
            Self::Won(Side::Cpu, t) => write!(f, "{} ({})", "CPU wins!".red().bold(), t),
            Self::Stopped(t) => write!(f, "{} ({})", "Match stopped".white(), t),
            Self::Aborted(fault, t) => {
                write!(f, "{} ({})", format!("Match aborted: {}", fault).yellow(), t)
            }
        }
    }
}
