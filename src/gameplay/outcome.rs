use colored::Colorize;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Player,
    Cpu,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Cpu => write!(f, "CPU"),
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    PlayerWin,
    CpuWin,
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Draw => None,
            Self::PlayerWin => Some(Side::Player),
            Self::CpuWin => Some(Side::Cpu),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "{}", "It's a draw!".white()),
            Self::PlayerWin => write!(f, "{}", "You win!".green()),
            Self::CpuWin => write!(f, "{}", "You lost.".red()),
        }
    }
}
