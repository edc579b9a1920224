use super::*;
use crate::Wins;

/// Running score of a match.
///
/// Counters start at zero and only ever move up by one,
/// through [`resolve`].
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Tally {
    player: Wins,
    cpu: Wins,
}

impl Tally {
    pub fn player(&self) -> Wins {
        self.player
    }
    pub fn cpu(&self) -> Wins {
        self.cpu
    }
    pub fn wins(&self, side: Side) -> Wins {
        match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        }
    }
    /// Decided rounds so far. Draws are not counted.
    pub fn decided(&self) -> usize {
        self.player as usize + self.cpu as usize
    }
    /// The side that has reached `threshold`, if any.
    pub fn leader(&self, threshold: Wins) -> Option<Side> {
        if self.player >= threshold {
            Some(Side::Player)
        } else if self.cpu >= threshold {
            Some(Side::Cpu)
        } else {
            None
        }
    }
    fn credit(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Cpu => self.cpu = self.cpu.saturating_add(1),
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wins: {}, Losses: {}", self.player, self.cpu)
    }
}

/// Resolves one round and credits the winner, if any.
///
/// Equal throws draw and leave the tally alone. Otherwise exactly one
/// counter moves.
pub fn resolve(player: Choice, cpu: Choice, tally: &mut Tally) -> Outcome {
    let outcome = if player == cpu {
        Outcome::Draw
    } else if player.beats(&cpu) {
        Outcome::PlayerWin
    } else {
        Outcome::CpuWin
    };
    if let Some(side) = outcome.winner() {
        tally.credit(side);
    }
    outcome
}
