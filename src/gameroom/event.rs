use crate::Wins;
use crate::gameplay::*;

/// One resolved round, as reported to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub player: Choice,
    pub cpu: Choice,
    pub outcome: Outcome,
    /// Score after this round.
    pub tally: Tally,
}

/// Events broadcast by the match as it progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start { threshold: Wins },
    Round(Round),
    Over(Verdict),
}

/// Anything that wants to follow a match: terminal output, logs, tests.
pub trait Observer {
    fn notify(&mut self, event: &Event);
}

/// Records every event, in order.
impl Observer for Vec<Event> {
    fn notify(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Prints the match to stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Observer for Console {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Start { threshold } => {
                println!("Welcome to Rock Paper Scissors! First to {} wins.", threshold)
            }
            Event::Round(round) => {
                println!();
                println!("Round {}. Time's up! You chose {}.", round.number, round.player);
                println!("CPU chose {}.", round.cpu);
                println!("{}", round.outcome);
                println!("{}", round.tally);
            }
            Event::Over(verdict) => {
                println!();
                println!("{}", verdict);
            }
        }
    }
}
