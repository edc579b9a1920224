use crate::Fault;
use crate::gameplay::*;
use std::collections::VecDeque;

/// Player's answer to "another round?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// Asked between rounds while nobody has reached the win threshold.
pub trait Prompt {
    fn ask(&mut self, tally: &Tally) -> Result<Signal, Fault>;
}

impl<P> Prompt for Box<P>
where
    P: Prompt + ?Sized,
{
    fn ask(&mut self, tally: &Tally) -> Result<Signal, Fault> {
        (**self).ask(tally)
    }
}

impl<P> Prompt for &mut P
where
    P: Prompt + ?Sized,
{
    fn ask(&mut self, tally: &Tally) -> Result<Signal, Fault> {
        (**self).ask(tally)
    }
}

/// Keeps answering [`Signal::Continue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Prompt for Always {
    fn ask(&mut self, _: &Tally) -> Result<Signal, Fault> {
        Ok(Signal::Continue)
    }
}

/// Replays canned answers, then stops.
#[derive(Debug, Clone, Default)]
pub struct Replies {
    replies: VecDeque<Signal>,
    asked: usize,
}

impl Replies {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Signal>,
    {
        Self {
            replies: replies.into_iter().collect(),
            asked: 0,
        }
    }
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Prompt for Replies {
    fn ask(&mut self, _: &Tally) -> Result<Signal, Fault> {
        self.asked += 1;
        Ok(self.replies.pop_front().unwrap_or(Signal::Stop))
    }
}
