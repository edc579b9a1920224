use super::*;
use crate::vision::*;
use crate::*;
use std::time::Duration;

/// Turns a stream of frames into one authoritative reading.
///
/// Frames are pulled and classified at most once per `interval` until
/// either `countdown` has elapsed or a reading reaches `confidence`.
/// Only the final reading counts. There is always at least one, unless
/// the interrupt is raised before the first poll.
#[derive(Debug, Clone)]
pub struct Decider<K>
where
    K: Clock,
{
    clock: K,
    interrupt: Interrupt,
    countdown: Duration,
    interval: Duration,
    confidence: Probability,
}

impl<K> Decider<K>
where
    K: Clock,
{
    pub fn new(clock: K, interrupt: Interrupt, settings: &Settings) -> Self {
        Self {
            clock,
            interrupt,
            countdown: settings.countdown,
            interval: settings.interval,
            confidence: settings.confidence,
        }
    }

    pub fn decide<S, C>(&self, source: &mut S, classifier: &mut C) -> Result<Reading, Fault>
    where
        S: FrameSource + ?Sized,
        C: Classifier + ?Sized,
    {
        let start = self.clock.now();
        loop {
            if self.interrupt.raised() {
                return Err(Fault::Interrupted);
            }
            let tick = self.clock.now();
            let frame = source.next_frame()?;
            let reading = classifier.classify(&Tensor::from(&frame))?;
            let elapsed = self.clock.now().saturating_sub(start);
            log::debug!(
                "{} {:.1}s left",
                reading,
                self.countdown.saturating_sub(elapsed).as_secs_f32()
            );
            if reading.confidence() >= self.confidence {
                log::debug!("confident after {:.2}s", elapsed.as_secs_f32());
                return Ok(reading);
            }
            if elapsed >= self.countdown {
                return Ok(reading);
            }
            let spent = self.clock.now().saturating_sub(tick);
            let wait = self
                .interval
                .saturating_sub(spent)
                .min(self.countdown - elapsed);
            self.clock.sleep(wait);
        }
    }
}
