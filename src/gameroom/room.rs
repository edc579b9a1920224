use super::*;
use crate::gameplay::*;
use crate::players::*;
use crate::timing::*;
use crate::vision::*;
use crate::*;
use rand::Rng;

/// Where a match stands between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingChoices,
    RoundResolved(Round),
    AwaitingContinue,
    /// Terminal.
    MatchOver(Verdict),
}

/// Central coordinator for one match.
///
/// Owns the camera, the model, the prompt and the CPU for the whole match
/// and drops them when [`Match::play`] returns, whatever the ending.
///
/// Each round:
/// - the CPU throws
/// - the decider reads the player's gesture off the camera
/// - a [`Gesture::Nothing`] reading or any equipment fault aborts the match
/// - otherwise the round is resolved and reported
/// - reaching the threshold ends the match, else the prompt is asked
pub struct Match<S, C, P, R, K>
where
    S: FrameSource,
    C: Classifier,
    P: Prompt,
    R: Rng,
    K: Clock,
{
    source: S,
    classifier: C,
    prompt: P,
    cpu: Cpu<R>,
    decider: Decider<K>,
    threshold: Wins,
    interrupt: Interrupt,
    tally: Tally,
    rounds: usize,
}

impl<S, C, P, R, K> Match<S, C, P, R, K>
where
    S: FrameSource,
    C: Classifier,
    P: Prompt,
    R: Rng,
    K: Clock,
{
    pub fn new(
        source: S,
        classifier: C,
        prompt: P,
        cpu: Cpu<R>,
        clock: K,
        interrupt: Interrupt,
        settings: &Settings,
    ) -> Self {
        Self {
            source,
            classifier,
            prompt,
            cpu,
            decider: Decider::new(clock, interrupt.clone(), settings),
            threshold: settings.threshold,
            interrupt,
            tally: Tally::default(),
            rounds: 0,
        }
    }

    /// Run the match to completion.
    pub fn play<O>(mut self, observer: &mut O) -> Verdict
    where
        O: Observer + ?Sized,
    {
        log::info!("match start, first to {}", self.threshold);
        observer.notify(&Event::Start {
            threshold: self.threshold,
        });
        let mut phase = Phase::AwaitingChoices;
        loop {
            phase = self.step(phase);
            match phase {
                Phase::RoundResolved(ref round) => observer.notify(&Event::Round(round.clone())),
                Phase::MatchOver(verdict) => {
                    log::info!("match over after {} rounds: {:?}", self.rounds, verdict);
                    observer.notify(&Event::Over(verdict.clone()));
                    return verdict;
                }
                _ => {}
            }
        }
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, phase: Phase) -> Phase {
        match phase {
            Phase::AwaitingChoices => self.next_round(),
            Phase::RoundResolved(_) => match self.tally.leader(self.threshold) {
                Some(side) => Phase::MatchOver(Verdict::Won(side, self.tally)),
                None => Phase::AwaitingContinue,
            },
            Phase::AwaitingContinue => match self.prompt.ask(&self.tally) {
                Ok(Signal::Continue) => Phase::AwaitingChoices,
                Ok(Signal::Stop) => Phase::MatchOver(Verdict::Stopped(self.tally)),
                Err(fault) => self.abort(fault),
            },
            Phase::MatchOver(verdict) => Phase::MatchOver(verdict),
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl<S, C, P, R, K> Match<S, C, P, R, K>
where
    S: FrameSource,
    C: Classifier,
    P: Prompt,
    R: Rng,
    K: Clock,
{
    fn next_round(&mut self) -> Phase {
        if self.interrupt.raised() {
            return self.abort(Fault::Interrupted);
        }
        self.rounds += 1;
        let cpu = self.cpu.throw();
        let player = match self.gesture().and_then(|g| Choice::try_from(g)) {
            Ok(player) => player,
            Err(fault) => return self.abort(fault),
        };
        let outcome = resolve(player, cpu, &mut self.tally);
        log::debug!("round {}: {:?} vs {:?} -> {:?}", self.rounds, player, cpu, outcome);
        Phase::RoundResolved(Round {
            number: self.rounds,
            player,
            cpu,
            outcome,
            tally: self.tally,
        })
    }

    fn gesture(&mut self) -> Result<Gesture, Fault> {
        self.decider
            .decide(&mut self.source, &mut self.classifier)
            .map(|reading| reading.gesture())
    }

    fn abort(&self, fault: Fault) -> Phase {
        match fault.is_deliberate() {
            true => log::info!("round {} aborted: {}", self.rounds, fault),
            false => log::error!("round {} aborted: {}", self.rounds, fault),
        }
        Phase::MatchOver(Verdict::Aborted(fault, self.tally))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    const SEED: u64 = 0xC0FFEE;

    /// CPU throws the seeded opponent will make, in order.
    fn foresee(n: usize) -> Vec<Choice> {
        let ref mut twin = Cpu::seeded(SEED);
        (0..n).map(|_| twin.throw()).collect()
    }
    fn beating(cpu: Choice) -> Choice {
        Choice::all()
            .into_iter()
            .find(|c| c.beats(&cpu))
            .expect("every throw is beaten by something")
    }
    fn losing(cpu: Choice) -> Choice {
        Choice::all()
            .into_iter()
            .find(|c| cpu.beats(c))
            .expect("every throw beats something")
    }
    fn certain(choice: Choice) -> Reading {
        Reading::certain(Gesture::Throw(choice))
    }
    fn arena<P>(
        classifier: Scripted,
        prompt: P,
    ) -> Match<Still, Scripted, P, SmallRng, ManualClock>
    where
        P: Prompt,
    {
        Match::new(
            Still,
            classifier,
            prompt,
            Cpu::seeded(SEED),
            ManualClock::default(),
            Interrupt::default(),
            &Settings::default(),
        )
    }
    fn rounds(events: &[Event]) -> Vec<&Round> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Round(round) => Some(round),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn player_takes_match_at_three() {
        let readings = foresee(3).into_iter().map(beating).map(certain);
        let mut events = Vec::new();
        let verdict = arena(Scripted::new(readings), Always).play(&mut events);
        assert_eq!(verdict.winner(), Some(Side::Player));
        assert_eq!(verdict.tally().player(), 3);
        assert_eq!(verdict.tally().cpu(), 0);
        assert_eq!(rounds(&events).len(), 3);
        assert_eq!(events.last(), Some(&Event::Over(verdict)));
    }
    #[test]
    fn no_rounds_requested_after_win() {
        let mut readings = foresee(3).into_iter().map(beating).map(certain).collect::<Vec<_>>();
        readings.push(certain(Choice::Rock));
        let ref mut prompt = Replies::new([Signal::Continue; 10]);
        let mut game = Match::new(
            Still,
            Scripted::new(readings),
            &mut *prompt,
            Cpu::seeded(SEED),
            ManualClock::default(),
            Interrupt::default(),
            &Settings::default(),
        );
        let mut phase = Phase::AwaitingChoices;
        while !matches!(phase, Phase::MatchOver(_)) {
            phase = game.step(phase);
        }
        assert_eq!(game.rounds(), 3);
        drop(game);
        assert_eq!(prompt.asked(), 2);
    }
    #[test]
    fn cpu_takes_match_at_three() {
        let readings = foresee(3).into_iter().map(losing).map(certain);
        let verdict = arena(Scripted::new(readings), Always).play(&mut Vec::<Event>::new());
        assert_eq!(verdict, Verdict::Won(Side::Cpu, *verdict.tally()));
        assert_eq!(verdict.tally().cpu(), 3);
        assert_eq!(verdict.tally().player(), 0);
    }
    #[test]
    fn draws_do_not_count() {
        let cpu = foresee(5);
        let readings = [
            cpu[0],
            beating(cpu[1]),
            beating(cpu[2]),
            cpu[3],
            beating(cpu[4]),
        ]
        .into_iter()
        .map(certain);
        let mut events = Vec::new();
        let verdict = arena(Scripted::new(readings), Always).play(&mut events);
        let rounds = rounds(&events);
        assert_eq!(rounds.len(), 5);
        assert_eq!(rounds[0].outcome, Outcome::Draw);
        assert_eq!(rounds[3].outcome, Outcome::Draw);
        assert_eq!(verdict.winner(), Some(Side::Player));
        assert_eq!(verdict.tally().decided(), 3);
    }
    #[test]
    fn nothing_on_round_two_aborts() {
        let cpu = foresee(1);
        let readings = [certain(beating(cpu[0])), Reading::certain(Gesture::Nothing)];
        let mut events = Vec::new();
        let verdict = arena(Scripted::new(readings), Always).play(&mut events);
        assert_eq!(verdict.winner(), None);
        assert!(matches!(verdict, Verdict::Aborted(Fault::InvalidChoice, _)));
        assert_eq!(verdict.tally().player(), 1);
        assert_eq!(rounds(&events).len(), 1);
    }
    #[test]
    fn stop_signal_ends_without_winner() {
        let readings = foresee(2).into_iter().map(beating).map(certain);
        let ref mut prompt = Replies::new([Signal::Continue, Signal::Stop]);
        let verdict = arena(Scripted::new(readings), &mut *prompt).play(&mut Vec::<Event>::new());
        assert!(matches!(verdict, Verdict::Stopped(_)));
        assert_eq!(verdict.tally().player(), 2);
        assert_eq!(prompt.asked(), 2);
    }
    #[test]
    fn classifier_failure_aborts() {
        let classifier = Scripted::default().fail(Fault::Classifier(String::from("oom")));
        let verdict = arena(classifier, Always).play(&mut Vec::<Event>::new());
        assert_eq!(
            verdict,
            Verdict::Aborted(Fault::Classifier(String::from("oom")), Tally::default())
        );
    }
    #[test]
    fn tallies_never_decrease() {
        let cpu = foresee(8);
        let readings = cpu
            .iter()
            .enumerate()
            .map(|(i, c)| match i % 3 {
                0 => beating(*c),
                1 => losing(*c),
                _ => *c,
            })
            .map(certain);
        let mut events = Vec::new();
        arena(Scripted::new(readings), Always).play(&mut events);
        let rounds = rounds(&events);
        for pair in rounds.windows(2) {
            assert!(pair[1].tally.player() >= pair[0].tally.player());
            assert!(pair[1].tally.cpu() >= pair[0].tally.cpu());
        }
        let decided = rounds.iter().filter(|r| r.outcome != Outcome::Draw).count();
        assert_eq!(rounds.last().map(|r| r.tally.decided()), Some(decided));
    }
    #[test]
    fn match_over_is_terminal() {
        let mut game = arena(Scripted::default(), Always);
        let over = Phase::MatchOver(Verdict::Stopped(Tally::default()));
        assert_eq!(game.step(over.clone()), over);
    }
    #[test]
    fn custom_threshold() {
        let readings = foresee(5).into_iter().map(beating).map(certain);
        let settings = Settings {
            threshold: 5,
            ..Settings::default()
        };
        let verdict = Match::new(
            Still,
            Scripted::new(readings),
            Always,
            Cpu::seeded(SEED),
            ManualClock::default(),
            Interrupt::default(),
            &settings,
        )
        .play(&mut Vec::<Event>::new());
        assert_eq!(verdict.winner(), Some(Side::Player));
        assert_eq!(verdict.tally().player(), 5);
    }

    /// Prompt that raises the interrupt while asking, as Ctrl+C would.
    struct Hangup(Interrupt);
    impl Prompt for Hangup {
        fn ask(&mut self, _: &Tally) -> Result<Signal, Fault> {
            self.0.raise();
            Ok(Signal::Continue)
        }
    }

    #[test]
    fn raised_interrupt_aborts_before_first_round() {
        let interrupt = Interrupt::default();
        interrupt.raise();
        let ref mut classifier = Scripted::new([certain(Choice::Rock)]);
        let mut events = Vec::new();
        let verdict = Match::new(
            Still,
            &mut *classifier,
            Always,
            Cpu::seeded(SEED),
            ManualClock::default(),
            interrupt,
            &Settings::default(),
        )
        .play(&mut events);
        assert_eq!(verdict, Verdict::Aborted(Fault::Interrupted, Tally::default()));
        assert_eq!(verdict.winner(), None);
        assert!(rounds(&events).is_empty());
        assert_eq!(classifier.calls(), 0);
    }
    #[test]
    fn interrupt_between_rounds_keeps_tally() {
        let readings = foresee(3).into_iter().map(beating).map(certain);
        let interrupt = Interrupt::default();
        let mut events = Vec::new();
        let verdict = Match::new(
            Still,
            Scripted::new(readings),
            Hangup(interrupt.clone()),
            Cpu::seeded(SEED),
            ManualClock::default(),
            interrupt,
            &Settings::default(),
        )
        .play(&mut events);
        assert!(matches!(verdict, Verdict::Aborted(Fault::Interrupted, _)));
        assert_eq!(verdict.tally().player(), 1);
        assert_eq!(rounds(&events).len(), 1);
    }
}
