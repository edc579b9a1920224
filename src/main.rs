//! Match Binary
//!
//! Plays one match of Rock-Paper-Scissors against the CPU.
//! With `--frames` and `--model` the player's throw is read off replayed
//! camera frames; without them it is picked from a menu.

use anyhow::Context;
use clap::Parser;
use rpscam::gameplay::*;
use rpscam::gameroom::*;
use rpscam::players::*;
use rpscam::timing::*;
use rpscam::vision::*;
use rpscam::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    let interrupt = Interrupt::default();
    brb(interrupt.clone());
    let settings = Settings::from(&args);
    log::debug!("{:?}", settings);
    let verdict =
        tokio::task::spawn_blocking(move || play(&args, &settings, interrupt)).await??;
    match verdict {
        Verdict::Aborted(ref fault, _) if !fault.is_deliberate() => {
            anyhow::bail!("match aborted: {}", fault)
        }
        _ => Ok(()),
    }
}

/// Build the collaborators, run the match, release everything on return.
fn play(args: &Args, settings: &Settings, interrupt: Interrupt) -> anyhow::Result<Verdict> {
    let cpu = Cpu::from(settings.seed);
    let clock = SystemClock::default();
    let ref mut console = Console;
    match (&args.frames, &args.model) {
        (Some(frames), Some(model)) => {
            let source = Folder::open(frames)
                .with_context(|| format!("open frame folder {}", frames.display()))?;
            let classifier = Centroids::load(model)
                .with_context(|| format!("load gesture model {}", model.display()))?;
            Ok(Match::new(source, classifier, Terminal, cpu, clock, interrupt, settings).play(console))
        }
        _ => {
            log::info!("no camera configured, reading throws from the keyboard");
            let ref settings = settings.clone().menu_driven();
            Ok(Match::new(Still, Keyboard, Terminal, cpu, clock, interrupt, settings).play(console))
        }
    }
}
