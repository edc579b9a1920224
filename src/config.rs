use crate::*;
use std::time::Duration;

/// Tunables for one match. Defaults come from the crate constants;
/// the binary overrides them from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Wins needed to take the match.
    pub threshold: Wins,
    /// How long the player has to show a gesture.
    pub countdown: Duration,
    /// Minimum spacing between classifications.
    pub interval: Duration,
    /// Confidence that ends the countdown early.
    pub confidence: Probability,
    /// Seed for the CPU opponent. Fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Settings {
    /// Certain readings always end the countdown. A menu answer is
    /// final, so waiting out the deadline would only ask again.
    pub fn menu_driven(self) -> Self {
        Self {
            confidence: self.confidence.min(1.),
            ..self
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: WIN_THRESHOLD,
            countdown: Duration::from_secs_f32(COUNTDOWN),
            interval: Duration::from_millis(POLL_INTERVAL),
            confidence: CONFIDENCE,
            seed: None,
        }
    }
}

/// Command-line flags for the `rpscam` binary.
#[cfg(feature = "cli")]
#[derive(Debug, clap::Parser)]
#[command(name = "rpscam", about = "Rock-Paper-Scissors against the computer, played by camera")]
pub struct Args {
    /// Directory of captured frames to replay as the camera
    #[arg(long, requires = "model")]
    pub frames: Option<std::path::PathBuf>,
    /// Gesture model file (JSON centroids)
    #[arg(long, requires = "frames")]
    pub model: Option<std::path::PathBuf>,
    /// Wins needed to take the match
    #[arg(long, default_value_t = WIN_THRESHOLD, value_parser = clap::value_parser!(u8).range(1..))]
    pub wins: Wins,
    /// Seconds the player has to show a gesture each round
    #[arg(long, default_value_t = COUNTDOWN, value_parser = seconds)]
    pub countdown: f32,
    /// Reading confidence that ends the countdown early
    #[arg(long, default_value_t = CONFIDENCE)]
    pub confidence: Probability,
    /// Milliseconds between classifications
    #[arg(long, default_value_t = POLL_INTERVAL)]
    pub interval: u64,
    /// Seed the CPU opponent for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Seconds that fit in a [`Duration`]: finite and not negative.
#[cfg(feature = "cli")]
fn seconds(arg: &str) -> Result<f32, String> {
    let secs = arg.parse::<f32>().map_err(|e| e.to_string())?;
    Duration::try_from_secs_f32(secs)
        .map(|_| secs)
        .map_err(|_| format!("{} is not a usable number of seconds", arg))
}

#[cfg(feature = "cli")]
impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            threshold: args.wins,
            countdown: Duration::try_from_secs_f32(args.countdown).unwrap_or_default(),
            interval: Duration::from_millis(args.interval),
            confidence: args.confidence,
            seed: args.seed,
        }
    }
}
