//! Rock-Paper-Scissors against the computer, with the player's hand read
//! from camera frames by a pre-trained gesture classifier.
//!
//! - [`gameplay`]: choices, round resolution, tallies and verdicts
//! - [`vision`]: frame sources, preprocessing and classifiers
//! - [`timing`]: clocks and the decide-by-deadline loop
//! - [`players`]: the CPU opponent and continuation prompts
//! - [`gameroom`]: the match controller and its event stream
#![allow(dead_code)]

pub mod config;
pub mod fault;
pub mod gameplay;
pub mod gameroom;
pub mod players;
pub mod timing;
pub mod vision;

pub use config::*;
pub use fault::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Classifier output weights and confidence thresholds.
pub type Probability = f32;
/// Wins counted for one side of a match.
pub type Wins = u8;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Wins needed to take the match.
pub const WIN_THRESHOLD: Wins = 3;
/// Time the player gets to show a gesture each round (seconds).
pub const COUNTDOWN: f32 = 5.5;
/// Reading confidence that ends the countdown early.
pub const CONFIDENCE: Probability = 0.9;
/// Minimum spacing between two classifications (milliseconds).
pub const POLL_INTERVAL: u64 = 100;

// ============================================================================
// MODEL INPUT
// ============================================================================
/// Square side of the classifier input, in pixels.
pub const IMAGE_SIZE: usize = 224;
/// Color channels of the classifier input.
pub const CHANNELS: usize = 3;
/// Classes produced by the classifier: rock, paper, scissors, nothing.
pub const CLASSES: usize = 4;
/// Divisor of the `x / 127 - 1` pixel normalization.
pub const PIXEL_SCALE: f32 = 127.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// Falls back to the terminal alone when `logs/` cannot be written.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(term);
    match logfile(std::path::Path::new("logs"), &config) {
        Ok(file) => loggers.push(file),
        Err(e) => eprintln!("logs/ is not writable ({}), logging to terminal only", e),
    }
    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// DEBUG file logger at `<dir>/<unix-time>.log`.
#[cfg(feature = "cli")]
fn logfile(
    dir: &std::path::Path,
    config: &simplelog::Config,
) -> std::io::Result<Box<simplelog::WriteLogger<std::fs::File>>> {
    std::fs::create_dir_all(dir)?;
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
    Ok(simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        file,
    ))
}

/// Register Ctrl+C handler that raises the match's interrupt.
/// The match thread notices on its next poll and returns normally,
/// so the camera and model are dropped on the way out.
#[cfg(feature = "cli")]
pub fn brb(interrupt: timing::Interrupt) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, ending match after current poll");
                interrupt.raise();
            }
            Err(e) => log::warn!("cannot listen for ctrl-c: {}", e),
        }
    });
}
