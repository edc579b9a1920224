//! Probe Binary
//!
//! Classifies every frame in a capture folder and prints the rounded class
//! distribution next to the gesture it reads as. Useful for checking a
//! camera setup against a model before playing.

use clap::Parser;
use rpscam::vision::*;

#[derive(Debug, Parser)]
#[command(name = "probe", about = "Print gesture readings for a folder of frames")]
struct Probe {
    /// Directory of captured frames
    frames: std::path::PathBuf,
    /// Gesture model file (JSON centroids)
    model: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    let probe = Probe::parse();
    rpscam::log();
    let mut folder = Folder::open(&probe.frames)?;
    let mut model = Centroids::load(&probe.model)?;
    println!("rock paper scissors nothing");
    for path in folder.paths().to_vec() {
        let frame = folder.next_frame()?;
        let reading = model.classify(&Tensor::from(&frame))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{:<32} {} {}", name, reading, reading.gesture());
    }
    Ok(())
}
