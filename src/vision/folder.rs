use super::*;
use crate::Fault;
use std::path::Path;
use std::path::PathBuf;

/// Replays a directory of still images as if it were a capture device.
///
/// Files are served in name order and the sequence wraps around,
/// so the source never runs dry on its own. Decoding happens per call.
#[derive(Debug, Clone)]
pub struct Folder {
    paths: Vec<PathBuf>,
    cursor: usize,
}

impl Folder {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Fault> {
        let dir = dir.as_ref();
        let mut paths = std::fs::read_dir(dir)
            .map_err(|e| Fault::FrameAcquisition(format!("{}: {}", dir.display(), e)))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| image::ImageFormat::from_path(path).is_ok())
            .collect::<Vec<_>>();
        paths.sort();
        match paths.is_empty() {
            true => Err(Fault::FrameAcquisition(format!(
                "{}: no image files",
                dir.display()
            ))),
            false => {
                log::info!("replaying {} frames from {}", paths.len(), dir.display());
                Ok(Self { paths, cursor: 0 })
            }
        }
    }
    pub fn len(&self) -> usize {
        self.paths.len()
    }
    /// Never true for an opened folder.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl FrameSource for Folder {
    fn next_frame(&mut self) -> Result<Frame, Fault> {
        let ref path = self.paths[self.cursor];
        self.cursor = (self.cursor + 1) % self.paths.len();
        image::open(path)
            .map(|image| Frame::from(image.to_rgb8()))
            .map_err(|e| Fault::FrameAcquisition(format!("{}: {}", path.display(), e)))
    }
}
