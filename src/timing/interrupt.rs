use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Shared request to wind a match down.
///
/// Clones share one flag: the binary keeps a handle for the Ctrl+C
/// listener and moves another into the match. Once raised it stays raised.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
