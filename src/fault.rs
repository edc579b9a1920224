/// Everything that can end a match without a winner.
///
/// None of these are retried. The controller turns each one into
/// [`Verdict::Aborted`](crate::gameplay::Verdict::Aborted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// The classifier saw no usable gesture, or a raw index was out of range.
    #[error("invalid choice")]
    InvalidChoice,
    #[error("frame acquisition failed: {0}")]
    FrameAcquisition(String),
    #[error("classifier failed: {0}")]
    Classifier(String),
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("interrupted")]
    Interrupted,
}

impl Fault {
    /// Aborts the player caused on purpose, as opposed to equipment failures.
    pub fn is_deliberate(&self) -> bool {
        matches!(self, Self::InvalidChoice | Self::Interrupted)
    }
}

/// Ctrl+C at a raw-mode terminal prompt comes back as an interrupted
/// read, not as a signal. Treat it as the player ending the match.
#[cfg(feature = "cli")]
pub fn interrupted_or<F>(error: dialoguer::Error, otherwise: F) -> Fault
where
    F: FnOnce(String) -> Fault,
{
    match error {
        dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
            Fault::Interrupted
        }
        error => otherwise(error.to_string()),
    }
}
