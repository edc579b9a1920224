use super::*;
use crate::Fault;

/// Gesture recognition model.
///
/// Implementations can be a pre-trained model loaded from disk,
/// a human at the keyboard, a scripted sequence in tests, etc.
/// The decider only cares that it is callable repeatedly.
pub trait Classifier {
    /// Classify one preprocessed image.
    fn classify(&mut self, tensor: &Tensor) -> Result<Reading, Fault>;
}

impl<C> Classifier for Box<C>
where
    C: Classifier + ?Sized,
{
    fn classify(&mut self, tensor: &Tensor) -> Result<Reading, Fault> {
        (**self).classify(tensor)
    }
}

impl<C> Classifier for &mut C
where
    C: Classifier + ?Sized,
{
    fn classify(&mut self, tensor: &Tensor) -> Result<Reading, Fault> {
        (**self).classify(tensor)
    }
}
