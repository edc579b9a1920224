use super::*;
use crate::Fault;

/// Anything that can hand out camera frames on demand.
pub trait FrameSource {
    /// Block until the next frame is available.
    fn next_frame(&mut self) -> Result<Frame, Fault>;
}

impl<S> FrameSource for Box<S>
where
    S: FrameSource + ?Sized,
{
    fn next_frame(&mut self) -> Result<Frame, Fault> {
        (**self).next_frame()
    }
}

/// An endless blank frame. Pairs with classifiers that ignore the
/// picture, such as keyboard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Still;

impl FrameSource for Still {
    fn next_frame(&mut self) -> Result<Frame, Fault> {
        Ok(Frame::blank(1, 1))
    }
}
