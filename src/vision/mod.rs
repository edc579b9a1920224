//! Everything between the lens and a [`Gesture`](crate::gameplay::Gesture).
//!
//! - [`FrameSource`]: where frames come from ([`Folder`], [`Still`])
//! - [`Tensor`]: a frame resized and normalized for the model
//! - [`Classifier`]: what turns a tensor into a [`Reading`]
//!   ([`Centroids`], [`Scripted`], and `Keyboard` with the `cli` feature)
mod centroids;
mod classifier;
mod folder;
mod frame;
#[cfg(feature = "cli")]
mod keyboard;
mod reading;
mod scripted;
mod source;

pub use centroids::*;
pub use classifier::*;
pub use folder::*;
pub use frame::*;
#[cfg(feature = "cli")]
pub use keyboard::*;
pub use reading::*;
pub use scripted::*;
pub use source::*;
