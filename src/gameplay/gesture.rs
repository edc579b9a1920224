use super::*;
use crate::Fault;

/// What the classifier reports seeing: a throw, or nothing usable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Gesture {
    Throw(Choice),
    /// Class index 3, the "false reading" class. Aborts the match.
    Nothing,
}

impl Gesture {
    /// Maps a classifier class index onto a gesture.
    /// Anything past the three throws reads as [`Gesture::Nothing`].
    pub fn from_class(class: usize) -> Self {
        u8::try_from(class)
            .ok()
            .and_then(|i| Choice::try_from(i).ok())
            .map(Self::Throw)
            .unwrap_or(Self::Nothing)
    }
}

impl From<Choice> for Gesture {
    fn from(choice: Choice) -> Self {
        Self::Throw(choice)
    }
}

impl TryFrom<Gesture> for Choice {
    type Error = Fault;
    fn try_from(gesture: Gesture) -> Result<Self, Self::Error> {
        match gesture {
            Gesture::Throw(choice) => Ok(choice),
            Gesture::Nothing => Err(Fault::InvalidChoice),
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Throw(choice) => write!(f, "{}", choice),
            Self::Nothing => write!(f, "Nothing"),
        }
    }
}
