use crate::gameplay::*;
use crate::*;

/// A probability distribution over the classifier's classes:
/// rock, paper, scissors, nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading([Probability; CLASSES]);

impl Reading {
    pub fn weights(&self) -> &[Probability; CLASSES] {
        &self.0
    }
    /// The most probable class. Ties go to the lower index.
    pub fn gesture(&self) -> Gesture {
        Gesture::from_class(self.argmax())
    }
    /// Probability of the most probable class.
    pub fn confidence(&self) -> Probability {
        self.0[self.argmax()]
    }
    /// A reading that is certain of one gesture.
    pub fn certain(gesture: Gesture) -> Self {
        let mut weights = [0.; CLASSES];
        match gesture {
            Gesture::Throw(choice) => weights[choice.index() as usize] = 1.,
            Gesture::Nothing => weights[CLASSES - 1] = 1.,
        }
        Self(weights)
    }
    fn argmax(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .fold((0, Probability::MIN), |best, (i, p)| match *p > best.1 {
                true => (i, *p),
                false => best,
            })
            .0
    }
}

impl From<[Probability; CLASSES]> for Reading {
    fn from(weights: [Probability; CLASSES]) -> Self {
        Self(weights)
    }
}

impl std::fmt::Display for Reading {
    /// Rounded to two places, like a model summary printout.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:.2}", p)?;
        }
        write!(f, "]")
    }
}
