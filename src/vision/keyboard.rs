use super::*;
use crate::Fault;
use crate::gameplay::*;
use dialoguer::Select;

/// Stands in for the camera model when there is none: the player
/// picks a throw from a menu and the reading is certain.
#[derive(Debug, Default)]
pub struct Keyboard;

impl Classifier for Keyboard {
    fn classify(&mut self, _: &Tensor) -> Result<Reading, Fault> {
        let labels = ["Rock", "Paper", "Scissors", "Quit"];
        let selection = Select::new()
            .with_prompt("Your throw")
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| crate::interrupted_or(e, Fault::Classifier))?;
        Ok(Reading::certain(Gesture::from_class(selection)))
    }
}
