use super::*;
use crate::Fault;
use crate::gameplay::*;
use dialoguer::Confirm;

/// Asks the human at the terminal whether to play on.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, tally: &Tally) -> Result<Signal, Fault> {
        Confirm::new()
            .with_prompt(format!("{}. Continue?", tally))
            .report(false)
            .default(true)
            .interact()
            .map(|yes| match yes {
                true => Signal::Continue,
                false => Signal::Stop,
            })
            .map_err(|e| crate::interrupted_or(e, Fault::Prompt))
    }
}
