//! Console input commands.

use std::str::FromStr;

use fxpad_common::{CommonError, Currency, Side};
use fxpad_keypad::{KeypadError, KeypadKey};
use thiserror::Error;

/// Errors from parsing a console line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Keypad input contained a character with no key.
    #[error("{0} (keys are 0-9, '.', '<')")]
    Key(#[from] KeypadError),

    /// Currency or side not recognised.
    #[error(transparent)]
    Selection(#[from] CommonError),

    /// `from` / `to` without a code.
    #[error("Missing currency code after '{0}'")]
    MissingCode(Side),
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One or more keypad presses, in order.
    Keys(Vec<KeypadKey>),
    /// Exchange the currencies.
    Swap,
    /// Select the currency on one side.
    Select(Side, Currency),
    /// Print supported currencies.
    List,
    /// Print usage.
    Help,
    /// Redraw.
    Show,
    /// Leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show);
        };

        match head.to_ascii_lowercase().as_str() {
            "swap" | "s" => Ok(Command::Swap),
            "list" | "l" => Ok(Command::List),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            word @ ("from" | "to") => {
                let side: Side = word.parse()?;
                let code = words.next().ok_or(CommandError::MissingCode(side))?;
                Ok(Command::Select(side, code.parse()?))
            }
            _ => line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(KeypadKey::from_char)
                .collect::<Result<Vec<_>, _>>()
                .map(Command::Keys)
                .map_err(CommandError::from),
        }
    }
}
