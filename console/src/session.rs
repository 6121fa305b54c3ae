//! Console session driving the converter.

use std::io::{BufRead, Write};

use fxpad_keypad::Converter;
use tracing::{info, warn};

use crate::command::Command;
use crate::render::TerminalView;
use crate::script::Script;

const HELP: &str = "\
Type keypad keys (0-9, '.', '<' to erase), several per line if you like.
  swap           exchange the currencies
  from <CODE>    set the source currency
  to <CODE>      set the target currency
  list           show supported currencies
  quit           leave";

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive or scripted use of one converter.
pub struct Session<W: Write> {
    converter: Converter<TerminalView<W>>,
}

impl<W: Write> Session<W> {
    /// Create a session.
    pub fn new(converter: Converter<TerminalView<W>>) -> Self {
        Self { converter }
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Keys(keys) => {
                for key in keys {
                    self.converter.press(key);
                }
            }
            Command::Swap => self.converter.swap_currencies(),
            Command::Select(side, currency) => self.converter.set_currency(side, currency),
            Command::List => self.converter.view_mut().currency_list(),
            Command::Help => {
                let view = self.converter.view_mut();
                view.message(HELP);
                view.keypad();
            }
            Command::Show => self.converter.redraw(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Run every command of a script.
    pub fn run_script(&mut self, script: Script) {
        info!(script = %script.name, steps = script.commands.len(), "Running script");
        for command in script.commands {
            if self.execute(command) == Flow::Quit {
                break;
            }
        }
    }

    /// Read commands line by line until EOF or `quit`.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command) == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(input = %line, error = %e, "Ignoring input");
                    self.converter.view_mut().message(&e.to_string());
                }
            }
        }
        Ok(())
    }

    /// The converted amount as shown to the user.
    pub fn converted_display(&self) -> &str {
        self.converter.converted_display()
    }

    /// Consume the session, returning the writer.
    pub fn into_writer(self) -> W {
        self.converter.into_view().into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxpad_common::{Currency, CurrencyPair};
    use fxpad_flags::FlagSet;
    use fxpad_fx::RateTable;
    use fxpad_keypad::{ConverterConfig, ConverterState};
    use std::io::Cursor;

    fn session() -> Session<Vec<u8>> {
        let state =
            ConverterState::new(RateTable::fallback(), &ConverterConfig::default()).unwrap();
        let view = TerminalView::new(Vec::new(), FlagSet::placeholders());
        Session::new(Converter::new(state, view))
    }

    #[test]
    fn test_interactive_session() {
        let mut session = session();
        let input = Cursor::new("<<<<<<<\n250\nto eur\nswap\nquit\n99\n");

        session.run_interactive(input).unwrap();

        // 250 EUR -> USD
        assert_eq!(session.converted_display(), "271.74");
        let output = String::from_utf8(session.into_writer()).unwrap();
        assert!(output
            .ends_with("Amount            [  ] EUR  250\nConverted Amount  [  ] USD  271.74\n"));
    }

    #[test]
    fn test_bad_input_is_reported_and_skipped() {
        let mut session = session();
        let input = Cursor::new("to XYZ\n12x\n");

        session.run_interactive(input).unwrap();

        assert_eq!(session.converted_display(), "132500.00");
        let output = String::from_utf8(session.into_writer()).unwrap();
        assert!(output.contains("Unsupported currency: XYZ"));
        assert!(output.contains("Unknown key: 'x'"));
    }

    #[test]
    fn test_builtin_script() {
        let mut session = session();

        session.run_script(Script::load("clear-and-type").unwrap());

        // 250 USD -> EUR
        assert_eq!(session.converted_display(), "230.00");
        assert_eq!(
            session.converter.state().pair(),
            CurrencyPair::new(Currency::Usd, Currency::Eur)
        );
    }

    #[test]
    fn test_decimal_entry_script() {
        let mut session = session();

        session.run_script(Script::load("decimal-entry").unwrap());

        assert_eq!(session.converter.state().amount(), "0.5");
        assert_eq!(session.converted_display(), "66.25");
    }

    #[test]
    fn test_help_prints_keypad() {
        let mut session = session();

        assert_eq!(session.execute(Command::Help), Flow::Continue);
        assert_eq!(session.execute(Command::Quit), Flow::Quit);

        let output = String::from_utf8(session.into_writer()).unwrap();
        assert!(output.contains("swap           exchange the currencies"));
        assert!(output.contains("[ 7 ] [ 8 ] [ 9 ]"));
    }
}
