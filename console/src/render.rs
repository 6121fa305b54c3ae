//! Plain-text rendering of the converter.

use std::io::Write;

use fxpad_common::Currency;
use fxpad_flags::{FlagImage, FlagSet};
use fxpad_keypad::{ConversionView, ConverterState, KeypadKey};
use tracing::warn;

/// Writes the converter to a terminal.
pub struct TerminalView<W> {
    out: W,
    flags: FlagSet,
}

impl<W: Write> TerminalView<W> {
    /// Create a view writing to `out`.
    pub fn new(out: W, flags: FlagSet) -> Self {
        Self { out, flags }
    }

    /// Print a line that isn't part of the converter panel.
    pub fn message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "Could not write to terminal");
        }
    }

    /// Print the keypad layout.
    pub fn keypad(&mut self) {
        let rows: Vec<String> = KeypadKey::LAYOUT
            .iter()
            .map(|row| {
                row.iter()
                    .map(|key| format!("[ {key} ]"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        for row in rows {
            self.message(&row);
        }
    }

    /// Print the supported currencies.
    pub fn currency_list(&mut self) {
        let lines: Vec<String> = Currency::ALL
            .iter()
            .map(|c| format!("{} {}  {}", self.badge(*c), c.code(), c.name()))
            .collect();
        for line in lines {
            self.message(&line);
        }
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn badge(&self, currency: Currency) -> String {
        match self.flags.get(currency) {
            FlagImage::Png(_) => format!("[{}]", currency.country_code()),
            FlagImage::Placeholder { .. } => "[  ]".to_string(),
        }
    }
}

impl<W: Write> ConversionView for TerminalView<W> {
    fn refresh(&mut self, state: &ConverterState) {
        let pair = state.pair();
        let amount = format!(
            "Amount            {} {}  {}",
            self.badge(pair.from),
            pair.from,
            state.amount()
        );
        let converted = format!(
            "Converted Amount  {} {}  {}",
            self.badge(pair.to),
            pair.to,
            state.converted_display()
        );
        self.message(&amount);
        self.message(&converted);
    }
}
