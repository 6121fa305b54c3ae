//! Amount buffer edited by keypad presses.

use std::fmt;

use crate::error::{KeypadError, KeypadResult};

/// Label of the backspace key.
pub const BACKSPACE_LABEL: char = '⌫';

/// One key of the 12-key numeric keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    /// Digit 0-9.
    Digit(u8),
    /// The '.' key.
    DecimalPoint,
    /// Delete the last character.
    Backspace,
}

impl KeypadKey {
    /// Keypad rows as laid out on screen.
    pub const LAYOUT: [[KeypadKey; 3]; 4] = [
        [KeypadKey::Digit(1), KeypadKey::Digit(2), KeypadKey::Digit(3)],
        [KeypadKey::Digit(4), KeypadKey::Digit(5), KeypadKey::Digit(6)],
        [KeypadKey::Digit(7), KeypadKey::Digit(8), KeypadKey::Digit(9)],
        [KeypadKey::DecimalPoint, KeypadKey::Digit(0), KeypadKey::Backspace],
    ];

    /// Digit key, checked.
    pub fn digit(d: u8) -> KeypadResult<Self> {
        if d <= 9 {
            Ok(KeypadKey::Digit(d))
        } else {
            Err(KeypadError::InvalidDigit(d))
        }
    }

    /// Key for a typed character. `<`, backspace and `⌫` all erase.
    pub fn from_char(c: char) -> KeypadResult<Self> {
        match c {
            '0'..='9' => Self::digit(c as u8 - b'0'),
            '.' => Ok(KeypadKey::DecimalPoint),
            '<' | '\u{8}' | BACKSPACE_LABEL => Ok(KeypadKey::Backspace),
            other => Err(KeypadError::UnknownKey(other)),
        }
    }

    /// Label printed on the key.
    pub fn label(&self) -> char {
        match self {
            KeypadKey::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            KeypadKey::DecimalPoint => '.',
            KeypadKey::Backspace => BACKSPACE_LABEL,
        }
    }
}

impl fmt::Display for KeypadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A decimal number under construction.
///
/// Holds only ASCII digits and at most one '.'. Empty means zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmountBuffer(String);

impl AmountBuffer {
    /// Buffer contents that a digit press replaces instead of extending.
    const REPLACEABLE: [&'static str; 2] = ["0", "0.00"];

    /// Create a buffer from text, checking the invariant.
    pub fn new(text: impl Into<String>) -> KeypadResult<Self> {
        let text = text.into();
        let valid = text.chars().all(|c| c.is_ascii_digit() || c == '.')
            && text.matches('.').count() <= 1;

        if valid {
            Ok(Self(text))
        } else {
            Err(KeypadError::InvalidBuffer(text))
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the buffer text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply one key press.
    pub fn press(&mut self, key: KeypadKey) {
        match key {
            KeypadKey::Digit(d) => self.push_digit(d),
            KeypadKey::DecimalPoint => self.push_decimal_point(),
            KeypadKey::Backspace => self.backspace(),
        }
    }

    /// Append a digit, replacing the initial "0" / "0.00" display.
    pub fn push_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if Self::REPLACEABLE.contains(&self.0.as_str()) {
            self.0.clear();
        }
        self.0.push(c);
    }

    /// Insert the decimal point unless one is present.
    pub fn push_decimal_point(&mut self) {
        if self.0.contains('.') {
            return;
        }

        if self.0.is_empty() {
            self.0.push_str("0.");
        } else {
            self.0.push('.');
        }
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for AmountBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn buffer(text: &str) -> AmountBuffer {
        AmountBuffer::new(text).unwrap()
    }

    #[test]
    fn test_new_checks_invariant() {
        assert!(AmountBuffer::new("").is_ok());
        assert!(AmountBuffer::new("1000.00").is_ok());
        assert!(AmountBuffer::new(".").is_ok());
        assert_eq!(
            AmountBuffer::new("1.0.0"),
            Err(KeypadError::InvalidBuffer("1.0.0".to_string()))
        );
        assert!(AmountBuffer::new("-5").is_err());
        assert!(AmountBuffer::new("1e5").is_err());
    }

    #[test]
    fn test_digit_replaces_initial_zero() {
        let mut b = buffer("0");
        b.push_digit(7);
        assert_eq!(b.as_str(), "7");

        let mut b = buffer("0.00");
        b.push_digit(3);
        assert_eq!(b.as_str(), "3");
    }

    #[test]
    fn test_digit_appends() {
        let mut b = buffer("1000.00");
        b.push_digit(5);
        assert_eq!(b.as_str(), "1000.005");

        let mut b = buffer("0.0");
        b.push_digit(1);
        assert_eq!(b.as_str(), "0.01");

        let mut b = AmountBuffer::empty();
        b.push_digit(0);
        assert_eq!(b.as_str(), "0");
    }

    #[test]
    fn test_decimal_point() {
        let mut b = AmountBuffer::empty();
        b.push_decimal_point();
        assert_eq!(b.as_str(), "0.");

        let mut b = buffer("12");
        b.push_decimal_point();
        assert_eq!(b.as_str(), "12.");
    }

    #[test]
    fn test_decimal_point_twice() {
        let mut b = buffer("12");
        b.push_decimal_point();
        b.push_decimal_point();
        assert_eq!(b.as_str(), "12.");
        assert_eq!(b.as_str().matches('.').count(), 1);
    }

    #[test]
    fn test_backspace() {
        let mut b = buffer("7");
        b.backspace();
        assert_eq!(b.as_str(), "");

        b.backspace();
        assert!(b.is_empty());
    }

    #[test]
    fn test_full_edit_sequence() {
        let mut b = buffer("1000.00");
        for _ in 0..7 {
            b.press(KeypadKey::Backspace);
        }
        assert!(b.is_empty());

        for c in ".5<25".chars() {
            b.press(KeypadKey::from_char(c).unwrap());
        }
        assert_eq!(b.as_str(), "0.25");
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(KeypadKey::from_char('9').unwrap(), KeypadKey::Digit(9));
        assert_eq!(KeypadKey::from_char('⌫').unwrap(), KeypadKey::Backspace);
        assert_eq!(KeypadKey::from_char('x'), Err(KeypadError::UnknownKey('x')));
        assert_eq!(KeypadKey::digit(10), Err(KeypadError::InvalidDigit(10)));
    }

    #[test]
    fn test_layout_labels() {
        let labels: String = KeypadKey::LAYOUT
            .iter()
            .flat_map(|row| row.iter().map(|k| k.label()))
            .collect();
        assert_eq!(labels, "123456789.0⌫");
    }

    proptest! {
        #[test]
        fn prop_presses_keep_invariant(keys in proptest::collection::vec(0u8..12, 0..40)) {
            let mut b = buffer("1000.00");
            for k in keys {
                let key = match k {
                    10 => KeypadKey::DecimalPoint,
                    11 => KeypadKey::Backspace,
                    d => KeypadKey::Digit(d),
                };
                b.press(key);
                prop_assert!(AmountBuffer::new(b.as_str()).is_ok());
            }
        }
    }
}
