//! fxpad Keypad
//!
//! Amount entry state machine and the conversion state a front end binds to.
//!
//! The front end feeds [`ConverterEvent`]s into a [`Converter`]; after every
//! event the converted display is recomputed and the [`ConversionView`] is
//! refreshed.

pub mod buffer;
pub mod config;
pub mod error;
pub mod state;
pub mod view;

pub use buffer::{AmountBuffer, KeypadKey};
pub use config::ConverterConfig;
pub use error::{KeypadError, KeypadResult};
pub use state::{ConverterEvent, ConverterState, DISPLAY_ERROR, DISPLAY_ZERO};
pub use view::{ConversionView, Converter};
