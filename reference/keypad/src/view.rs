//! Binding between converter state and a front end.

use fxpad_common::{Currency, Side};
use tracing::trace;

use crate::buffer::KeypadKey;
use crate::state::{ConverterEvent, ConverterState};

/// Something that shows the converter.
pub trait ConversionView {
    /// Redraw from the current state. Called once after every event.
    fn refresh(&mut self, state: &ConverterState);
}

/// Owns the state and its view; each event mutates, recomputes, then
/// refreshes the view exactly once.
pub struct Converter<V> {
    state: ConverterState,
    view: V,
}

impl<V: ConversionView> Converter<V> {
    /// Create a converter and draw the initial state.
    pub fn new(state: ConverterState, mut view: V) -> Self {
        view.refresh(&state);
        Self { state, view }
    }

    /// Apply an event and refresh the view.
    pub fn handle(&mut self, event: ConverterEvent) {
        trace!(?event, "Handling event");
        self.state.apply(event);
        self.view.refresh(&self.state);
    }

    /// Keypad press.
    pub fn press(&mut self, key: KeypadKey) {
        self.handle(ConverterEvent::Key(key));
    }

    /// Exchange source and target currencies.
    pub fn swap_currencies(&mut self) {
        self.handle(ConverterEvent::Swap);
    }

    /// Select a currency on one side.
    pub fn set_currency(&mut self, side: Side, currency: Currency) {
        self.handle(ConverterEvent::SetCurrency(side, currency));
    }

    /// Refresh the view without changing state.
    pub fn redraw(&mut self) {
        self.view.refresh(&self.state);
    }

    /// The converted amount as shown to the user.
    pub fn converted_display(&self) -> &str {
        self.state.converted_display()
    }

    /// Get the state.
    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Get the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get the view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the converter, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }
}
