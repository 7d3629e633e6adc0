//! Typed page events and the handler interface components implement.

/// A letter button was pressed; `value` is its Morse code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub value: String,
}

/// A checkbox changed through user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub checked: bool,
}

pub trait EventHandler<E> {
    fn handle_event(&mut self, event: &E);
}
