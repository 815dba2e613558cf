//! Optional widgets a surface may expose.

use crate::state::StatusIndicator;

/// Status text region under the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    indicator: StatusIndicator,
    text: String,
}

impl StatusLine {
    /// Show `text` for `indicator`.
    pub fn set(&mut self, indicator: StatusIndicator, text: impl Into<String>) {
        self.indicator = indicator;
        self.text = text.into();
    }

    /// Current state class.
    pub fn indicator(&self) -> StatusIndicator {
        self.indicator
    }

    /// Current text. Empty when no query is active.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Clear-query affordance; only shown while a query is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearControl {
    visible: bool,
}

impl ClearControl {
    /// Show or hide the control.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the control is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Single-line query input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
    focused: bool,
    selected: bool,
}

impl SearchInput {
    /// Raw input text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the input text and drop any selection.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.selected = false;
    }

    /// Type one character. A selected value is replaced.
    pub fn insert(&mut self, ch: char) {
        if self.selected {
            self.value.clear();
            self.selected = false;
        }
        self.value.push(ch);
    }

    /// Delete the last character, or the whole selected value.
    pub fn backspace(&mut self) {
        if self.selected {
            self.value.clear();
            self.selected = false;
        } else {
            self.value.pop();
        }
    }

    /// Give the input keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Move keyboard focus away.
    pub fn blur(&mut self) {
        self.focused = false;
        self.selected = false;
    }

    /// Select the whole value.
    pub fn select_all(&mut self) {
        self.selected = !self.value.is_empty();
    }

    /// Whether the input has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the value is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
