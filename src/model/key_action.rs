//! Domain-level keyboard actions independent of key bindings.

/// Actions the viewer performs while focus is in the section list.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text typed into the search input never reaches this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the row cursor up. Default: k/↑
    MoveUp,
    /// Move the row cursor down. Default: j/↓
    MoveDown,
    /// Toggle the section under the cursor. Default: Enter/Space
    ToggleSection,
    /// Open every section. Default: o
    OpenAll,
    /// Close every section. Default: c
    CloseAll,
    /// Close all, then open step and info sections. Default: s
    OpenSteps,
    /// Close all, then open troubleshooting sections. Default: t
    OpenTroubles,
    /// Flip between light and dark theme. Default: T
    ToggleTheme,
    /// Clear the active query. Default: Esc
    ClearSearch,
    /// Exit the viewer. Default: q
    Quit,
}
