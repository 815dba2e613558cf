//! Terminal rendering and event loop (impure shell).
//!
//! The page state projects onto a [`MemorySurface`]; each frame is drawn
//! from that surface, so the terminal shows exactly what the search core
//! wrote.

pub mod constants;
mod help;
mod layout;
pub mod plain;
pub mod rows;
mod search_bar;
pub mod styles;

pub use layout::{render_page, Screen};
pub use plain::format_plain;
pub use rows::{visible_rows, Cursor, Row};
pub use search_bar::SearchBar;
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::persist::ThemeStore;
use crate::state::{BulkAction, KeyPress, PageState};
use crate::surface::{MemorySurface, RenderSurface};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    page: PageState,
    surface: MemorySurface,
    key_bindings: KeyBindings,
    theme_store: Box<dyn ThemeStore>,
    colors: ColorConfig,
    cursor: Cursor,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal in raw mode with alternate screen.
    pub fn new(page: PageState, theme_store: Box<dyn ThemeStore>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(
            terminal,
            page,
            theme_store,
            ColorConfig::from_env(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// App drawing to an existing terminal; mounts the page immediately.
    pub fn with_terminal(
        terminal: Terminal<B>,
        page: PageState,
        theme_store: Box<dyn ThemeStore>,
        colors: ColorConfig,
    ) -> Self {
        let mut surface = MemorySurface::for_index(page.index());
        page.mount(&mut surface);
        Self {
            terminal,
            page,
            surface,
            key_bindings: KeyBindings::default(),
            theme_store,
            colors,
            cursor: Cursor::default(),
        }
    }

    /// Current page state.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// The surface the page projects onto.
    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    /// Selected tree row.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The terminal (for inspecting a test backend).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Hand back the page state, e.g. to print its fragment.
    pub fn into_page(self) -> PageState {
        self.page
    }

    /// Tree rows currently visible.
    pub fn rows(&self) -> Vec<Row> {
        visible_rows(self.page.index(), &self.surface)
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let rows = self.rows();
        self.cursor.clamp(rows.len());
        let theme = self.page.theme().effective();
        let screen = Screen {
            index: self.page.index(),
            surface: &self.surface,
            rows: &rows,
            cursor: self.cursor,
            palette: Palette::for_theme(theme, self.colors),
            theme,
            shortcut: self.page.search_shortcut(),
        };
        self.terminal.draw(|frame| render_page(frame, &screen))?;
        Ok(())
    }

    /// Handle one key press; returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.surface.search_focused() {
            self.handle_search_key(key);
            return false;
        }

        if let KeyCode::Char(ch) = key.code {
            let plain = !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            let press = KeyPress {
                key: ch,
                target: None,
            };
            if plain && self.page.focus_shortcut(&mut self.surface, &press) {
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.apply_action(action)
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.surface.input().is_some_and(|i| i.value().is_empty()) {
                    self.blur_search();
                } else {
                    self.page.clear_query(&mut self.surface);
                }
            }
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => self.blur_search(),
            KeyCode::Backspace => self.edit_query(|input| input.backspace()),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_query(|input| input.insert(ch));
            }
            _ => {}
        }
    }

    fn blur_search(&mut self) {
        if let Some(input) = self.surface.search_input() {
            input.blur();
        }
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut crate::surface::SearchInput)) {
        let Some(input) = self.surface.search_input() else {
            return;
        };
        edit(input);
        let raw = input.value().to_string();
        self.page.query_changed(&mut self.surface, &raw);
        self.cursor.select(0);
    }

    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::MoveUp => self.cursor.move_up(),
            KeyAction::MoveDown => self.cursor.move_down(self.rows().len()),
            KeyAction::ToggleSection => self.toggle_selected(),
            KeyAction::OpenAll => self.bulk(BulkAction::OpenAll),
            KeyAction::CloseAll => self.bulk(BulkAction::CloseAll),
            KeyAction::OpenSteps => self.bulk(BulkAction::OpenSteps),
            KeyAction::OpenTroubles => self.bulk(BulkAction::OpenTroubles),
            KeyAction::ToggleTheme => {
                let theme = self.page.toggle_theme(&mut *self.theme_store);
                debug!(%theme, "Theme toggled from keyboard");
            }
            KeyAction::ClearSearch => self.page.clear_query(&mut self.surface),
        }
        self.cursor.clamp(self.rows().len());
        false
    }

    /// Toggle the section under the cursor, keeping the cursor on its header.
    fn toggle_selected(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor.selected()).copied() else {
            return;
        };
        let section = row.section();
        self.page.toggle_section(&mut self.surface, section);
        if let Some(header) = self
            .rows()
            .iter()
            .position(|r| *r == Row::Section(section))
        {
            self.cursor.select(header);
        }
    }

    fn bulk(&mut self, action: BulkAction) {
        self.page.bulk(&mut self.surface, action);
    }
}

/// Run the interactive viewer until the user quits.
///
/// Returns the final page state; the terminal is restored even when the
/// loop fails.
pub fn run_viewer(page: PageState, theme_store: Box<dyn ThemeStore>) -> Result<PageState, TuiError> {
    let mut app = TuiApp::new(page, theme_store)?;
    info!("Viewer started");

    let result = app.run();
    restore_terminal()?;
    result?;

    info!("Viewer closed");
    Ok(app.into_page())
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
