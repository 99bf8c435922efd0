//! Input handling for the dashboard.
//!
//! Keyboard events map to [`Action`]s; mouse events are translated into
//! [`PointerEvent`]s and routed to the shell, which owns the hit testing and
//! drag capture.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    Help,
    /// Switch to the overview tab.
    OverviewTab,
    /// Switch to the detailed-metrics tab.
    DetailedTab,
    /// Cycle to the next tab.
    NextTab,
    /// No action.
    None,
}

/// Pointer gesture phases the shell cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Left button pressed.
    Down,
    /// Moved with the left button held.
    Move,
    /// Left button released.
    Up,
}

/// A left-button pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub kind: PointerKind,
    /// Column of the pointer.
    pub column: u16,
    /// Row of the pointer.
    pub row: u16,
}

/// Input handler with configurable vim keys.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Enable vim-style keys (h/l switch tabs).
    pub vim_keys: bool,
}

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        // Ctrl+C / Ctrl+Q always quit.
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
                _ => {}
            }
        }

        match event.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

            // Help
            KeyCode::Char('?') | KeyCode::F(1) => Action::Help,

            // Tabs
            KeyCode::Char('1') | KeyCode::Char('o') => Action::OverviewTab,
            KeyCode::Char('2') | KeyCode::Char('d') => Action::DetailedTab,
            KeyCode::Tab => Action::NextTab,

            // Vim keys
            KeyCode::Char('h') if self.vim_keys => Action::OverviewTab,
            KeyCode::Char('l') if self.vim_keys => Action::DetailedTab,

            _ => Action::None,
        }
    }

    /// Translates a mouse event into a pointer event.
    ///
    /// Only the left button participates in divider dragging; everything else
    /// returns `None`.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Option<PointerEvent> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
            MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
            _ => return None,
        };

        Some(PointerEvent {
            kind,
            column: event.column,
            row: event.row,
        })
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
