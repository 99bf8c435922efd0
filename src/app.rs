//! Main application loop for the dashboard.

use crate::config::Config;
use crate::data::sample_months;
use crate::error::Result;
use crate::input::{Action, InputHandler};
use crate::shell::{DashboardShell, Tab};
use crate::{debug, debug_log};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};

/// The dashboard application.
pub struct App {
    /// Configuration.
    config: Config,
    /// Input handler.
    input: InputHandler,
    /// The dashboard page.
    shell: DashboardShell,
    /// Whether the application should quit.
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let input = InputHandler::new(config.global.vim_keys);
        let shell = DashboardShell::new(sample_months(), config.theme.clone());

        Self {
            config,
            input,
            shell,
            should_quit: false,
        }
    }

    /// Starts on the given tab.
    #[must_use]
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.shell.set_tab(tab);
        self
    }

    /// Runs the application main loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or rendering fails.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        if self.config.global.mouse {
            stdout().execute(EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;

        // Run the main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        if self.config.global.mouse {
            let _ = stdout().execute(DisableMouseCapture);
        }
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// The main event loop.
    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let poll_timeout = self.config.poll_interval();

        loop {
            // Render
            terminal.draw(|frame| {
                self.shell.render(frame);
            })?;

            // Poll for events
            if event::poll(poll_timeout)? {
                self.handle_event(event::read()?);
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Dispatches a terminal event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input.handle_key(key);
                self.handle_action(action);
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = self.input.handle_mouse(mouse) {
                    self.shell.on_pointer(pointer);
                }
            }
            _ => {}
        }
    }

    /// Handles an input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                debug_log!(debug::Level::Info, "app", "quit requested");
                self.should_quit = true;
            }
            Action::Help => self.shell.toggle_help(),
            Action::OverviewTab => self.shell.set_tab(Tab::Overview),
            Action::DetailedTab => self.shell.set_tab(Tab::Detailed),
            Action::NextTab => self.shell.next_tab(),
            Action::None => {}
        }
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The dashboard page (tests and embedding).
    #[must_use]
    pub fn shell(&self) -> &DashboardShell {
        &self.shell
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = App::new(Config::default());

        assert!(!app.should_quit());
        assert_eq!(app.shell().active_tab(), Tab::Overview);
    }

    #[test]
    fn test_app_handle_quit() {
        let mut app = App::new(Config::default());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_app_handle_help() {
        let mut app = App::new(Config::default());
        assert!(!app.shell().help_visible());

        app.handle_action(Action::Help);
        assert!(app.shell().help_visible());

        app.handle_action(Action::Help);
        assert!(!app.shell().help_visible());
    }

    #[test]
    fn test_app_tab_actions() {
        let mut app = App::new(Config::default());

        app.handle_action(Action::DetailedTab);
        assert_eq!(app.shell().active_tab(), Tab::Detailed);

        app.handle_action(Action::OverviewTab);
        assert_eq!(app.shell().active_tab(), Tab::Overview);

        app.handle_action(Action::NextTab);
        assert_eq!(app.shell().active_tab(), Tab::Detailed);
    }

    #[test]
    fn test_app_with_tab() {
        let app = App::new(Config::default()).with_tab(Tab::Detailed);
        assert_eq!(app.shell().active_tab(), Tab::Detailed);
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(!app.should_quit());
    }
}
