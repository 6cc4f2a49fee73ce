use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::error::EngineError;
use crate::game::{GameOutcome, RulesEngine, Turn};

use super::outcome_message;

pub struct App {
    engine: RulesEngine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// When the current game reached a win or tie.
    ended_at: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let engine = RulesEngine::new();
        let selected_column = config.shell.start_column.min(engine.width() - 1);
        App {
            engine,
            config,
            selected_column,
            should_quit: false,
            message: None,
            ended_at: None,
        }
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Start a new game once the end-of-game pause has run out
    pub fn tick(&mut self, now: Instant) {
        let Some(ended_at) = self.ended_at else {
            return;
        };
        if !self.config.shell.auto_restart {
            return;
        }
        let delay = Duration::from_millis(self.config.shell.end_game_delay_ms);
        if now.duration_since(ended_at) >= delay {
            self.new_game();
            if let Some(msg) = self.message.as_mut() {
                msg.push_str(" New game started!");
            }
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.new_game();
                self.message = Some("New game started!".to_string());
            }
            // The outcome stays on screen until the game is reset.
            _ if self.ended_at.is_some() => {}
            KeyCode::Left => {
                self.message = None;
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.drop_piece();
            }
            KeyCode::Char(c) => {
                // Digit keys pick a column directly, like clicking its top cell.
                if let Some(col) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if col < self.engine.width() {
                        self.selected_column = col;
                        self.drop_piece();
                    }
                }
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.engine.restart();
        self.ended_at = None;
        self.selected_column = self.config.shell.start_column.min(self.engine.width() - 1);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.message = None;

        match self.engine.play(self.selected_column) {
            Ok(Turn::Placed { outcome, .. }) => {
                if outcome.is_terminal() {
                    self.message = Some(outcome_message(&self.config.players, outcome));
                    self.ended_at = Some(Instant::now());
                }
            }
            Ok(Turn::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(EngineError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                warn!("rejected drop: {err}");
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.config.players,
            self.selected_column,
            self.message.as_deref(),
        );
    }

    /// Whether the shown game has finished
    pub fn is_game_over(&self) -> bool {
        self.engine.outcome() != GameOutcome::InProgress
    }
}
