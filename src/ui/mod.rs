//! Presentation shell: an interactive terminal grid and a line-oriented
//! headless driver, both built on [`crate::game::RulesEngine`].

mod app;
mod game_view;
pub mod headless;

pub use app::App;

use crate::config::PlayersConfig;
use crate::game::GameOutcome;

/// Announcement shown when a game ends.
pub fn outcome_message(players: &PlayersConfig, outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("Player {} won!", players.style(player).name),
        GameOutcome::Tie => "Game is a tie!".to_string(),
        GameOutcome::InProgress => String::new(),
    }
}
