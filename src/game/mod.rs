//! Core Connect Four rules: board representation, players, and the rules
//! engine that sequences drops, win and tie checks, and turn changes.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, Placement, HEIGHT, MAX_SIDE, WIDTH};
pub use engine::{GameOutcome, Move, RulesEngine, Turn};
pub use player::Player;
