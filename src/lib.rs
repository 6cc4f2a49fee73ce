//! # Connect Four
//!
//! A two-player Connect Four rules engine with a terminal front end built
//! on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, rules engine
//! - [`ui`] — Terminal UI and a headless line-oriented driver
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
