//! Line-oriented driver: one column number (1-based) per input line.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::config::AppConfig;
use crate::error::EngineError;
use crate::game::{RulesEngine, Turn};

use super::outcome_message;

/// Play games from `input` until it is exhausted or a `q` line is read.
pub fn run<R: BufRead, W: Write>(
    engine: &mut RulesEngine,
    config: &AppConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", engine.board())?;
    prompt(engine, config, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let token = line.trim();
        match token {
            "" => continue,
            "q" => break,
            "r" => {
                engine.restart();
                writeln!(output, "New game started!")?;
                writeln!(output, "{}", engine.board())?;
                prompt(engine, config, &mut output)?;
                continue;
            }
            _ => {}
        }

        let column = match parse_column(token, engine.width()) {
            Some(column) => column,
            None => {
                debug!("rejected input {token:?}");
                writeln!(
                    output,
                    "'{token}' is not a column; enter 1-{}, r or q",
                    engine.width()
                )?;
                continue;
            }
        };

        match engine.play(column) {
            Ok(Turn::ColumnFull) => writeln!(output, "Column is full!")?,
            Ok(Turn::Placed { outcome, .. }) => {
                writeln!(output, "{}", engine.board())?;
                if outcome.is_terminal() {
                    writeln!(output, "{}", outcome_message(&config.players, outcome))?;
                    if config.shell.auto_restart {
                        engine.restart();
                        writeln!(output, "New game started!")?;
                        writeln!(output, "{}", engine.board())?;
                    }
                }
            }
            Err(EngineError::GameOver) => writeln!(output, "Game over! Enter r to restart.")?,
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
        }
        prompt(engine, config, &mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(engine: &RulesEngine, config: &AppConfig, output: &mut W) -> io::Result<()> {
    if !engine.is_over() {
        let style = config.players.style(engine.active_player());
        writeln!(output, "{} to move:", style.name)?;
    }
    Ok(())
}

/// Map a 1-based column label onto a 0-based index on a board `width` wide.
fn parse_column(token: &str, width: usize) -> Option<usize> {
    let label: usize = token.parse().ok()?;
    let column = label.checked_sub(1)?;
    (column < width).then_some(column)
}
