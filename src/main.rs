use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::RulesEngine;
use connect_four::ui::{headless, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Read column numbers from stdin and print boards to stdout instead of
    /// opening the interactive grid
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (overrides logging.file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    init_logging(&config.logging)?;

    if cli.headless {
        let mut engine = RulesEngine::new();
        let stdin = io::stdin();
        headless::run(&mut engine, &config, stdin.lock(), io::stdout().lock())
            .context("headless session failed")?;
        return Ok(());
    }

    run_tui(config).context("terminal session failed")
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(logging.level_filter()).parse_default_env();

    if let Some(path) = &logging.file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("initialising logger")?;
    Ok(())
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
