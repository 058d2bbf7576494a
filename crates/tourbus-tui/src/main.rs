//! Smart Tourist Bus console - terminal front end
//!
//! Passengers get the home screen and online help; drivers, employees and
//! administrators log in to reach the vehicle dashboards.

use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tourbus_core::SessionAuthority;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tourbus_tui::app::{ConfigError, TuiConfig};
use tourbus_tui::ui::components::notification::Notification;
use tourbus_tui::App;

#[derive(Parser, Debug)]
#[command(name = "tourbus-tui", version, about = "Smart Tourist Bus console")]
struct Cli {
    /// Config file (defaults to the XDG config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the telemetry simulations
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    init_config: bool,
}

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = TuiConfig::load_or_default(cli.config.as_deref());
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file.clone();
    }

    if cli.init_config {
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        return Ok(());
    }

    init_logging(&config)?;
    if let Some(err) = &config_error {
        tracing::warn!(error = %err, "Using default configuration");
    }

    // Restore the terminal before the default hook prints
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(seed = ?config.seed, "Starting console");
    let result = run_app(config, config_error);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Log to a file; stdout belongs to the terminal UI
fn init_logging(config: &TuiConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive("tourbus_tui=info".parse()?))
        .init();

    Ok(())
}

/// Main application runner
fn run_app(config: TuiConfig, config_error: Option<ConfigError>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, SessionAuthority::default());
    if config_error.is_some() {
        app.notifications.push(Notification::error(
            "Μη έγκυρες ρυθμίσεις, χρήση προεπιλογών.",
        ));
    }
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
