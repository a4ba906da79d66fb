use std::fs::File;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use classic_snake::config::Settings;
use classic_snake::cue::{self, CuePlayer, Silent, TerminalBell};
use classic_snake::error::AppError;
use classic_snake::game::Game;
use classic_snake::input::{self, GameInput};
use classic_snake::renderer::{self, RenderContext};
use classic_snake::terminal_runtime::{self, TerminalSession};
use classic_snake::tick::TickGate;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width and height in cells.
    #[arg(long)]
    cell_count: Option<u16>,

    /// Logic tick interval in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell cues.
    #[arg(long)]
    mute: bool,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(cli.log_level.into(), Config::default(), File::create(path)?)?;
    }

    let settings = resolve_settings(&cli)?;
    info!("starting with {settings:?}");

    terminal_runtime::install_panic_hook();
    run(&settings, cli.seed)?;

    info!("exiting");
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, AppError> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if let Some(cell_count) = cli.cell_count {
        settings.cell_count = cell_count;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    if cli.mute {
        settings.sound = false;
    }

    settings.validate()?;
    Ok(settings)
}

fn run(settings: &Settings, seed: Option<u64>) -> Result<(), AppError> {
    let ctx = RenderContext {
        palette: settings.palette()?,
        cell_width: settings.cell_width,
    };
    let mut game = match seed {
        Some(seed) => Game::new_with_seed(settings.cell_count, seed),
        None => Game::new(settings.cell_count),
    };
    let mut player: Box<dyn CuePlayer> = if settings.sound {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    };

    let tick_interval = settings.tick_interval();
    let frame_interval = settings.frame_interval();
    let mut gate = TickGate::new(Instant::now());
    let mut session = TerminalSession::enter()?;

    loop {
        let frame_start = Instant::now();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, &ctx))?;

        for game_input in input::poll_inputs(frame_interval)? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Steer(heading) => {
                    let _ = game.steer(heading);
                }
                GameInput::Restart => {
                    let _ = game.restart();
                }
            }
        }

        if gate.should_tick(tick_interval, Instant::now()) {
            let events = game.update();
            cue::play_events(player.as_mut(), &events);
        }

        if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
