//! Snake 2D entry point
//!
//! Parses options, sets up logging and runs the fixed-rate game loop in the
//! terminal.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use snake2d::persistence::FileStore;
use snake2d::platform::{FixedStep, input};
use snake2d::renderer::TerminalRenderer;
use snake2d::{Game, Settings};

/// Classic Snake in the terminal
#[derive(Debug, Parser)]
#[command(name = "snake2d", version, about)]
struct Args {
    /// Settings file (JSON); missing files fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Window title
    #[arg(long)]
    title: Option<String>,
    /// Window width in pixels
    #[arg(long)]
    width: Option<i32>,
    /// Window height in pixels
    #[arg(long)]
    height: Option<i32>,
    /// Size the arena to the whole terminal
    #[arg(long)]
    fullscreen: bool,
    /// High score file
    #[arg(long)]
    score_file: Option<PathBuf>,
    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Log destination (default: snake2d.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Write the effective settings to --config and exit
    #[arg(long, requires = "config")]
    write_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;
    log::info!("Snake 2D starting...");

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    apply_overrides(&mut settings, &args)?;
    settings.validate().context("invalid settings")?;

    if args.write_config {
        if let Some(path) = &args.config {
            settings.save(path)?;
            println!("Settings written to {}", path.display());
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    run(&settings, seed)
}

/// Route `log` to a file; the terminal belongs to the game
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("snake2d.log"));
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn apply_overrides(settings: &mut Settings, args: &Args) -> Result<()> {
    if let Some(title) = &args.title {
        settings.title = title.clone();
    }
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(path) = &args.score_file {
        settings.score_file = path.clone();
    }
    settings.fullscreen |= args.fullscreen;

    if settings.fullscreen && !args.write_config {
        let (cols, rows) =
            TerminalRenderer::fullscreen_cells().context("cannot read terminal size")?;
        let margin = 2 * settings.border_size / settings.cell_size.max(1);
        settings.fit_cells(cols + margin, rows + margin);
        log::info!("Fullscreen arena: {}x{} cells", cols, rows);
    }
    Ok(())
}

fn run(settings: &Settings, seed: u64) -> Result<()> {
    let store = FileStore::new(&settings.score_file);
    log::info!("High score file: {}", store.path().display());
    let mut game = Game::new(settings, store, seed);

    let mut renderer = TerminalRenderer::new();
    renderer
        .setup(&settings.title)
        .context("failed to set up terminal")?;
    renderer.draw(&game.state().snapshot())?;

    let mut clock = FixedStep::new(settings.tick_interval());
    log::info!(
        "Snake 2D running at {} Hz ({:?} per tick)",
        settings.tick_hz,
        clock.interval()
    );

    while game.is_running() {
        let events = input::collect_until(&clock)?;
        clock.advance(Instant::now());

        let (snapshot, events) = game.step(events);
        for event in &events {
            log::debug!("{:?}", event);
        }
        renderer.draw(&snapshot)?;
    }

    renderer.restore()?;
    Ok(())
}
