use anyhow::Context;
use clap::Parser;
use scribbleboard::draw::PcgScatter;
use scribbleboard::export::ExportOutcome;
use scribbleboard::input::{InputEvent, parse_script};
use scribbleboard::{Board, Config};
use std::fs;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SCRIBBLEBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "scribbleboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand drawing board that replays recorded pointer input"
)]
struct Cli {
    /// Input script to replay (one event per line)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Configuration file (defaults to ~/.config/scribbleboard/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Viewport size the board is laid out in
    #[arg(long, value_name = "WxH", default_value = "1280x800", value_parser = parse_viewport)]
    viewport: (u32, u32),

    /// Write the final drawing to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Seed for spray scatter (random when omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn parse_viewport(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let events = parse_script(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let (viewport_width, viewport_height) = cli.viewport;
    let mut board = Board::for_viewport(&config, viewport_width, viewport_height)
        .context("Failed to create drawing surface")?;
    if let Some(seed) = cli.seed {
        board = board.with_scatter(PcgScatter::with_seed(seed));
    }

    log::info!(
        "Replaying {} events on a {}x{} surface",
        events.len(),
        board.canvas.width(),
        board.canvas.height()
    );

    for event in events {
        match event {
            InputEvent::Action(action) => {
                if let Some(outcome) = board.handle_action(action) {
                    report(&outcome);
                }
            }
            other => board.handle_event(other),
        }
    }

    if let Some(output) = &cli.output {
        let png = board.canvas.to_png().context("Failed to encode drawing")?;
        fs::write(output, png)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}

fn report(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Saved(path) => println!("Saved {}", path.display()),
        ExportOutcome::Shared => println!("Shared drawing"),
        // Already surfaced through the notifier or the log
        ExportOutcome::Unsupported | ExportOutcome::Failed(_) => {}
    }
}
