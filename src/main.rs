//! Flappy Gates headless driver
//!
//! Stands in for the frame scheduler and input source: runs the simulation on
//! autopilot for a fixed number of ticks and logs what happens. Use
//! `RUST_LOG=info` (or `debug`) to see the event stream.

use std::path::PathBuf;

use clap::Parser;
use flappy_gates::persistence::JsonFileStore;
use flappy_gates::sim::GameEvent;
use flappy_gates::{ConfigError, Game, Settings, SpeedPreset};

#[derive(Parser, Debug)]
#[command(name = "flappy-gates")]
#[command(about = "Run the Flappy Gates simulation headless on autopilot")]
struct Cli {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,

    /// Seed for gap placement
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Settings JSON file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Best-score file
    #[arg(long, default_value = "flappy_best.json")]
    store: PathBuf,

    /// Speed preset: desktop or touch
    #[arg(long)]
    preset: Option<SpeedPreset>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    log::info!("Flappy Gates (headless) starting: {:?}", cli);

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if let Some(preset) = cli.preset {
        settings.apply_preset(preset);
    }

    let store = JsonFileStore::new(&cli.store);
    let mut game = Game::with_seed(settings, store, cli.seed)?;

    let mut runs = 0u32;
    let mut total_score = 0u64;
    for _ in 0..cli.ticks {
        if game.session().is_over() {
            game.impulse();
        }
        game.autopilot();

        for event in game.tick() {
            match event {
                GameEvent::Crashed { cause } => {
                    runs += 1;
                    total_score += u64::from(game.session().score);
                    log::info!(
                        "Run {} over: {:?}, score {}",
                        runs,
                        cause,
                        game.session().score
                    );
                }
                GameEvent::NewBest { score } => log::info!("New best: {}", score),
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                _ => {}
            }
        }
    }

    println!(
        "{} ticks, {} finished runs, average score {:.1}, best score {}",
        cli.ticks,
        runs,
        if runs == 0 {
            0.0
        } else {
            total_score as f64 / f64::from(runs)
        },
        game.best_score()
    );
    Ok(())
}
