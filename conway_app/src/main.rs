// main.rs - Conway's Game of Life with step history
//
// Runs the egui window by default, or a terminal-only simulation with
// `--headless`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conway_core::{LifeConfig, patterns};

mod app;
mod canvas;
mod headless;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "conway.toml")]
    config: PathBuf,

    /// Grid rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Seed for random fill (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Headless: stop after this many generations
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Headless: start from a named pattern instead of a random fill
    #[arg(long)]
    pattern: Option<String>,

    /// Headless: print every rendered frame
    #[arg(long)]
    print: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(args: &Args) -> Result<LifeConfig> {
    let mut config = LifeConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.grid.cols = cols;
    }
    if args.seed.is_some() {
        config.seeding.seed = args.seed;
    }
    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    if !args.headless {
        return app::run_gui(config);
    }

    let pattern = match &args.pattern {
        Some(name) => Some(
            patterns::index_of(name).with_context(|| format!("unknown pattern {name:?}"))?,
        ),
        None => None,
    };
    let options = headless::HeadlessOptions {
        max_generations: args.generations,
        print: args.print,
        pattern,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(headless::run(&config, &options))?;
    println!(
        "{:?} after {} generations, {} live cells{}",
        summary.outcome,
        summary.generations,
        summary.final_live,
        summary
            .repeat_period
            .map(|p| format!(", cycling with period {p}"))
            .unwrap_or_default(),
    );
    Ok(())
}
