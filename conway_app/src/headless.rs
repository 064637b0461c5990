// headless.rs - Terminal runner: tokio timers drive the session, no window

use std::time::Instant;

use tracing::info;

use conway_core::{Clock, Grid, LifeConfig, Renderer, Session, SessionEvent};

/// Reads tokio's clock, so paused test time drives the scheduler too.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Counts frames and optionally prints them.
pub struct TerminalRenderer {
    print: bool,
    frames: u64,
}

impl TerminalRenderer {
    pub fn new(print: bool) -> Self {
        Self { print, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, grid: &Grid) {
        self.frames += 1;
        if self.print {
            println!("{grid}");
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub max_generations: usize,
    pub print: bool,
    /// Index into `patterns::PATTERNS`; random fill when absent.
    pub pattern: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell died.
    Extinct,
    /// Stopped at `max_generations` with cells still alive.
    GenerationCap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub generations: usize,
    pub final_live: usize,
    pub repeat_period: Option<usize>,
}

/// Seed, start and poll the session on schedule until it dies out or hits
/// the generation cap.
pub async fn run(
    config: &LifeConfig,
    options: &HeadlessOptions,
) -> conway_core::Result<RunSummary> {
    let renderer = TerminalRenderer::new(options.print);
    let mut session = Session::with_clock(config, renderer, Box::new(TokioClock))?;

    match options.pattern {
        Some(index) => session.apply_pattern(index)?,
        None => session.random_fill()?,
    };
    session.start();

    let mut repeat_period = None;
    while session.generation() < options.max_generations {
        let Some(wait) = session.time_until_next_tick() else {
            break;
        };
        tokio::time::sleep(wait).await;
        if !session.poll() {
            continue;
        }

        for event in session.drain_events() {
            match event {
                SessionEvent::GameOver { generation } => {
                    info!(generation, frames = session.renderer().frames(), "population died out");
                    return Ok(RunSummary {
                        outcome: Outcome::Extinct,
                        generations: generation,
                        final_live: 0,
                        repeat_period,
                    });
                }
                SessionEvent::Oscillating { period, generation } => {
                    info!(period, generation, "pattern settled into a cycle");
                    repeat_period = Some(period);
                }
                SessionEvent::ModeChanged { .. } => {}
            }
        }
    }

    let generations = session.generation();
    let final_live = session.grid().live_count();
    session.stop();
    info!(generations, final_live, frames = session.renderer().frames(), "generation cap reached");
    Ok(RunSummary {
        outcome: Outcome::GenerationCap,
        generations,
        final_live,
        repeat_period,
    })
}
