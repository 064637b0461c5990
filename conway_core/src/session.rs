// session.rs - Session controller: owns the live grid, history and scheduler
//
// Mode machine:
//   Editing --start--> Running <--pause/resume--> Paused
//   Running/Paused --stop or game over--> Editing
//
// Commands that are not allowed in the current mode are ignored and report
// `false`; only bad coordinates and bad user input produce errors.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::command::Command;
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::event::SessionEvent;
use crate::grid::Grid;
use crate::history::HistoryLog;
use crate::patterns;
use crate::render::Renderer;
use crate::rules;
use crate::scheduler::{Scheduler, SchedulerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMode {
    /// Cells editable, size changeable, no playback.
    Editing,
    /// Playback active, grid locked.
    Running,
    /// Playback suspended mid-run, grid locked, resumable.
    Paused,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Editing => "editing",
            Self::Running => "running",
            Self::Paused => "paused",
        })
    }
}

pub struct Session<R: Renderer> {
    grid: Grid,
    history: HistoryLog,
    scheduler: Scheduler,
    mode: SessionMode,
    renderer: R,
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
    density: f64,
    max_dimension: usize,
    events: VecDeque<SessionEvent>,
    oscillation_reported: bool,
}

impl<R: Renderer> Session<R> {
    /// Session on the wall clock.
    pub fn new(config: &LifeConfig, renderer: R) -> Result<Self> {
        Self::with_clock(config, renderer, Box::new(SystemClock))
    }

    pub fn with_clock(config: &LifeConfig, renderer: R, clock: Box<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let rng = match config.seeding.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut session = Self {
            grid: Grid::new(config.grid.rows, config.grid.cols),
            history: HistoryLog::new(),
            scheduler: Scheduler::new(config.tick_period()),
            mode: SessionMode::Editing,
            renderer,
            clock,
            rng,
            density: config.seeding.density,
            max_dimension: config.grid.max_dimension,
            events: VecDeque::new(),
            oscillation_reported: false,
        };
        session.render();
        Ok(session)
    }

    // ---- accessors -------------------------------------------------------

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// Step number under the history cursor, 0 before any run.
    pub fn generation(&self) -> usize {
        self.history.cursor().unwrap_or(0)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_editable(&self) -> bool {
        self.mode == SessionMode::Editing
    }

    pub fn can_step_back(&self) -> bool {
        self.mode != SessionMode::Running && self.history.can_step_back()
    }

    pub fn can_step_forward(&self) -> bool {
        self.mode != SessionMode::Running && self.history.can_step_forward()
    }

    /// How long a driver may sleep before the next tick is due.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.scheduler.time_until_next(self.clock.now())
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    // ---- commands --------------------------------------------------------

    /// Route an input event to the matching operation. `Ok(false)` means the
    /// command was not permitted in the current mode or had nothing to do.
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        debug!(command = command.name(), mode = %self.mode, "dispatch");
        match command {
            Command::ToggleCell { row, col } => self.toggle_cell(row, col),
            Command::Start => Ok(self.start()),
            Command::TogglePause => Ok(self.toggle_pause()),
            Command::Stop => Ok(self.stop()),
            Command::ApplySize { cols, rows } => self.resize_from_text(&cols, &rows),
            Command::StepBackward => Ok(self.step_back()),
            Command::StepForward => Ok(self.step_forward()),
            Command::RandomFill => self.random_fill(),
            Command::ApplyPattern(index) => self.apply_pattern(index),
            Command::Clear => Ok(self.clear()),
        }
    }

    /// Flip a cell. Editing only.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        if !self.permitted("toggle-cell", &[SessionMode::Editing]) {
            return Ok(false);
        }
        self.grid.toggle(row, col)?;
        self.render();
        Ok(true)
    }

    /// Replace the grid with an all-dead one of the new size and clear history.
    ///
    /// Refused while running. From `Paused` the run is abandoned first.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<bool> {
        if !self.permitted("resize", &[SessionMode::Editing, SessionMode::Paused]) {
            return Ok(false);
        }
        let rows = self.check_dimension("rows", rows)?;
        let cols = self.check_dimension("cols", cols)?;

        if self.mode == SessionMode::Paused {
            self.scheduler.stop();
            self.set_mode(SessionMode::Editing);
        }
        self.grid = Grid::new(rows, cols);
        self.history.clear();
        info!(rows, cols, "grid resized");
        self.render();
        Ok(true)
    }

    /// `resize` from the raw text of the two size inputs.
    pub fn resize_from_text(&mut self, cols_text: &str, rows_text: &str) -> Result<bool> {
        if !self.permitted("resize", &[SessionMode::Editing, SessionMode::Paused]) {
            return Ok(false);
        }
        let cols = parse_dimension("cols", cols_text)?;
        let rows = parse_dimension("rows", rows_text)?;
        self.resize(rows, cols)
    }

    /// Begin playback from the current grid, which becomes history step 0.
    pub fn start(&mut self) -> bool {
        if !self.permitted("start", &[SessionMode::Editing]) {
            return false;
        }
        self.history.reset(&self.grid);
        self.oscillation_reported = false;
        self.scheduler.start(self.clock.now());
        info!(
            live = self.grid.live_count(),
            period = ?self.scheduler.period(),
            "simulation started"
        );
        self.set_mode(SessionMode::Running);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.permitted("pause", &[SessionMode::Running]) {
            return false;
        }
        self.scheduler.pause();
        self.set_mode(SessionMode::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.permitted("resume", &[SessionMode::Paused]) {
            return false;
        }
        self.scheduler.resume();
        self.set_mode(SessionMode::Running);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            SessionMode::Running => self.pause(),
            SessionMode::Paused => self.resume(),
            SessionMode::Editing => {
                debug!("toggle-pause ignored while editing");
                false
            }
        }
    }

    /// End playback, clear the grid and return to editing. History is kept
    /// so the run can still be stepped through.
    pub fn stop(&mut self) -> bool {
        if !self.permitted("stop", &[SessionMode::Running, SessionMode::Paused]) {
            return false;
        }
        self.scheduler.stop();
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.render();
        info!(generation = self.generation(), "simulation stopped");
        self.set_mode(SessionMode::Editing);
        true
    }

    /// Random fill at the configured density.
    pub fn random_fill(&mut self) -> Result<bool> {
        self.random_fill_with_density(self.density)
    }

    /// Every cell alive independently with probability `density`. History is
    /// reset to the new grid. Editing only.
    pub fn random_fill_with_density(&mut self, density: f64) -> Result<bool> {
        if !self.permitted("random-fill", &[SessionMode::Editing]) {
            return Ok(false);
        }
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let grid = patterns::random_grid(rows, cols, density, &mut self.rng)?;
        info!(density, live = grid.live_count(), "random fill");
        self.replace_seed(grid);
        Ok(true)
    }

    /// Centre a preset from `patterns::PATTERNS` on an otherwise empty grid.
    pub fn apply_pattern(&mut self, index: usize) -> Result<bool> {
        if !self.permitted("apply-pattern", &[SessionMode::Editing]) {
            return Ok(false);
        }
        let pattern = patterns::PATTERNS
            .get(index)
            .ok_or_else(|| LifeError::validation(format!("no pattern at index {index}")))?;
        info!(pattern = pattern.name, "pattern applied");
        let seed = patterns::apply_pattern(self.grid.rows(), self.grid.cols(), pattern)?;
        self.replace_seed(seed);
        Ok(true)
    }

    /// Kill every cell. Editing only.
    pub fn clear(&mut self) -> bool {
        if !self.permitted("clear", &[SessionMode::Editing]) {
            return false;
        }
        self.replace_seed(Grid::new(self.grid.rows(), self.grid.cols()));
        true
    }

    /// Move one step back in history. Not while running.
    pub fn step_back(&mut self) -> bool {
        if !self.permitted("step-backward", &[SessionMode::Editing, SessionMode::Paused]) {
            return false;
        }
        match self.history.step_back() {
            Some(grid) => {
                self.grid = grid;
                self.render();
                true
            }
            None => false,
        }
    }

    /// Move one step forward in history. Not while running.
    pub fn step_forward(&mut self) -> bool {
        if !self.permitted("step-forward", &[SessionMode::Editing, SessionMode::Paused]) {
            return false;
        }
        match self.history.step_forward() {
            Some(grid) => {
                self.grid = grid;
                self.render();
                true
            }
            None => false,
        }
    }

    // ---- playback --------------------------------------------------------

    /// Run a tick if the scheduler says one is due. Returns whether a
    /// generation was computed.
    pub fn poll(&mut self) -> bool {
        if !self.scheduler.poll(self.clock.now()) {
            return false;
        }
        self.tick();
        true
    }

    // Render, advance, record, then check for extinction. In that order.
    fn tick(&mut self) {
        self.render();
        self.grid = rules::step(&self.grid);
        self.history.record(&self.grid);
        let generation = self.generation();
        trace!(generation, live = self.grid.live_count(), "tick");

        if self.grid.is_extinct() {
            self.game_over(generation);
            return;
        }

        if !self.oscillation_reported {
            if let Some(period) = self.history.repeat_period() {
                debug!(period, generation, "pattern is repeating");
                self.oscillation_reported = true;
                self.events.push_back(SessionEvent::Oscillating { period, generation });
            }
        }
    }

    fn game_over(&mut self, generation: usize) {
        self.scheduler.stop();
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.render();
        info!(generation, "Game Over");
        self.set_mode(SessionMode::Editing);
        self.events.push_back(SessionEvent::GameOver { generation });
    }

    // ---- internals -------------------------------------------------------

    fn permitted(&self, action: &str, modes: &[SessionMode]) -> bool {
        let ok = modes.contains(&self.mode);
        if !ok {
            debug!(action, mode = %self.mode, "ignored in current mode");
        }
        ok
    }

    fn replace_seed(&mut self, grid: Grid) {
        self.grid = grid;
        self.history.reset(&self.grid);
        self.render();
    }

    fn set_mode(&mut self, to: SessionMode) {
        let from = self.mode;
        if from != to {
            info!(%from, %to, "mode changed");
            self.mode = to;
            self.events.push_back(SessionEvent::ModeChanged { from, to });
        }
    }

    fn render(&mut self) {
        self.renderer.render(&self.grid);
    }

    fn check_dimension(&self, name: &str, value: i64) -> Result<usize> {
        match usize::try_from(value) {
            Ok(v) if v > 0 && v <= self.max_dimension => Ok(v),
            _ => Err(LifeError::validation(format!(
                "{name} must be between 1 and {}, got {value}",
                self.max_dimension
            ))),
        }
    }
}

fn parse_dimension(name: &str, text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        LifeError::validation(format!("{name} must be a positive whole number, got {text:?}"))
    })
}
