// scheduler.rs - Fixed-period playback timer with a pause gate
//
// The scheduler never reads the clock itself: callers pass `now` in, so the
// same code runs against the wall clock, tokio's paused clock, or a test clock.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No timer installed.
    Idle,
    /// Timer installed and ticks execute.
    Active,
    /// Timer still installed and keeping phase, but ticks are swallowed.
    Suspended,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    period: Duration,
    state: SchedulerState,
    next_due: Option<Instant>,
    // Bumped on every (re)install so drivers can tell timers apart.
    timer_id: u64,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            state: SchedulerState::Idle,
            next_due: None,
            timer_id: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn timer_id(&self) -> u64 {
        self.timer_id
    }

    /// Install a fresh timer. An existing one is replaced, never stacked.
    pub fn start(&mut self, now: Instant) {
        self.timer_id += 1;
        self.next_due = Some(now + self.period);
        self.state = SchedulerState::Active;
        trace!(timer_id = self.timer_id, "timer installed");
    }

    /// Close the gate. The timer keeps running.
    pub fn pause(&mut self) {
        if self.state == SchedulerState::Active {
            self.state = SchedulerState::Suspended;
        }
    }

    /// Reopen the gate without touching the timer phase.
    pub fn resume(&mut self) {
        if self.state == SchedulerState::Suspended {
            self.state = SchedulerState::Active;
        }
    }

    /// Cancel the timer. No tick can fire until the next `start`.
    pub fn stop(&mut self) {
        self.next_due = None;
        self.state = SchedulerState::Idle;
    }

    /// Consume a due deadline, if any. Returns `true` when a tick should run.
    ///
    /// At most one tick fires per call; deadlines missed while the caller was
    /// busy are skipped, keeping the original phase. Suspended timers consume
    /// deadlines without firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let behind = now.duration_since(due).as_nanos() / self.period.as_nanos().max(1);
        let skip = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.period * skip);

        self.state == SchedulerState::Active
    }

    /// Time left until the next deadline, `None` when idle.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
