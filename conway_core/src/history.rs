// history.rs - Linear step history with a cursor for time travel

use tracing::trace;

use crate::grid::Grid;

/// How far back `repeat_period` looks for a matching generation.
pub const REPEAT_WINDOW: usize = 10;

/// Ordered grid snapshots plus a cursor.
///
/// Index is the step number. Recording while the cursor is behind the tail
/// drops the abandoned future first, so history is always a single line.
/// Grids are cloned on the way in and on the way out.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    entries: Vec<Grid>,
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and start over with `initial` at step 0.
    pub fn reset(&mut self, initial: &Grid) {
        self.entries.clear();
        self.entries.push(initial.clone());
        self.cursor = Some(0);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Append a snapshot after the cursor, discarding any entries past it.
    pub fn record(&mut self, grid: &Grid) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            trace!(dropped = self.entries.len() - keep, "history diverged");
            self.entries.truncate(keep);
        }
        self.entries.push(grid.clone());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move the cursor back one step. `None` when already at step 0 or empty.
    pub fn step_back(&mut self) -> Option<Grid> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                Some(self.entries[c - 1].clone())
            }
            _ => None,
        }
    }

    /// Move the cursor forward one step. `None` when already at the tail or empty.
    pub fn step_forward(&mut self) -> Option<Grid> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                Some(self.entries[c + 1].clone())
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position; `-1` when empty.
    pub fn current_step(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn at_tail(&self) -> bool {
        self.cursor.map_or(true, |c| c + 1 == self.entries.len())
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_step_forward(&self) -> bool {
        !self.at_tail()
    }

    /// Snapshot at `step`, borrowed.
    pub fn entry(&self, step: usize) -> Option<&Grid> {
        self.entries.get(step)
    }

    pub fn current(&self) -> Option<&Grid> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// If the entry under the cursor repeats one of the previous
    /// `REPEAT_WINDOW` entries, the distance to the closest repeat.
    pub fn repeat_period(&self) -> Option<usize> {
        let c = self.cursor?;
        let latest = &self.entries[c];
        (1..=REPEAT_WINDOW.min(c)).find(|&back| self.entries[c - back] == *latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(n: usize) -> Grid {
        // distinct grid per step number
        Grid::from_fn(1, 16, |_, col| col < n)
    }

    fn log_with(len: usize) -> HistoryLog {
        let mut log = HistoryLog::new();
        log.reset(&marked(0));
        for n in 1..len {
            log.record(&marked(n));
        }
        log
    }

    #[test]
    fn empty_log_has_no_cursor() {
        let mut log = HistoryLog::new();
        assert_eq!(log.current_step(), -1);
        assert!(log.step_back().is_none());
        assert!(log.step_forward().is_none());
        assert!(log.current().is_none());
    }

    #[test]
    fn reset_keeps_single_entry() {
        let mut log = log_with(5);
        log.reset(&marked(9));
        assert_eq!(log.len(), 1);
        assert_eq!(log.current_step(), 0);
        assert_eq!(log.current(), Some(&marked(9)));
    }

    #[test]
    fn record_advances_cursor_to_tail() {
        let log = log_with(4);
        assert_eq!(log.len(), 4);
        assert_eq!(log.current_step(), 3);
        assert!(log.at_tail());
    }

    #[test]
    fn step_back_stops_at_zero() {
        let mut log = log_with(3);
        assert_eq!(log.step_back(), Some(marked(1)));
        assert_eq!(log.step_back(), Some(marked(0)));
        assert_eq!(log.step_back(), None);
        assert_eq!(log.current_step(), 0);
    }

    #[test]
    fn step_forward_stops_at_tail() {
        let mut log = log_with(3);
        assert_eq!(log.step_forward(), None);
        log.step_back();
        assert_eq!(log.step_forward(), Some(marked(2)));
        assert_eq!(log.step_forward(), None);
    }

    #[test]
    fn record_after_step_back_discards_future() {
        let mut log = log_with(6);
        log.step_back();
        log.step_back();
        log.step_back();
        assert_eq!(log.current_step(), 2);

        log.record(&marked(12));
        assert_eq!(log.len(), 4);
        assert_eq!(log.current_step(), 3);
        assert!(log.step_forward().is_none());
        assert_eq!(log.entry(3), Some(&marked(12)));
    }

    #[test]
    fn returned_grids_are_copies() {
        let mut log = log_with(3);
        let mut back = log.step_back().unwrap();
        back.toggle(0, 15).unwrap();
        assert_eq!(log.current(), Some(&marked(1)));
    }

    #[test]
    fn repeat_period_finds_oscillation() {
        let mut log = HistoryLog::new();
        log.reset(&marked(1));
        log.record(&marked(2));
        assert_eq!(log.repeat_period(), None);
        log.record(&marked(1));
        assert_eq!(log.repeat_period(), Some(2));
        log.record(&marked(1));
        assert_eq!(log.repeat_period(), Some(1));
    }
}
