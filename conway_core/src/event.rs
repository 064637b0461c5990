// event.rs - Notifications raised by the session for the presentation layer

use crate::session::SessionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ModeChanged {
        from: SessionMode,
        to: SessionMode,
    },
    /// Every cell died; playback stopped and the grid was cleared.
    GameOver {
        generation: usize,
    },
    /// The latest generation repeats one `period` steps earlier.
    /// Raised once per run; playback continues.
    Oscillating {
        period: usize,
        generation: usize,
    },
}
