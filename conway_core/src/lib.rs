//! Conway's Game of Life engine: grid, update rule, step history with
//! time travel, a fixed-period playback scheduler, and the session
//! controller that owns them all.
//!
//! The engine draws nothing itself. A [`Renderer`] receives the grid after
//! every state-affecting operation and the caller drains [`SessionEvent`]s
//! for notifications such as game over.

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod scheduler;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::Command;
pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use event::SessionEvent;
pub use grid::Grid;
pub use history::HistoryLog;
pub use render::Renderer;
pub use scheduler::{Scheduler, SchedulerState};
pub use session::{Session, SessionMode};
