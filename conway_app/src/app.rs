// app.rs - GUI application state wrapped around a session

use eframe::egui;
use egui::Color32;
use tracing::{error, info};

use conway_core::{Command, LifeConfig, Session, SessionEvent};

use crate::canvas::Canvas;

/// Message shown in a floating window until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    GameOver { generation: usize },
    Invalid(String),
}

pub struct GameOfLife {
    pub session: Session<Canvas>,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub cell_size: f32,
    pub selected_pattern: usize,
    pub cols_input: String,
    pub rows_input: String,
    pub notice: Option<Notice>,
    pub status: Option<String>,
}

pub fn run_gui(config: LifeConfig) -> anyhow::Result<()> {
    let app = GameOfLife::new(&config)?;

    let grid_w = config.grid.cols as f32 * config.display.cell_size;
    let grid_h = config.grid.rows as f32 * config.display.cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([grid_w.max(640.0) + 40.0, grid_h + 260.0]),
        ..Default::default()
    };

    info!("starting GUI");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl GameOfLife {
    pub fn new(config: &LifeConfig) -> conway_core::Result<Self> {
        let canvas = Canvas::new(config.grid.rows, config.grid.cols);
        Ok(Self {
            session: Session::new(config, canvas)?,
            live_color: color(config.display.live_color),
            dead_color: color(config.display.dead_color),
            cell_size: config.display.cell_size,
            selected_pattern: 0,
            cols_input: config.grid.cols.to_string(),
            rows_input: config.grid.rows.to_string(),
            notice: None,
            status: None,
        })
    }

    /// Send one input event to the session and surface what came of it.
    pub fn run_command(&mut self, command: Command) {
        match self.session.dispatch(command) {
            Ok(_) => {}
            Err(e) if e.is_user_facing() => self.notice = Some(Notice::Invalid(e.to_string())),
            Err(e) => error!("command failed: {e}"),
        }
        self.handle_events();
    }

    pub fn handle_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::GameOver { generation } => {
                    self.status = None;
                    self.notice = Some(Notice::GameOver { generation });
                }
                SessionEvent::Oscillating { period, generation } => {
                    self.status = Some(format!(
                        "Repeating with period {period} since generation {generation}"
                    ));
                }
                SessionEvent::ModeChanged { .. } => {}
            }
        }
    }

    /// Grid cell under a point given relative to the grid's top-left corner.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        self.session.grid().in_bounds(row, col).then_some((row, col))
    }
}
