// ui.rs - egui front end: controls, grid painting, click-to-toggle

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use conway_core::patterns;
use conway_core::{Command, SessionMode};

use crate::app::{GameOfLife, Notice};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance if a tick is due
        if self.session.poll() {
            self.handle_events();
        }

        let mode = self.session.mode();
        let editable = self.session.is_editable();
        let mut commands = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Playback controls
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editable, egui::Button::new("▶ Start"))
                    .clicked()
                {
                    commands.push(Command::Start);
                }

                let pause_text = if mode == SessionMode::Paused {
                    "⏵ Resume"
                } else {
                    "⏸ Pause"
                };
                if ui
                    .add_enabled(!editable, egui::Button::new(pause_text))
                    .clicked()
                {
                    commands.push(Command::TogglePause);
                }

                if ui
                    .add_enabled(!editable, egui::Button::new("⏹ Stop"))
                    .clicked()
                {
                    commands.push(Command::Stop);
                }

                ui.separator();

                if ui
                    .add_enabled(self.session.can_step_back(), egui::Button::new("⏮ Step Back"))
                    .clicked()
                {
                    commands.push(Command::StepBackward);
                }
                if ui
                    .add_enabled(
                        self.session.can_step_forward(),
                        egui::Button::new("⏭ Step Forward"),
                    )
                    .clicked()
                {
                    commands.push(Command::StepForward);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.separator();

            // Seeding
            ui.add_enabled_ui(editable, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("🎲 Random").clicked() {
                        commands.push(Command::RandomFill);
                    }
                    if ui.button("🗑 Clear").clicked() {
                        commands.push(Command::Clear);
                    }

                    ui.separator();

                    ui.label("Pattern:");
                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                        .show_ui(ui, |ui| {
                            for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                            }
                        });

                    if ui.button("Apply Pattern").clicked() {
                        commands.push(Command::ApplyPattern(self.selected_pattern));
                    }
                });
            });

            // Size and colors
            ui.horizontal(|ui| {
                ui.add_enabled_ui(mode != SessionMode::Running, |ui| {
                    ui.label("Cols:");
                    ui.add(egui::TextEdit::singleline(&mut self.cols_input).desired_width(40.0));
                    ui.label("Rows:");
                    ui.add(egui::TextEdit::singleline(&mut self.rows_input).desired_width(40.0));
                    if ui.button("Apply Size").clicked() {
                        commands.push(Command::ApplySize {
                            cols: self.cols_input.clone(),
                            rows: self.rows_input.clone(),
                        });
                    }
                });

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Draw the last rendered frame
            let frame = self.session.renderer().frame();
            let cell = self.cell_size;
            let total_size = Vec2::new(frame.cols() as f32 * cell, frame.rows() as f32 * cell);

            egui::ScrollArea::both().show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
                let origin = response.rect.min;

                for (row, cells) in frame.row_slices().enumerate() {
                    for (col, &alive) in cells.iter().enumerate() {
                        let rect = Rect::from_min_size(
                            egui::pos2(origin.x + col as f32 * cell, origin.y + row as f32 * cell),
                            Vec2::splat(cell),
                        );
                        let cell_color = if alive { self.live_color } else { self.dead_color };
                        painter.rect_filled(rect, 0.0, cell_color);
                        painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::from_gray(60)));
                    }
                }

                // Editing clicks only
                if editable && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some((row, col)) = self.cell_at(pos.x - origin.x, pos.y - origin.y) {
                            commands.push(Command::ToggleCell { row, col });
                        }
                    }
                }
            });

            ui.separator();

            // Statistics for the displayed frame
            let total = (frame.rows() * frame.cols()).max(1);
            let live_cells = frame.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", frame.population() * 100.0));
                ui.label(format!("Mode: {}", mode));
                ui.label(format!("Frames: {}", self.session.renderer().frames_drawn()));
            });
            if let Some(status) = &self.status {
                ui.label(status.as_str());
            }
        });

        for command in commands {
            self.run_command(command);
        }

        self.show_notice(ctx);

        // Keep ticking while the scheduler has a deadline
        if let Some(wait) = self.session.time_until_next_tick() {
            ctx.request_repaint_after(wait);
        }
    }
}

impl GameOfLife {
    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let (title, text) = match notice {
            Notice::GameOver { generation } => (
                "Game Over",
                format!("All cells died after {generation} generations."),
            ),
            Notice::Invalid(message) => ("Invalid input", message.clone()),
        };

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(text);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}
