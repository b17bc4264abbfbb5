// ui.rs - Toolbar, board and statistics; the simulation itself runs in the driver task

use std::time::Duration;

use eframe::egui;
use egui::Frame;

use crate::board::Board;
use crate::driver::Command;
use crate::{GameOfLife, patterns};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let status = self.driver.status();

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.driver.send(Command::ToggleRunning);
        }

        let panel = Frame::central_panel(&ctx.style()).fill(self.settings.bg_color);
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if status.running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.driver.send(if status.running { Command::Pause } else { Command::Start });
                }

                if ui.add_enabled(!status.running, egui::Button::new("⏭ Step")).clicked() {
                    self.driver.send(Command::Step);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.driver.send(Command::Clear);
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.driver.send(Command::ApplyPattern(self.selected_pattern));
                }

                ui.separator();

                ui.label(format!("Generation: {}", status.generation));
                if status.cycle_detected {
                    ui.label("(cycle detected)");
                }
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.delay.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.delay = Duration::from_millis((1000.0 / speed) as u64);
                    self.driver.send(Command::SetDelay(self.delay));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them alive/dead. Use Start/Pause (or Space) to run the simulation.");
            ui.separator();

            ui.add(Board {
                grid: &self.grid,
                cell_size: self.settings.cell_size,
                spacing: self.settings.spacing,
                live_color: self.live_color,
                dead_color: self.dead_color,
            });

            ui.separator();

            // Statistics
            let (live_cells, total) = self.grid.read(|grid| (grid.population(), grid.len()));
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        // The driver ticks on its own; keep repainting so its generations show up.
        if status.running {
            ctx.request_repaint_after(self.delay);
        }
    }
}
