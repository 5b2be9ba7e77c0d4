// ui.rs - egui front end for the chart editor

use eframe::egui;
use egui::{Color32, PointerButton, Pos2, Rect, RichText, Stroke, Vec2};
use round_chart::geometry::{MAX_DIMENSION, MIN_DIMENSION};
use round_chart::palette::{self, PALETTE};
use round_chart::PaintMode;

use crate::{ChartApp, Status, to_color32};

const SWATCH_SIZE: Vec2 = Vec2::new(96.0, 40.0);

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Round Chart");

            self.controls(ui);
            ui.separator();
            self.palette(ui);
            ui.separator();

            if let Some(status) = &self.status {
                match status {
                    Status::Info(text) => ui.label(text),
                    Status::Error(text) => ui.colored_label(Color32::from_rgb(200, 40, 40), text),
                };
                ui.separator();
            }

            ui.label("Left click or drag to paint, right click to erase a cell.");

            egui::ScrollArea::both().show(ui, |ui| {
                self.chart(ui);
            });
        });

        if self.confirm_clear {
            self.clear_dialog(ctx);
        }
    }
}

impl ChartApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            let mut mode = self.state.paint_mode();
            ui.radio_value(&mut mode, PaintMode::Cell, "Cell");
            ui.radio_value(&mut mode, PaintMode::Round, "Round");
            if mode != self.state.paint_mode() {
                self.state.set_paint_mode(mode);
            }

            ui.separator();

            // Not clamped: out-of-range sizes are rejected with a message
            ui.label("Width:");
            ui.add(egui::DragValue::new(&mut self.width_input).speed(0.2));
            ui.label("Height:");
            ui.add(egui::DragValue::new(&mut self.height_input).speed(0.2));
            if ui.button("Resize").clicked() {
                self.apply_resize();
            }
            ui.label(format!("({MIN_DIMENSION}-{MAX_DIMENSION})"));

            ui.separator();

            if ui.button("⏹ Clear").clicked() {
                self.confirm_clear = true;
            }
            if ui.button("💾 Save PNG").clicked() {
                self.export_png();
            }
        });

        ui.horizontal(|ui| {
            let style = self.state.style_mut();
            let mut changed = ui.checkbox(&mut style.border.enabled, "Border").changed();
            ui.add_enabled_ui(style.border.enabled, |ui| {
                changed |= ui
                    .add(egui::Slider::new(&mut style.border.width_multiplier, 0.2..=3.0).text("× cell"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut style.border.corner_radius, 0..=40).text("corner px"))
                    .changed();
            });
            if changed {
                self.mark_dirty();
            }
        });
    }

    fn palette(&mut self, ui: &mut egui::Ui) {
        let current = self.state.current_color();

        ui.horizontal(|ui| {
            ui.label("Current:");
            let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, to_color32(current));
            let name = palette::find(current).map_or("Custom", |entry| entry.name);
            ui.label(format!("{name} {current}"));
        });

        ui.horizontal_wrapped(|ui| {
            for entry in PALETTE {
                let text_color = if entry.color.is_light() {
                    Color32::from_rgb(0x33, 0x33, 0x33)
                } else {
                    Color32::WHITE
                };
                let label = RichText::new(format!("{}\n{}", entry.name, entry.color))
                    .small()
                    .color(text_color);
                let selected = entry.color == current;
                let stroke = if selected {
                    Stroke::new(3.0, Color32::from_rgb(0x33, 0x33, 0x33))
                } else {
                    Stroke::new(1.0, Color32::from_gray(180))
                };
                let button = egui::Button::new(label)
                    .fill(to_color32(entry.color))
                    .stroke(stroke)
                    .min_size(SWATCH_SIZE);
                if ui.add(button).clicked() {
                    self.select_color(entry.color);
                }
            }
        });
    }

    fn chart(&mut self, ui: &mut egui::Ui) {
        let Some((texture_id, size)) = self.chart_texture(ui.ctx()) else {
            return;
        };
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        painter.image(
            texture_id,
            Rect::from_min_size(origin, size),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        let cell = response
            .hover_pos()
            .and_then(|pos| self.state.cell_at_pointer(pos.x - origin.x, pos.y - origin.y));
        let (pressed, down, erase) = ui.input(|i| {
            (
                i.pointer.button_pressed(PointerButton::Primary),
                i.pointer.button_down(PointerButton::Primary),
                i.pointer.button_pressed(PointerButton::Secondary),
            )
        });

        // Leaving the chart or releasing the button ends the gesture
        if !response.hovered() || !down {
            self.state.release();
        }

        let Some((x, y)) = cell else {
            return;
        };
        let painted = if erase {
            self.state.erase(x, y);
            true
        } else if pressed {
            self.state.press(x, y)
        } else if down && self.state.is_drawing() {
            self.state.drag_to(x, y)
        } else {
            false
        };
        if painted {
            self.mark_dirty();
            ui.ctx().request_repaint();
        }
    }

    fn clear_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Clear grid?")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("All cells and round colors will be reset.");
                ui.horizontal(|ui| {
                    confirmed = ui.button("Clear").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if confirmed {
            self.clear_grid();
        } else if cancelled || !open {
            self.confirm_clear = false;
        }
    }
}
