// main.rs - Round chart editor window
// State lives in round_chart::ChartState; ui.rs draws it with egui.

use std::path::PathBuf;

use anyhow::Context;
use eframe::egui;
use log::{error, info};
use round_chart::{ChartConfig, ChartState, Rgb};

mod ui;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config_path = ChartConfig::default_path();
    let config = ChartConfig::load_or_default(&config_path);
    let app = match ChartApp::new(config) {
        Ok(app) => app,
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 950.0]),
        ..Default::default()
    };

    info!("Starting round chart editor");
    eframe::run_native(
        "Round Chart",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

/// Editor window: the chart state plus the widgets' transient values.
pub struct ChartApp {
    pub state: ChartState,
    pub export_path: PathBuf,

    pub width_input: usize,
    pub height_input: usize,
    pub confirm_clear: bool,
    pub status: Option<Status>,

    texture: Option<egui::TextureHandle>,
    dirty: bool,
}

/// Message shown under the controls.
pub enum Status {
    Info(String),
    Error(String),
}

impl ChartApp {
    pub fn new(config: ChartConfig) -> anyhow::Result<Self> {
        let state = ChartState::new(&config).context("Invalid grid configuration")?;
        Ok(Self {
            width_input: state.grid().width(),
            height_input: state.grid().height(),
            state,
            export_path: config.export.file_name,
            confirm_clear: false,
            status: None,
            texture: None,
            dirty: true,
        })
    }

    /// Marks the chart for re-rendering on the next frame.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn select_color(&mut self, color: Rgb) {
        self.state.set_current_color(color);
    }

    pub fn apply_resize(&mut self) {
        match self.state.resize(self.width_input, self.height_input) {
            Ok(()) => {
                info!("Grid resized to {}x{}", self.width_input, self.height_input);
                self.status = None;
                self.mark_dirty();
            }
            Err(err) => {
                self.status = Some(Status::Error(err.to_string()));
            }
        }
    }

    pub fn clear_grid(&mut self) {
        self.state.clear();
        self.confirm_clear = false;
        self.mark_dirty();
    }

    /// Writes the current chart as PNG.
    pub fn export_png(&mut self) {
        let result = self
            .state
            .render_image()
            .save(&self.export_path)
            .with_context(|| format!("Failed to write {}", self.export_path.display()));
        self.status = Some(match result {
            Ok(()) => {
                info!("Exported chart to {}", self.export_path.display());
                Status::Info(format!("Saved {}", self.export_path.display()))
            }
            Err(err) => {
                error!("{:#}", err);
                Status::Error(format!("{:#}", err))
            }
        });
    }

    /// Re-rasterizes the chart into the egui texture if anything changed.
    pub fn chart_texture(&mut self, ctx: &egui::Context) -> Option<(egui::TextureId, egui::Vec2)> {
        if self.dirty || self.texture.is_none() {
            let image = self.state.render_image();
            let size = [image.width() as usize, image.height() as usize];
            let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            if let Some(texture) = &mut self.texture {
                texture.set(pixels, egui::TextureOptions::NEAREST);
            } else {
                self.texture =
                    Some(ctx.load_texture("round-chart", pixels, egui::TextureOptions::NEAREST));
            }
            self.dirty = false;
        }
        self.texture.as_ref().map(|texture| (texture.id(), texture.size_vec2()))
    }
}

pub fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
