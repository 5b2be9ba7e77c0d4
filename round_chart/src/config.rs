// config.rs - Startup configuration loaded from TOML
// Missing sections fall back to their defaults.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ChartError, ConfigError};
use crate::geometry;
use crate::palette::{self, PALETTE};
use crate::render::{MAX_BORDER_MULTIPLIER, MAX_CELL_SIZE, MAX_LINE_WIDTH};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "ROUND_CHART_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "round_chart.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    pub grid: GridConfig,
    pub colors: ColorConfig,
    pub lines: LineConfig,
    pub border: BorderConfig,
    pub export: ExportConfig,
}

/// Initial grid shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Cell edge length in pixels.
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 20,
            height: 20,
            cell_size: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Color of untouched and erased cells.
    pub blank: Rgb,
    /// Palette entry selected at startup.
    pub default_palette_index: usize,
    pub grid_line: Rgb,
    pub round_line: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            blank: Rgb::WHITE,
            default_palette_index: palette::DEFAULT_COLOR_INDEX,
            grid_line: Rgb::new(0xdd, 0xdd, 0xdd),
            round_line: Rgb::new(0x66, 0x66, 0x66),
        }
    }
}

/// Stroke widths in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub grid_width: u32,
    pub round_width: u32,
}

impl Default for LineConfig {
    fn default() -> Self {
        LineConfig {
            grid_width: 1,
            round_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub enabled: bool,
    pub width_multiplier: f32,
    pub corner_radius: u32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        BorderConfig {
            enabled: false,
            width_multiplier: 1.0,
            corner_radius: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            file_name: PathBuf::from("knitting-design.png"),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Path from `ROUND_CHART_CONFIG`, else `round_chart.toml`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads `path`, falling back to defaults when it is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Checks values serde cannot: grid bounds, drawing sizes and the
    /// palette index.
    pub fn validate(&self) -> Result<(), ChartError> {
        let (width, height) = (self.grid.width, self.grid.height);
        if !geometry::dimension_in_range(width) || !geometry::dimension_in_range(height) {
            return Err(ChartError::InvalidDimension { width, height });
        }

        let invalid = |field: &'static str, value: String| Err(ChartError::InvalidStyle { field, value });
        if !(1..=MAX_CELL_SIZE).contains(&self.grid.cell_size) {
            return invalid("grid.cell_size", self.grid.cell_size.to_string());
        }
        let multiplier = self.border.width_multiplier;
        if !(0.0..=MAX_BORDER_MULTIPLIER).contains(&multiplier) {
            // NaN fails the range check too
            return invalid("border.width_multiplier", multiplier.to_string());
        }
        if self.lines.grid_width > MAX_LINE_WIDTH {
            return invalid("lines.grid_width", self.lines.grid_width.to_string());
        }
        if self.lines.round_width > MAX_LINE_WIDTH {
            return invalid("lines.round_width", self.lines.round_width.to_string());
        }

        if self.colors.default_palette_index >= PALETTE.len() {
            warn!(
                "default_palette_index {} out of range, palette has {} colors",
                self.colors.default_palette_index,
                PALETTE.len()
            );
        }
        Ok(())
    }

    /// Startup color; an out-of-range palette index falls back to the
    /// stock default.
    pub fn initial_color(&self) -> Rgb {
        PALETTE
            .get(self.colors.default_palette_index)
            .map(|entry| entry.color)
            .unwrap_or_else(palette::default_color)
    }
}
