// render.rs - Draws a chart grid, its round outlines and the border ring

use image::RgbaImage;
use log::debug;

use crate::color::Rgb;
use crate::config::ChartConfig;
use crate::grid::ChartGrid;
use crate::surface::{PixelRect, Surface};

/// Largest accepted cell edge in pixels.
pub const MAX_CELL_SIZE: u32 = 200;
/// Largest accepted border thickness, in cells.
pub const MAX_BORDER_MULTIPLIER: f32 = 10.0;
/// Largest accepted line width in pixels.
pub const MAX_LINE_WIDTH: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: u32,
}

/// Decorative ring around the grid, colored from the outermost round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub enabled: bool,
    /// Ring thickness as a multiple of the cell size.
    pub width_multiplier: f32,
    /// Cosmetic only.
    pub corner_radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub cell_size: u32,
    pub grid_line: LineStyle,
    pub round_line: LineStyle,
    pub border: BorderStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: 25,
            grid_line: LineStyle { color: Rgb::new(0xdd, 0xdd, 0xdd), width: 1 },
            round_line: LineStyle { color: Rgb::new(0x66, 0x66, 0x66), width: 2 },
            border: BorderStyle { enabled: false, width_multiplier: 1.0, corner_radius: 0 },
        }
    }
}

impl RenderStyle {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            cell_size: config.grid.cell_size.clamp(1, MAX_CELL_SIZE),
            grid_line: LineStyle {
                color: config.colors.grid_line,
                width: config.lines.grid_width,
            },
            round_line: LineStyle {
                color: config.colors.round_line,
                width: config.lines.round_width,
            },
            border: BorderStyle {
                enabled: config.border.enabled,
                width_multiplier: config.border.width_multiplier,
                corner_radius: config.border.corner_radius,
            },
        }
    }

    /// Border thickness in pixels; zero when the border is off.
    pub fn border_extent(&self) -> u32 {
        if !self.border.enabled {
            return 0;
        }
        let multiplier = self.border.width_multiplier;
        if !(multiplier > 0.0) {
            return 0;
        }
        let extent = self.cell_size as f32 * multiplier.min(MAX_BORDER_MULTIPLIER);
        extent.round() as u32
    }

    /// Surface size needed for `grid`, border included.
    pub fn surface_size(&self, grid: &ChartGrid) -> (u32, u32) {
        let extent = self.border_extent().saturating_mul(2);
        let side = |cells: usize| (cells as u32).saturating_mul(self.cell_size).saturating_add(extent);
        (side(grid.width()), side(grid.height()))
    }
}

/// Stateless renderer; the same grid always produces the same pixels.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: RenderStyle,
}

impl ChartRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut RenderStyle {
        &mut self.style
    }

    /// Redraws `grid` onto `surface`, resizing it first.
    pub fn render<S: Surface + ?Sized>(&self, grid: &ChartGrid, surface: &mut S) {
        let (width, height) = self.style.surface_size(grid);
        surface.resize(width, height);
        debug!(
            "Rendering {}x{} grid onto {}x{} surface",
            grid.width(),
            grid.height(),
            width,
            height
        );

        if self.style.border.enabled {
            self.draw_border(grid, surface, width, height);
        }
        self.draw_cells(grid, surface);
        self.draw_round_outlines(grid, surface);
    }

    pub fn render_image(&self, grid: &ChartGrid) -> RgbaImage {
        let mut image = RgbaImage::new(0, 0);
        self.render(grid, &mut image);
        image
    }

    fn draw_border<S: Surface + ?Sized>(&self, grid: &ChartGrid, surface: &mut S, width: u32, height: u32) {
        let full = PixelRect::new(0, 0, width, height);
        surface.fill_rounded_rect(full, self.style.border.corner_radius, grid.outermost_round_color());
        surface.fill_rect(full.inset(self.style.border_extent()), grid.blank());
    }

    fn draw_cells<S: Surface + ?Sized>(&self, grid: &ChartGrid, surface: &mut S) {
        let line = self.style.grid_line;
        for (x, y, color) in grid.cells() {
            let rect = self.cell_rect(x, y);
            surface.fill_rect(rect, color);
            surface.stroke_rect(rect, line.width, line.color);
        }
    }

    fn draw_round_outlines<S: Surface + ?Sized>(&self, grid: &ChartGrid, surface: &mut S) {
        let line = self.style.round_line;
        // round 0 is the center cell alone
        for round in 1..=grid.max_round() {
            if let Some(rect) = self.round_outline(grid, round) {
                surface.stroke_rect(rect, line.width, line.color);
            }
        }
    }

    /// Pixel rectangle of cell `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> PixelRect {
        let cell = self.style.cell_size;
        let extent = self.style.border_extent() as i64;
        PixelRect::new(
            x as i64 * cell as i64 + extent,
            y as i64 * cell as i64 + extent,
            cell,
            cell,
        )
    }

    /// Outline square for `round`, or `None` when its top or left edge
    /// would fall outside the cell area. Only the top/left edges are
    /// checked; outlines may run past the bottom/right edge.
    pub fn round_outline(&self, grid: &ChartGrid, round: usize) -> Option<PixelRect> {
        let cell = self.style.cell_size as i64;
        let extent = self.style.border_extent() as i64;
        let (cx, cy) = grid.center();
        let r = round as i64;

        let x1 = (cx as i64 - r) * cell + extent;
        let y1 = (cy as i64 - r) * cell + extent;
        if x1 < extent || y1 < extent {
            return None;
        }
        let side = (round as u32)
            .saturating_mul(2)
            .saturating_add(1)
            .saturating_mul(self.style.cell_size);
        Some(PixelRect::new(x1, y1, side, side))
    }

    /// Maps a pointer position relative to the surface origin to the cell
    /// under it.
    pub fn cell_at(&self, grid: &ChartGrid, px: f32, py: f32) -> Option<(usize, usize)> {
        let cell = self.style.cell_size as f32;
        let extent = self.style.border_extent() as f32;
        let x = ((px - extent) / cell).floor();
        let y = ((py - extent) / cell).floor();
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        grid.in_bounds(x, y).then_some((x, y))
    }
}
