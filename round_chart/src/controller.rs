// controller.rs - Chart state and pointer-driven painting

use image::RgbaImage;
use log::debug;

use crate::color::Rgb;
use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::grid::ChartGrid;
use crate::render::{ChartRenderer, RenderStyle};
use crate::surface::Surface;

/// What a primary-button paint does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Cell,
    Round,
}

/// A press-drag-release gesture in progress.
#[derive(Debug, Clone, Copy, Default)]
struct DrawingGesture {
    active: bool,
    last_round: Option<usize>,
}

/// Everything one chart editor owns: the grid, how it is drawn, and the
/// current paint settings.
#[derive(Debug, Clone)]
pub struct ChartState {
    grid: ChartGrid,
    renderer: ChartRenderer,
    current_color: Rgb,
    paint_mode: PaintMode,
    gesture: DrawingGesture,
}

impl ChartState {
    pub fn new(config: &ChartConfig) -> ChartResult<Self> {
        let grid = ChartGrid::new(config.grid.width, config.grid.height, config.colors.blank)?;
        Ok(Self {
            grid,
            renderer: ChartRenderer::new(RenderStyle::from_config(config)),
            current_color: config.initial_color(),
            paint_mode: PaintMode::default(),
            gesture: DrawingGesture::default(),
        })
    }

    pub fn grid(&self) -> &ChartGrid {
        &self.grid
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    /// Style changes (border toggle, multiplier) go through here.
    pub fn style_mut(&mut self) -> &mut RenderStyle {
        self.renderer.style_mut()
    }

    pub fn current_color(&self) -> Rgb {
        self.current_color
    }

    pub fn set_current_color(&mut self, color: Rgb) {
        self.current_color = color;
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.paint_mode
    }

    pub fn set_paint_mode(&mut self, mode: PaintMode) {
        self.paint_mode = mode;
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.active
    }

    /// Resizes to a blank grid; on error the old grid stays.
    pub fn resize(&mut self, width: usize, height: usize) -> ChartResult<()> {
        self.grid.reset(width, height)?;
        self.gesture = DrawingGesture::default();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.gesture = DrawingGesture::default();
    }

    /// Cell under a pointer position given relative to the surface origin.
    pub fn cell_at_pointer(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        self.renderer.cell_at(&self.grid, px, py)
    }

    /// One click: paints the cell or its whole round with the current
    /// color, depending on the paint mode.
    pub fn click(&mut self, x: usize, y: usize) {
        match self.paint_mode {
            PaintMode::Cell => self.grid.paint_cell(x, y, self.current_color),
            PaintMode::Round => {
                let round = self.grid.round_of(x, y);
                self.grid.paint_round(round, self.current_color);
            }
        }
    }

    /// Resets a single cell to blank regardless of paint mode.
    pub fn erase(&mut self, x: usize, y: usize) {
        self.grid.erase_cell(x, y);
    }

    /// Starts a drawing gesture and paints under the pointer.
    pub fn press(&mut self, x: usize, y: usize) -> bool {
        self.gesture = DrawingGesture { active: true, last_round: None };
        debug!("Drawing started at ({}, {})", x, y);
        self.drag_to(x, y)
    }

    /// Continues the gesture. In round mode a round already painted by this
    /// gesture is not repainted until the pointer reaches another round.
    /// Returns whether anything was painted.
    pub fn drag_to(&mut self, x: usize, y: usize) -> bool {
        if !self.gesture.active || !self.grid.in_bounds(x, y) {
            return false;
        }
        match self.paint_mode {
            PaintMode::Cell => {
                self.grid.paint_cell(x, y, self.current_color);
                true
            }
            PaintMode::Round => {
                let round = self.grid.round_of(x, y);
                if self.gesture.last_round == Some(round) {
                    return false;
                }
                self.grid.paint_round(round, self.current_color);
                self.gesture.last_round = Some(round);
                true
            }
        }
    }

    /// Ends the gesture on release or when the pointer leaves the chart.
    pub fn release(&mut self) {
        if self.gesture.active {
            debug!("Drawing ended");
        }
        self.gesture = DrawingGesture::default();
    }

    pub fn render_into<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.render(&self.grid, surface);
    }

    pub fn render_image(&self) -> RgbaImage {
        self.renderer.render_image(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const RED: Rgb = Rgb::new(0xd7, 0x00, 0x3a);
    const BLUE: Rgb = Rgb::new(0x00, 0x95, 0xd9);

    fn state(width: usize, height: usize) -> ChartState {
        let mut config = ChartConfig::default();
        config.grid.width = width;
        config.grid.height = height;
        ChartState::new(&config).unwrap()
    }

    #[test]
    fn starts_in_cell_mode_with_sakura() {
        let state = state(20, 20);
        assert_eq!(state.paint_mode(), PaintMode::Cell);
        assert_eq!(state.current_color().to_hex(), "#fef4f4");
        assert!(!state.is_drawing());
    }

    #[test]
    fn click_follows_paint_mode() {
        let mut state = state(5, 5);
        state.set_current_color(RED);
        state.click(0, 1);
        assert_eq!(state.grid().color_at(0, 1), RED);
        assert_eq!(state.grid().color_at(0, 0), Rgb::WHITE);

        state.set_paint_mode(PaintMode::Round);
        state.set_current_color(BLUE);
        state.click(3, 3);
        assert_eq!(state.grid().color_at(1, 1), BLUE);
        assert_eq!(state.grid().color_at(2, 2), Rgb::WHITE);
        assert_eq!(state.grid().round_color(1), Some(BLUE));
    }

    #[test]
    fn drag_in_round_mode_skips_same_round() {
        let mut state = state(7, 7);
        state.set_paint_mode(PaintMode::Round);
        state.set_current_color(RED);
        assert!(state.press(0, 0));
        assert!(!state.drag_to(6, 0)); // still round 3
        assert!(!state.drag_to(3, 6));
        assert!(state.drag_to(1, 1)); // round 2
        assert!(state.drag_to(0, 3)); // back to round 3
        state.release();
        assert!(!state.is_drawing());
        assert!(!state.drag_to(3, 3));
        assert_eq!(state.grid().color_at(3, 3), Rgb::WHITE);
    }

    #[test]
    fn drag_in_cell_mode_paints_each_cell() {
        let mut state = state(5, 5);
        state.set_current_color(RED);
        state.press(0, 0);
        assert!(state.drag_to(1, 0));
        assert!(state.drag_to(1, 0));
        assert!(!state.drag_to(9, 0));
        state.release();
        let painted: Vec<_> = state.grid().cells().filter(|c| c.2 == RED).map(|c| (c.0, c.1)).collect();
        assert_eq!(painted, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn new_press_forgets_last_round() {
        let mut state = state(5, 5);
        state.set_paint_mode(PaintMode::Round);
        state.press(0, 0);
        state.release();
        state.set_current_color(RED);
        assert!(state.press(4, 4));
        assert_eq!(state.grid().outermost_round_color(), RED);
    }

    #[test]
    fn erase_ignores_mode() {
        let mut state = state(5, 5);
        state.set_paint_mode(PaintMode::Round);
        state.set_current_color(RED);
        state.click(0, 0);
        state.erase(1, 0);
        assert_eq!(state.grid().color_at(1, 0), Rgb::WHITE);
        assert_eq!(state.grid().color_at(0, 0), RED);
        assert_eq!(state.grid().round_color(2), Some(RED));
    }

    #[test]
    fn resize_and_clear_end_gesture() {
        let mut state = state(5, 5);
        state.press(0, 0);
        state.resize(6, 6).unwrap();
        assert!(!state.is_drawing());
        state.press(0, 0);
        state.clear();
        assert!(!state.is_drawing());
    }

    #[test]
    fn failed_resize_keeps_grid() {
        let mut state = state(5, 5);
        state.set_current_color(RED);
        state.click(2, 2);
        assert!(state.resize(51, 51).is_err());
        assert_eq!((state.grid().width(), state.grid().height()), (5, 5));
        assert_eq!(state.grid().color_at(2, 2), RED);
    }

    #[test]
    fn pointer_goes_through_border() {
        let mut state = state(5, 5);
        state.style_mut().border.enabled = true;
        state.style_mut().border.width_multiplier = 2.0;
        // cell 25, border 50
        assert_eq!(state.cell_at_pointer(40.0, 60.0), None);
        assert_eq!(state.cell_at_pointer(60.0, 60.0), Some((0, 0)));
        assert_eq!(state.cell_at_pointer(174.0, 100.0), Some((4, 2)));
        assert_eq!(state.cell_at_pointer(175.0, 100.0), None);
    }

    #[test]
    fn independent_states_do_not_share() {
        let mut a = state(5, 5);
        let b = state(5, 5);
        a.set_current_color(RED);
        a.click(0, 0);
        assert_eq!(b.grid().color_at(0, 0), Rgb::WHITE);
        assert_ne!(a.current_color(), b.current_color());
    }
}
