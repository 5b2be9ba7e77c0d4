// grid.rs - Grid store: cell colors plus the per-round color cache

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::color::Rgb;
use crate::error::{ChartError, ChartResult};
use crate::geometry;

/// A `width` x `height` chart of colored cells.
///
/// Every in-range cell always holds exactly one color. The round cache
/// remembers the last color each whole round was painted with; only
/// [`ChartGrid::paint_round`] writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    width: usize,
    height: usize,
    cells: Vec<Rgb>, // row-major
    round_colors: BTreeMap<usize, Rgb>,
    blank: Rgb,
}

fn validate_dimensions(width: usize, height: usize) -> ChartResult<()> {
    if geometry::dimension_in_range(width) && geometry::dimension_in_range(height) {
        Ok(())
    } else {
        Err(ChartError::InvalidDimension { width, height })
    }
}

impl ChartGrid {
    /// Creates a grid with every cell set to `blank`.
    pub fn new(width: usize, height: usize, blank: Rgb) -> ChartResult<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![blank; width * height],
            round_colors: BTreeMap::new(),
            blank,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn blank(&self) -> Rgb {
        self.blank
    }

    pub fn center(&self) -> (usize, usize) {
        geometry::center(self.width, self.height)
    }

    pub fn max_round(&self) -> usize {
        geometry::max_round(self.width, self.height)
    }

    pub fn round_of(&self, x: usize, y: usize) -> usize {
        geometry::round_of(x, y, self.width, self.height)
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Replaces the grid with a blank `width` x `height` one and forgets all
    /// round colors. On error nothing changes.
    pub fn reset(&mut self, width: usize, height: usize) -> ChartResult<()> {
        if let Err(err) = validate_dimensions(width, height) {
            warn!("Rejected resize to {}x{}", width, height);
            return Err(err);
        }

        self.width = width;
        self.height = height;
        self.cells = vec![self.blank; width * height];
        self.round_colors.clear();
        debug!("Grid reset to {}x{}", width, height);
        Ok(())
    }

    /// Resets with the current dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(self.blank);
        self.round_colors.clear();
        debug!("Grid cleared ({}x{})", self.width, self.height);
    }

    /// Sets one cell. Out-of-range coordinates are the caller's bug and
    /// are ignored.
    pub fn paint_cell(&mut self, x: usize, y: usize, color: Rgb) {
        if !self.in_bounds(x, y) {
            debug!("Ignoring paint outside grid at ({}, {})", x, y);
            return;
        }
        self.cells[y * self.width + x] = color;
    }

    pub fn erase_cell(&mut self, x: usize, y: usize) {
        self.paint_cell(x, y, self.blank);
    }

    /// Paints every cell of round `round` and records `color` for it.
    ///
    /// Rounds beyond [`ChartGrid::max_round`] contain no cells and are not
    /// cached, so cache keys stay valid for the current dimensions.
    pub fn paint_round(&mut self, round: usize, color: Rgb) {
        if round > self.max_round() {
            debug!("Ignoring paint of nonexistent round {}", round);
            return;
        }

        let (width, height) = (self.width, self.height);
        for (index, cell) in self.cells.iter_mut().enumerate() {
            if geometry::round_of(index % width, index / width, width, height) == round {
                *cell = color;
            }
        }
        self.round_colors.insert(round, color);
        debug!("Painted round {} with {}", round, color);
    }

    /// Color of an in-range cell.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn color_at(&self, x: usize, y: usize) -> Rgb {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[y * self.width + x]
    }

    /// Last color `round` was painted with as a whole, if any.
    pub fn round_color(&self, round: usize) -> Option<Rgb> {
        self.round_colors.get(&round).copied()
    }

    /// Color used for the decorative border: the outermost round's last
    /// whole-round paint, or blank.
    pub fn outermost_round_color(&self) -> Rgb {
        self.round_color(self.max_round()).unwrap_or(self.blank)
    }

    /// All cells as `(x, y, color)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &color)| (index % width, index / width, color))
    }
}
