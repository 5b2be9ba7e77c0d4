//! Round-based knitting chart editor core.
//!
//! A chart is a square grid whose cells are grouped into concentric
//! "rounds" by Chebyshev distance from the center cell. Cells can be
//! painted one at a time or a whole round at once, and the grid renders
//! to a raster image with round outlines and an optional border ring
//! colored from the outermost round.

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod palette;
pub mod render;
pub mod surface;

pub use color::Rgb;
pub use config::ChartConfig;
pub use controller::{ChartState, PaintMode};
pub use error::{ChartError, ChartResult, ConfigError};
pub use grid::ChartGrid;
pub use render::{ChartRenderer, RenderStyle};
pub use surface::{PixelRect, Surface};
