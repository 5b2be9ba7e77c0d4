// surface.rs - Raster surface the renderer draws onto

use image::RgbaImage;

use crate::color::Rgb;

/// Axis-aligned pixel rectangle. The origin may be negative; drawing
/// clips to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Shrinks by `amount` on every side.
    pub fn inset(&self, amount: u32) -> Self {
        Self {
            x: self.x + amount as i64,
            y: self.y + amount as i64,
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }
}

/// A canvas-like drawing target.
pub trait Surface {
    /// Reallocates to `width` x `height`, cleared to transparent.
    fn resize(&mut self, width: u32, height: u32);

    fn dimensions(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Fills `rect` with corners rounded by `radius` pixels. The default
    /// ignores `radius` and fills square corners.
    fn fill_rounded_rect(&mut self, rect: PixelRect, radius: u32, color: Rgb) {
        let _ = radius;
        self.fill_rect(rect, color);
    }

    /// Outlines `rect` with a line `line_width` pixels thick, centered on
    /// the rectangle's edges (odd widths lean inward).
    fn stroke_rect(&mut self, rect: PixelRect, line_width: u32, color: Rgb) {
        if line_width == 0 {
            return;
        }
        let lw = line_width as i64;
        let near = lw / 2; // left/top bands start this far outside the edge
        let far = (lw + 1) / 2; // right/bottom bands start this far inside

        let left = rect.x - near;
        let top = rect.y - near;
        let right = rect.right() - far;
        let bottom = rect.bottom() - far;
        let span_w = (right + lw - left).max(0) as u32;
        let span_h = (bottom + lw - top).max(0) as u32;

        self.fill_rect(PixelRect::new(left, top, span_w, line_width), color);
        self.fill_rect(PixelRect::new(left, bottom, span_w, line_width), color);
        self.fill_rect(PixelRect::new(left, top, line_width, span_h), color);
        self.fill_rect(PixelRect::new(right, top, line_width, span_h), color);
    }
}

/// Clips `rect` to a `width` x `height` surface, returning pixel ranges.
fn clip(rect: PixelRect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = rect.right().min(width as i64);
    let y1 = rect.bottom().min(height as i64);
    (x0 < x1 && y0 < y1).then(|| (x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// True when pixel `(px, py)` falls outside the rounded corner arcs of
/// `rect`.
fn outside_corner(rect: PixelRect, radius: u32, px: u32, py: u32) -> bool {
    if radius == 0 {
        return false;
    }
    let r = radius as f64;
    let (cx, cy) = (px as f64 + 0.5, py as f64 + 0.5);
    let (left, top) = (rect.x as f64 + r, rect.y as f64 + r);
    let (right, bottom) = (rect.right() as f64 - r, rect.bottom() as f64 - r);

    let dx = if cx < left {
        left - cx
    } else if cx > right {
        cx - right
    } else {
        return false;
    };
    let dy = if cy < top {
        top - cy
    } else if cy > bottom {
        cy - bottom
    } else {
        return false;
    };
    dx * dx + dy * dy > r * r
}

impl Surface for RgbaImage {
    fn resize(&mut self, width: u32, height: u32) {
        *self = RgbaImage::new(width, height);
    }

    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let Some((x0, y0, x1, y1)) = clip(rect, self.width(), self.height()) else {
            return;
        };
        let pixel = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                self.put_pixel(x, y, pixel);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: PixelRect, radius: u32, color: Rgb) {
        let radius = radius.min(rect.width / 2).min(rect.height / 2);
        let Some((x0, y0, x1, y1)) = clip(rect, self.width(), self.height()) else {
            return;
        };
        let pixel = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                if !outside_corner(rect, radius, x, y) {
                    self.put_pixel(x, y, pixel);
                }
            }
        }
    }
}
