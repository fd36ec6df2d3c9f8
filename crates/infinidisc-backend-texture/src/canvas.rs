//! RGBA raster canvas with source-over drawing.

use crate::color::Color;

/// A row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[cfg(test)]
    pub(crate) fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Composites `color` over the pixel at `(x, y)`; out-of-bounds writes are ignored.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.data[idx] = color.over(&self.data[idx]);
    }

    /// Replaces every pixel with `shade(x, y)`, evaluated at pixel centres.
    pub fn fill_with<F: Fn(f64, f64) -> Color>(&mut self, shade: F) {
        let width = self.width as usize;
        for (idx, pixel) in self.data.iter_mut().enumerate() {
            let x = (idx % width) as f64 + 0.5;
            let y = (idx / width) as f64 + 0.5;
            *pixel = shade(x, y);
        }
    }

    /// Composites a disc centred at `(cx, cy)`, shading each covered pixel
    /// with `shade(x, y)`.
    ///
    /// Edge pixels get fractional coverage one pixel wide, so discs are
    /// antialiased.
    pub fn fill_circle<F>(&mut self, cx: f64, cy: f64, radius: f64, shade: F)
    where
        F: Fn(f64, f64) -> Color,
    {
        if radius <= 0.0 {
            return;
        }
        let x0 = (cx - radius - 1.0).floor().max(0.0) as i64;
        let y0 = (cy - radius - 1.0).floor().max(0.0) as i64;
        let x1 = (cx + radius + 1.0).ceil().min(self.width as f64) as i64;
        let y1 = (cy + radius + 1.0).ceil().min(self.height as f64) as i64;

        for y in y0..y1 {
            for x in x0..x1 {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let color = shade(px, py);
                    self.blend(x, y, color.with_alpha(color.a * coverage));
                }
            }
        }
    }

    /// Composites an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        for yy in y..y + height as i64 {
            for xx in x..x + width as i64 {
                self.blend(xx, yy, color);
            }
        }
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
