//! Radial gradients.

use crate::color::Color;

/// A colour stop: position in `[0, 1]` and colour.
pub type ColorStop = (f64, Color);

/// A concentric radial gradient.
///
/// Positions inside `inner_radius` take the first stop and positions beyond
/// `outer_radius` the last, matching the HTML canvas behaviour for
/// concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Centre x.
    pub cx: f64,
    /// Centre y.
    pub cy: f64,
    /// Radius of the start circle.
    pub inner_radius: f64,
    /// Radius of the end circle.
    pub outer_radius: f64,
    /// Stops in ascending position order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Creates a gradient; stops are sorted by position.
    pub fn new(
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        stops: &[ColorStop],
    ) -> Self {
        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            cx,
            cy,
            inner_radius,
            outer_radius,
            stops,
        }
    }

    /// Colour at canvas position `(x, y)`.
    pub fn at(&self, x: f64, y: f64) -> Color {
        let dist = ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt();
        let span = self.outer_radius - self.inner_radius;
        let t = if span > 0.0 {
            (dist - self.inner_radius) / span
        } else if dist < self.inner_radius {
            0.0
        } else {
            1.0
        };
        self.color_at(t)
    }

    /// Colour at gradient position `t`.
    pub fn color_at(&self, t: f64) -> Color {
        let Some(&(first_pos, first)) = self.stops.first() else {
            return Color::rgba(0.0, 0.0, 0.0, 0.0);
        };
        if t <= first_pos {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let local = if p1 > p0 { (t - p0) / (p1 - p0) } else { 1.0 };
                return c0.lerp(&c1, local);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}
