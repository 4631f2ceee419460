//! Field feet to canvas pixels.
//!
//! Field diagrams are drawn landscape with the trace axes swapped: trace `y` runs left to
//! right from `0` to `width_ft`, and trace `x` runs top to bottom from `-height_ft / 2` to
//! `+height_ft / 2`.

use kurbo::{Affine, Point};

use crate::{
    foundation::core::Canvas,
    foundation::error::PathvizResult,
    plot::model::FieldConfig,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldFrame {
    field: FieldConfig,
    canvas: Canvas,
}

impl FieldFrame {
    pub fn new(field: FieldConfig, canvas: Canvas) -> Self {
        Self { field, canvas }
    }

    /// Canvas sized from the field dimensions at `field.px_per_ft`.
    pub fn canvas_for(field: &FieldConfig) -> PathvizResult<Canvas> {
        Canvas::new(
            (field.width_ft * field.px_per_ft).round() as u32,
            (field.height_ft * field.px_per_ft).round() as u32,
        )
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Pixels per foot along each canvas axis.
    pub fn scale(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width) / self.field.width_ft,
            f64::from(self.canvas.height) / self.field.height_ft,
        )
    }

    pub fn to_affine(&self) -> Affine {
        let (sx, sy) = self.scale();
        // canvas.x = sx * trace.y, canvas.y = sy * (trace.x + height / 2)
        Affine::new([0.0, sy, sx, 0.0, 0.0, sy * self.field.height_ft / 2.0])
    }

    pub fn to_canvas(&self, p: Point) -> Point {
        self.to_affine() * p
    }

    pub fn map_all(&self, points: &[Point]) -> Vec<Point> {
        let a = self.to_affine();
        points.iter().map(|&p| a * p).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/field.rs"]
mod tests;
