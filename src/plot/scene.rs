//! Backend-agnostic draw list for one plot.
//!
//! All geometry is already in canvas pixels; backends draw ops in the order given, which
//! [`build_scene`] sorts by z from back to front.

use kurbo::Point;

use crate::{
    assets::PreparedImage,
    footprint::corners::{
        Corner, Corners, DegeneratePolicy, compute_footprint_with, segment_poses,
    },
    foundation::core::{Canvas, Rgba8},
    foundation::error::PathvizResult,
    plot::{field::FieldFrame, model::PlotConfig},
    trace::loader::Trace,
};

pub const Z_BACKGROUND: i32 = 0;
pub const Z_SAFETY: i32 = 10;
pub const Z_OUTLINE: i32 = 20;
pub const Z_CORNERS: i32 = 30;
pub const Z_ACTUAL: i32 = 40;
pub const Z_INTERPOLATED: i32 = 50;

#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Image stretched over the whole canvas.
    Background { image: PreparedImage, z: i32 },
    /// Filled circles.
    Markers {
        points: Vec<Point>,
        radius: f64,
        color: Rgba8,
        z: i32,
    },
    /// Stroked line through `points`, closed back to the first point if `closed`.
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Rgba8,
        closed: bool,
        z: i32,
    },
}

impl DrawOp {
    pub fn z(&self) -> i32 {
        match self {
            DrawOp::Background { z, .. }
            | DrawOp::Markers { z, .. }
            | DrawOp::Polyline { z, .. } => *z,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub canvas: Canvas,
    pub clear: Rgba8,
    pub ops: Vec<DrawOp>,
}

/// What gets plotted.
#[derive(Clone, Copy, Debug)]
pub struct PlotInput<'a> {
    pub trace: &'a Trace,
    pub background: Option<&'a PreparedImage>,
    pub policy: DegeneratePolicy,
}

/// Lay out every layer of the plot on a canvas sized to the background image, or to the
/// field at `px_per_ft` when there is none.
///
/// The footprint is computed over the actual path only.
pub fn build_scene(input: &PlotInput<'_>, config: &PlotConfig) -> PathvizResult<Scene> {
    let canvas = match input.background {
        Some(img) => Canvas::new(img.width, img.height)?,
        None => FieldFrame::canvas_for(&config.field)?,
    };
    let frame = FieldFrame::new(config.field, canvas);
    let style = &config.style;
    let mut ops = Vec::new();

    if let Some(img) = input.background {
        ops.push(DrawOp::Background {
            image: img.clone(),
            z: Z_BACKGROUND,
        });
    }

    if config.safety.enabled {
        let margin = config.field.height_ft / 2.0 - config.robot.width_ft / 2.0;
        for x in [-margin, margin] {
            ops.push(DrawOp::Polyline {
                points: frame.map_all(&[
                    Point::new(x, 0.0),
                    Point::new(x, config.safety.extent_ft),
                ]),
                width: style.line_width_px,
                color: style.safety,
                closed: false,
                z: Z_SAFETY,
            });
        }
    }

    if config.footprint.enabled {
        let envelope = config.envelope()?;

        if let Some(every) = config.footprint.outline_every {
            let poses = segment_poses(&input.trace.actual, input.policy)?;
            for pose in poses.into_iter().step_by(every.max(1)) {
                ops.push(DrawOp::Polyline {
                    points: frame.map_all(&envelope.outline(pose)),
                    width: style.line_width_px,
                    color: style.outline,
                    closed: true,
                    z: Z_OUTLINE,
                });
            }
        }

        let corners = compute_footprint_with(&input.trace.actual, &envelope, input.policy)?;
        push_corner_layers(&mut ops, &corners, &frame, config);
    }

    push_markers(
        &mut ops,
        frame.map_all(&input.trace.actual),
        style.marker_radius_px,
        style.actual,
        Z_ACTUAL,
    );
    push_markers(
        &mut ops,
        frame.map_all(&input.trace.interpolated),
        style.marker_radius_px,
        style.interpolated,
        Z_INTERPOLATED,
    );

    ops.sort_by_key(DrawOp::z);
    tracing::debug!(
        ops = ops.len(),
        width = canvas.width,
        height = canvas.height,
        "built scene"
    );

    Ok(Scene {
        canvas,
        clear: style.clear,
        ops,
    })
}

fn push_corner_layers(
    ops: &mut Vec<DrawOp>,
    corners: &Corners,
    frame: &FieldFrame,
    config: &PlotConfig,
) {
    let style = &config.style;
    for (corner, seq) in corners.iter() {
        let color = corner_color(corner, config);
        let points = frame.map_all(seq);
        match points.len() {
            0 => {}
            // a single segment has nothing to connect to
            1 => push_markers(ops, points, style.line_width_px, color, Z_CORNERS),
            _ => ops.push(DrawOp::Polyline {
                points,
                width: style.line_width_px,
                color,
                closed: false,
                z: Z_CORNERS,
            }),
        }
    }
}

fn push_markers(ops: &mut Vec<DrawOp>, points: Vec<Point>, radius: f64, color: Rgba8, z: i32) {
    if points.is_empty() {
        return;
    }
    ops.push(DrawOp::Markers {
        points,
        radius,
        color,
        z,
    });
}

/// Purple for the left side of travel, orange for the right, unless restyled.
pub fn corner_color(corner: Corner, config: &PlotConfig) -> Rgba8 {
    if corner.is_outer() {
        config.style.outer_corner
    } else {
        config.style.inner_corner
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/scene.rs"]
mod tests;
