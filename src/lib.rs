//! pathviz plots robot path telemetry on a field diagram.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a CSV trace becomes a [`Trace`], split into actual and interpolated paths.
//! 2. **Footprint**: [`compute_footprint`] sweeps the robot [`Envelope`] along the actual path
//!    and returns the four [`Corners`] trajectories.
//! 3. **Scene**: [`build_scene`] lays out the background, safety lines, footprint and points
//!    in canvas pixels, ordered by z.
//! 4. **Render**: a [`PlotBackend`] (the CPU backend by default) rasterizes the scene into a
//!    [`FrameRGBA`], which [`write_png`] saves.
//!
//! Footprint and scene construction are pure; IO happens only in [`load_trace`],
//! [`load_image`], [`PlotConfig::from_path`] and [`write_png`].
#![forbid(unsafe_code)]

mod assets;
mod footprint;
mod foundation;
mod plot;
mod trace;

/// Rigid 2D transforms and frame hierarchies.
pub mod frames;

pub use assets::PreparedImage;
pub use assets::decode::{decode_image, load_image};
pub use footprint::corners::{
    Corner, Corners, DegeneratePolicy, SegmentFrame, compute_footprint, compute_footprint_with,
    segment_frame, segment_poses,
};
pub use footprint::envelope::Envelope;
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{PathvizError, PathvizResult};
pub use frames::{FrameRegistry, FrameTree, FramedPoint, RigidTransform};
pub use plot::backend::{FrameRGBA, PlotBackend, execute_scene};
pub use plot::cpu::CpuBackend;
pub use plot::field::FieldFrame;
pub use plot::model::{
    FieldConfig, FootprintConfig, PlotConfig, PlotStyle, RobotConfig, SafetyConfig,
};
pub use plot::pipeline::{render_plot, render_plot_with, write_png};
pub use plot::scene::{
    DrawOp, PlotInput, Scene, Z_ACTUAL, Z_BACKGROUND, Z_CORNERS, Z_INTERPOLATED, Z_OUTLINE,
    Z_SAFETY, build_scene, corner_color,
};
pub use trace::flag::{TRUTHY_TOKENS, parse_flag};
pub use trace::loader::{Trace, TraceRow, load_trace, parse_rows, parse_trace};
