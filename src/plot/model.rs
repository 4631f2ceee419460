use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    footprint::envelope::Envelope,
    foundation::core::Rgba8,
    foundation::error::{PathvizError, PathvizResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Everything that controls how a trace is plotted.
///
/// Every field has a default, so a config file only needs the keys it changes.
pub struct PlotConfig {
    /// Field diagram dimensions.
    pub field: FieldConfig,
    /// Robot envelope used for the footprint and the safety margins.
    pub robot: RobotConfig,
    /// Static safety-margin lines.
    pub safety: SafetyConfig,
    /// Swept footprint layers.
    pub footprint: FootprintConfig,
    /// Colors and stroke sizes.
    pub style: PlotStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Field dimensions in feet.
pub struct FieldConfig {
    /// Extent along the horizontal image axis (trace `y`).
    pub width_ft: f64,
    /// Extent along the vertical image axis (trace `x`), centered on zero.
    pub height_ft: f64,
    /// Canvas resolution used when there is no background image.
    pub px_per_ft: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width_ft: 54.0,
            height_ft: 27.0,
            px_per_ft: 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Robot envelope in feet.
pub struct RobotConfig {
    /// Lateral width, perpendicular to travel.
    pub width_ft: f64,
    /// Longitudinal length, along travel.
    pub length_ft: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            width_ft: 2.83333333,
            length_ft: 3.25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Lines marking how close the robot's center may get to the field walls.
pub struct SafetyConfig {
    /// Draw the lines at all.
    pub enabled: bool,
    /// How far along the field (trace `y`, feet from zero) the lines run.
    pub extent_ft: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extent_ft: 39.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Swept footprint drawing options.
pub struct FootprintConfig {
    /// Draw the four corner trajectories of the actual path.
    pub enabled: bool,
    /// Also outline the robot at every n-th segment; `None` disables outlines.
    pub outline_every: Option<usize>,
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            outline_every: Some(10),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Colors (straight RGBA8) and sizes in pixels.
pub struct PlotStyle {
    /// Canvas color behind the background image.
    pub clear: Rgba8,
    /// Recorded path points.
    pub actual: Rgba8,
    /// Planner-interpolated points.
    pub interpolated: Rgba8,
    /// Corners on the left of travel (`+n`).
    pub outer_corner: Rgba8,
    /// Corners on the right of travel (`-n`).
    pub inner_corner: Rgba8,
    /// Robot outlines.
    pub outline: Rgba8,
    /// Safety-margin lines.
    pub safety: Rgba8,
    /// Radius of point markers.
    pub marker_radius_px: f64,
    /// Width of every stroked line.
    pub line_width_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            clear: Rgba8::rgb(255, 255, 255),
            actual: Rgba8::rgb(178, 34, 34),
            interpolated: Rgba8::rgb(0, 128, 0),
            outer_corner: Rgba8::rgb(128, 0, 128),
            inner_corner: Rgba8::rgb(255, 165, 0),
            outline: Rgba8([96, 96, 96, 160]),
            safety: Rgba8::rgb(31, 119, 180),
            marker_radius_px: 2.5,
            line_width_px: 1.5,
        }
    }
}

impl PlotConfig {
    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> PathvizResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> PathvizResult<()> {
        positive("field.width_ft", self.field.width_ft)?;
        positive("field.height_ft", self.field.height_ft)?;
        positive("field.px_per_ft", self.field.px_per_ft)?;
        self.envelope()?;
        if !(self.safety.extent_ft.is_finite() && self.safety.extent_ft >= 0.0) {
            return Err(PathvizError::validation(
                "safety.extent_ft must be finite and >= 0",
            ));
        }
        if self.footprint.outline_every == Some(0) {
            return Err(PathvizError::validation(
                "footprint.outline_every must be >= 1 (use null to disable)",
            ));
        }
        positive("style.marker_radius_px", self.style.marker_radius_px)?;
        positive("style.line_width_px", self.style.line_width_px)?;
        Ok(())
    }

    pub fn envelope(&self) -> PathvizResult<Envelope> {
        Envelope::new(self.robot.width_ft, self.robot.length_ft)
    }
}

fn positive(name: &str, v: f64) -> PathvizResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(PathvizError::validation(format!(
            "{name} must be positive and finite, got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/model.rs"]
mod tests;
