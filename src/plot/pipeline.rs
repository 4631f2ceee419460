use std::path::Path;

use anyhow::Context as _;

use crate::{
    assets::PreparedImage,
    footprint::corners::DegeneratePolicy,
    foundation::error::PathvizResult,
    plot::{
        backend::{FrameRGBA, PlotBackend, execute_scene},
        cpu::CpuBackend,
        model::PlotConfig,
        scene::{PlotInput, build_scene},
    },
    trace::loader::Trace,
};

/// Validate `config`, lay out the plot and rasterize it on the CPU.
#[tracing::instrument(
    skip_all,
    fields(actual = trace.actual.len(), interpolated = trace.interpolated.len())
)]
pub fn render_plot(
    trace: &Trace,
    background: Option<&PreparedImage>,
    config: &PlotConfig,
    policy: DegeneratePolicy,
) -> PathvizResult<FrameRGBA> {
    let mut backend = CpuBackend::new();
    render_plot_with(&mut backend, trace, background, config, policy)
}

/// [`render_plot`] on a caller-provided backend.
pub fn render_plot_with<B: PlotBackend + ?Sized>(
    backend: &mut B,
    trace: &Trace,
    background: Option<&PreparedImage>,
    config: &PlotConfig,
    policy: DegeneratePolicy,
) -> PathvizResult<FrameRGBA> {
    config.validate()?;
    let input = PlotInput {
        trace,
        background,
        policy,
    };
    let scene = build_scene(&input, config)?;
    execute_scene(backend, &scene)
}

/// Write `frame` as a PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, out: &Path) -> PathvizResult<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    tracing::info!(
        path = %out.display(),
        width = frame.width,
        height = frame.height,
        "wrote plot"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/plot/pipeline.rs"]
mod tests;
