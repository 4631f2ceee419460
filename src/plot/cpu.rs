use std::sync::Arc;

use vello_cpu::kurbo::Shape as _;

use crate::{
    assets::PreparedImage,
    foundation::core::{Canvas, Rgba8},
    foundation::error::{PathvizError, PathvizResult},
    plot::{
        backend::{FrameRGBA, PlotBackend},
        scene::DrawOp,
    },
};

// Flattening tolerance for marker circles, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.05;

/// CPU raster backend powered by `vello_cpu`.
#[derive(Default)]
pub struct CpuBackend {
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn surface_mut(&mut self) -> PathvizResult<&mut CpuSurface> {
        self.surface
            .as_mut()
            .ok_or_else(|| PathvizError::render("draw called before begin"))
    }
}

impl PlotBackend for CpuBackend {
    fn begin(&mut self, canvas: Canvas, clear: Rgba8) -> PathvizResult<()> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PathvizError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PathvizError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint(color_to_cpu(clear));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        self.surface = Some(CpuSurface { width, height, ctx });
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp) -> PathvizResult<()> {
        let surface = self.surface_mut()?;
        let (canvas_w, canvas_h) = (f64::from(surface.width), f64::from(surface.height));
        let ctx = &mut surface.ctx;
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::Background { image, z: _ } => {
                let paint = image_paint(image)?;
                let (w, h) = (f64::from(image.width), f64::from(image.height));
                ctx.set_transform(vello_cpu::kurbo::Affine::scale_non_uniform(
                    canvas_w / w,
                    canvas_h / h,
                ));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
            DrawOp::Markers {
                points,
                radius,
                color,
                z: _,
            } => {
                let mut path = vello_cpu::kurbo::BezPath::new();
                for p in points {
                    let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*p), *radius);
                    path.extend(circle.path_elements(CIRCLE_TOLERANCE));
                }
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&path);
            }
            DrawOp::Polyline {
                points,
                width,
                color,
                closed,
                z: _,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                let mut path = vello_cpu::kurbo::BezPath::new();
                path.move_to(point_to_cpu(*first));
                for p in rest {
                    path.line_to(point_to_cpu(*p));
                }
                if *closed {
                    path.close_path();
                }
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.set_paint(color_to_cpu(*color));
                ctx.stroke_path(&path);
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> PathvizResult<FrameRGBA> {
        let CpuSurface {
            width,
            height,
            mut ctx,
        } = self
            .surface
            .take()
            .ok_or_else(|| PathvizError::render("finish called before begin"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r(), c.g(), c.b(), c.a())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn image_paint(image: &PreparedImage) -> PathvizResult<vello_cpu::Image> {
    let pixmap = image_premul_bytes_to_pixmap(&image.rgba8_premul, image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> PathvizResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PathvizError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PathvizError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(PathvizError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/plot/cpu.rs"]
mod tests;
