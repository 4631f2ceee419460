use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::PathvizResult,
    plot::scene::{DrawOp, Scene},
};

/// A rendered plot as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Something that can draw a [`Scene`].
pub trait PlotBackend {
    /// Start a fresh canvas filled with `clear`.
    fn begin(&mut self, canvas: Canvas, clear: Rgba8) -> PathvizResult<()>;

    fn draw(&mut self, op: &DrawOp) -> PathvizResult<()>;

    /// Finish drawing and read the pixels back.
    fn finish(&mut self) -> PathvizResult<FrameRGBA>;
}

pub fn execute_scene<B: PlotBackend + ?Sized>(
    backend: &mut B,
    scene: &Scene,
) -> PathvizResult<FrameRGBA> {
    backend.begin(scene.canvas, scene.clear)?;
    for op in &scene.ops {
        backend.draw(op)?;
    }
    backend.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/plot/backend.rs"]
mod tests;
