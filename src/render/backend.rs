use crate::field::particle::Particle;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{GlowError, GlowResult};
use serde::{Deserialize, Serialize};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag is included to make this
/// explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
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
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Return `true` when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }
}

/// Look of a single glow disc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowStyle {
    /// Alpha of the particle color at the inner stop.
    pub core_alpha: u8,
    /// Inner stop as a fraction of the radius; the gradient fades to transparent at the radius.
    pub inner_ratio: f64,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            core_alpha: 255,
            inner_ratio: 0.1,
        }
    }
}

impl GlowStyle {
    /// Check ranges.
    pub fn validate(&self) -> GlowResult<()> {
        if !(self.inner_ratio.is_finite() && (0.0..1.0).contains(&self.inner_ratio)) {
            return Err(GlowError::validation("glow inner_ratio must be in [0, 1)"));
        }
        Ok(())
    }

    /// Glow opacity (0..=1) at distance `d` from the center of a disc of radius `r`.
    pub fn coverage(&self, d: f64, r: f64) -> f64 {
        if r <= 0.0 || d >= r {
            return 0.0;
        }
        let inner = r * self.inner_ratio;
        if d <= inner {
            return 1.0;
        }
        1.0 - (d - inner) / (r - inner)
    }
}

/// Counters accumulated by a backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames rendered into a real surface.
    pub frames: u64,
    /// Particle discs drawn.
    pub draw_calls: u64,
    /// Distinct glow sprites currently cached.
    pub sprites_cached: usize,
}

/// Drawing surface plus the painter for particle frames.
pub trait RenderBackend {
    /// Resize the pixel buffer to `size` (logical size × pixel ratio) and clear it.
    ///
    /// An empty size leaves the backend without a surface; later renders are no-ops.
    fn resize(&mut self, size: SurfaceSize) -> GlowResult<()>;

    /// Clear the surface to transparent.
    fn clear(&mut self);

    /// Clear, then paint every particle additively.
    fn render_particles(&mut self, particles: &[Particle]) -> GlowResult<()>;

    /// Copy of the current pixels, if a surface exists.
    fn snapshot(&self) -> Option<FrameRGBA>;

    /// Accumulated counters.
    fn stats(&self) -> RenderStats;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Glow disc appearance.
    pub glow: GlowStyle,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> GlowResult<Box<dyn RenderBackend>> {
    settings.glow.validate()?;
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
