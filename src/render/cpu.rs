use crate::field::particle::Particle;
use crate::foundation::core::{Affine, SurfaceSize};
use crate::foundation::error::{GlowError, GlowResult};
use crate::palette::color::Rgb8;
use crate::render::backend::{FrameRGBA, GlowStyle, RenderBackend, RenderSettings, RenderStats};
use std::collections::HashMap;
use std::sync::Arc;

const MAX_CACHED_SPRITES: usize = 512;

/// Sprites are keyed by color and device radius in quarter pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SpriteKey {
    rgb: [u8; 3],
    radius_q4: u32,
}

#[derive(Clone)]
struct GlowSprite {
    paint: vello_cpu::Image,
    side: u32,
}

struct CpuSurface {
    size: SurfaceSize,
    pixmap: vello_cpu::Pixmap,
}

/// CPU raster backend powered by `vello_cpu`.
///
/// Each particle is a cached radial-gradient sprite filled into a square around its center,
/// composited with `Compose::Plus` so overlaps brighten.
pub struct CpuBackend {
    settings: RenderSettings,
    surface: Option<CpuSurface>,
    ctx: Option<vello_cpu::RenderContext>,
    sprite_cache: HashMap<SpriteKey, GlowSprite>,
    stats: RenderStats,
}

impl CpuBackend {
    /// Backend without a surface; call [`RenderBackend::resize`] before rendering.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            surface: None,
            ctx: None,
            sprite_cache: HashMap::new(),
            stats: RenderStats::default(),
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> GlowResult<R>,
    ) -> GlowResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn glow_sprite(&mut self, color: Rgb8, radius_px: f64) -> GlowResult<GlowSprite> {
        let key = SpriteKey {
            rgb: [color.r, color.g, color.b],
            radius_q4: (radius_px * 4.0).round().max(1.0) as u32,
        };
        if let Some(sprite) = self.sprite_cache.get(&key) {
            return Ok(sprite.clone());
        }
        if self.sprite_cache.len() >= MAX_CACHED_SPRITES {
            self.sprite_cache.clear();
        }

        let radius = f64::from(key.radius_q4) / 4.0;
        let bytes = rasterize_glow(color, radius, &self.settings.glow);
        let side = glow_side(radius);
        let sprite = GlowSprite {
            paint: rgba_premul_to_image(&bytes, side, side)?,
            side,
        };
        self.sprite_cache.insert(key, sprite.clone());
        Ok(sprite)
    }
}

impl RenderBackend for CpuBackend {
    fn resize(&mut self, size: SurfaceSize) -> GlowResult<()> {
        if size.is_empty() {
            tracing::debug!(?size, "surface has no pixels; rendering disabled");
            self.surface = None;
            return Ok(());
        }
        let width: u16 = size
            .pixel_width()?
            .try_into()
            .map_err(|_| GlowError::evaluation("surface width exceeds u16"))?;
        let height: u16 = size
            .pixel_height()?
            .try_into()
            .map_err(|_| GlowError::evaluation("surface height exceeds u16"))?;

        // A fresh pixmap is already transparent, which doubles as the clear.
        self.surface = Some(CpuSurface {
            size,
            pixmap: vello_cpu::Pixmap::new(width, height),
        });
        tracing::debug!(width, height, ratio = size.device_pixel_ratio, "surface resized");
        Ok(())
    }

    fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.pixmap.data_as_u8_slice_mut().fill(0);
        }
    }

    fn render_particles(&mut self, particles: &[Particle]) -> GlowResult<()> {
        let Some(mut surface) = self.surface.take() else {
            return Ok(());
        };
        let ratio = surface.size.device_pixel_ratio;
        let width = surface.pixmap.width();
        let height = surface.pixmap.height();

        let res = self.with_ctx_mut(width, height, |this, ctx| {
            ctx.set_blend_mode(glow_blend());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for p in particles {
                let sprite = this.glow_sprite(p.color, p.radius * ratio)?;
                let half = f64::from(sprite.side) / 2.0;
                let origin = Affine::translate((p.pos.x * ratio - half, p.pos.y * ratio - half));
                ctx.set_transform(affine_to_cpu(origin));
                ctx.set_paint(sprite.paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(sprite.side),
                    f64::from(sprite.side),
                ));
                this.stats.draw_calls += 1;
            }
            ctx.flush();
            surface.pixmap.data_as_u8_slice_mut().fill(0);
            ctx.render_to_pixmap(&mut surface.pixmap);
            Ok(())
        });
        self.surface = Some(surface);
        res?;

        self.stats.frames += 1;
        Ok(())
    }

    fn snapshot(&self) -> Option<FrameRGBA> {
        let surface = self.surface.as_ref()?;
        Some(FrameRGBA {
            width: u32::from(surface.pixmap.width()),
            height: u32::from(surface.pixmap.height()),
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn stats(&self) -> RenderStats {
        RenderStats {
            sprites_cached: self.sprite_cache.len(),
            ..self.stats
        }
    }
}

/// Additive ("lighter") compositing for glow discs.
fn glow_blend() -> vello_cpu::peniko::BlendMode {
    vello_cpu::peniko::BlendMode::new(
        vello_cpu::peniko::Mix::Normal,
        vello_cpu::peniko::Compose::Plus,
    )
}

fn glow_side(radius: f64) -> u32 {
    ((radius * 2.0).ceil() as u32).max(1)
}

/// Premultiplied RGBA8 bytes of a square sprite holding one glow disc centered in it.
fn rasterize_glow(color: Rgb8, radius: f64, style: &GlowStyle) -> Vec<u8> {
    let side = glow_side(radius);
    let center = f64::from(side) / 2.0;
    let mut bytes = vec![0u8; (side as usize) * (side as usize) * 4];
    for y in 0..side {
        let dy = f64::from(y) + 0.5 - center;
        for x in 0..side {
            let dx = f64::from(x) + 0.5 - center;
            let cov = style.coverage(dx.hypot(dy), radius);
            if cov <= 0.0 {
                continue;
            }
            let a = (f64::from(style.core_alpha) * cov).round().clamp(0.0, 255.0) as u8;
            let px = color.with_alpha(a);
            let idx = ((y as usize) * (side as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
    }
    bytes
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> GlowResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| GlowError::evaluation("sprite width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| GlowError::evaluation("sprite height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(GlowError::evaluation("sprite byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> GlowResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
