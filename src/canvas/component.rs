use crate::animation::frame_loop::FrameLoop;
use crate::canvas::host::SurfaceHost;
use crate::field::particle::Particle;
use crate::field::sim::ParticleField;
use crate::foundation::core::{FrameIndex, SurfaceSize};
use crate::foundation::error::GlowResult;
use crate::palette::store::Palette;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderStats};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of one [`GenerativeCanvas::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A frame was simulated and painted.
    Rendered(FrameIndex),
    /// No frame was pending (not mounted, or cancelled).
    Idle,
    /// The container went away; the loop stopped without re-requesting.
    Stopped,
}

/// The glowing particle canvas: a particle field bound to a drawing surface and a frame loop.
///
/// The component exclusively owns the particle batch; it is only mutated inside
/// [`step`](Self::step) and the lifecycle methods.
pub struct GenerativeCanvas {
    field: ParticleField,
    rng: StdRng,
    backend: Box<dyn RenderBackend>,
    frame_loop: FrameLoop,
    palette: Palette,
    mounted: bool,
    surface: Option<SurfaceSize>,
    next_frame: FrameIndex,
}

impl GenerativeCanvas {
    /// Unmounted canvas. `seed` makes particle placement reproducible.
    pub fn new(palette: Palette, backend: Box<dyn RenderBackend>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            field: ParticleField::new(),
            rng,
            backend,
            frame_loop: FrameLoop::new(),
            palette,
            mounted: false,
            surface: None,
            next_frame: FrameIndex(0),
        }
    }

    /// Attach to `host`: size the surface, seed the field, start the loop.
    ///
    /// Without a container this does nothing.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn mount(&mut self, host: &dyn SurfaceHost) -> GlowResult<()> {
        let Some(size) = host.surface_size() else {
            tracing::debug!("no container; mount skipped");
            return Ok(());
        };
        self.backend.resize(size)?;
        self.field.seed(size.logical(), &self.palette, &mut self.rng);
        self.surface = Some(size);
        self.mounted = true;
        self.frame_loop.request();
        tracing::debug!(particles = self.field.len(), "canvas mounted");
        Ok(())
    }

    /// Container resized: resize and clear the pixel buffer. Particle positions are kept.
    pub fn handle_resize(&mut self, host: &dyn SurfaceHost) -> GlowResult<()> {
        if !self.mounted {
            return Ok(());
        }
        let Some(size) = host.surface_size() else {
            return Ok(());
        };
        self.backend.resize(size)?;
        self.surface = Some(size);
        Ok(())
    }

    /// Switch palettes: stop the loop, clear the surface, seed a fresh batch in the new
    /// colors and restart the loop. Unmounted canvases only remember the palette.
    ///
    /// Returns `false` when `palette` is already active.
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        if palette == self.palette {
            return false;
        }
        let was_running = self.frame_loop.cancel().is_some();
        self.palette = palette;
        if let Some(size) = self.surface
            && self.mounted
        {
            self.backend.clear();
            self.field.seed(size.logical(), &self.palette, &mut self.rng);
            self.frame_loop.request();
        }
        tracing::debug!(was_running, particles = self.field.len(), "palette applied");
        true
    }

    /// Run the pending frame callback, if any: advance, paint, request the next frame.
    pub fn step(&mut self, host: &dyn SurfaceHost) -> GlowResult<StepOutcome> {
        if self.frame_loop.fire().is_none() {
            return Ok(StepOutcome::Idle);
        }
        let Some(bounds) = host.container_size() else {
            tracing::debug!("container detached; animation stopped");
            return Ok(StepOutcome::Stopped);
        };

        self.field.advance(bounds);
        self.backend.render_particles(self.field.particles())?;

        let idx = self.next_frame;
        self.next_frame = idx.next();
        self.frame_loop.request();
        Ok(StepOutcome::Rendered(idx))
    }

    /// Detach: stop the loop and drop the particles.
    pub fn unmount(&mut self) {
        self.frame_loop.cancel();
        self.field.clear();
        self.surface = None;
        self.mounted = false;
        tracing::debug!("canvas unmounted");
    }

    /// Return `true` after a successful mount and before unmount.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Return `true` while a frame is pending.
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Active palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    /// Copy of the last painted pixels, if a surface exists.
    pub fn frame(&self) -> Option<FrameRGBA> {
        self.backend.snapshot()
    }

    /// Backend counters.
    pub fn stats(&self) -> RenderStats {
        self.backend.stats()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/component.rs"]
mod tests;
