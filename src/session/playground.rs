use crate::animation::refresh::RefreshDriver;
use crate::canvas::component::{GenerativeCanvas, StepOutcome};
use crate::canvas::host::{FixedHost, SurfaceHost};
use crate::config::settings::PlaygroundConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Size};
use crate::foundation::error::{GlowError, GlowResult};
use crate::ideas::catalog::{IdeaBoard, IdeaCard, ToneFilter};
use crate::palette::store::{Palette, PaletteStore};
use crate::render::backend::{BackendKind, FrameRGBA, RenderSettings, create_backend};

/// Highest frame index [`Playground::render_frame`] will step to.
pub const MAX_SEEK_FRAME: u64 = 1_000_000;

/// Range run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames the caller asked for.
    pub frames_requested: u64,
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// `true` when the loop stopped before the requested count.
    pub stopped_early: bool,
}

/// The whole playground: palette picker state, the particle canvas and the idea board.
///
/// The palette store is the root of shared state; the canvas and the board only read it.
pub struct Playground {
    palettes: PaletteStore,
    canvas: GenerativeCanvas,
    board: IdeaBoard,
    host: FixedHost,
}

impl Playground {
    /// Build an unmounted playground from `cfg`.
    pub fn new(cfg: &PlaygroundConfig) -> GlowResult<Self> {
        cfg.validate()?;
        let palettes = PaletteStore::with_index(cfg.palette)?;
        let settings = RenderSettings { glow: cfg.glow };
        let backend = create_backend(BackendKind::Cpu, &settings)?;
        let canvas = GenerativeCanvas::new(palettes.current(), backend, cfg.seed);
        let mut board = IdeaBoard::new();
        board.select(cfg.tone);
        let s = cfg.surface;
        Ok(Self {
            palettes,
            canvas,
            board,
            host: FixedHost::new(s.width, s.height, s.device_pixel_ratio),
        })
    }

    /// Mount the canvas onto the configured surface.
    pub fn mount(&mut self) -> GlowResult<()> {
        self.canvas.mount(&self.host)
    }

    /// Unmount the canvas.
    pub fn unmount(&mut self) {
        self.canvas.unmount();
    }

    /// Pick palette preset `index` and propagate it to the canvas.
    ///
    /// Returns `Ok(true)` when the palette changed.
    pub fn select_palette(&mut self, index: usize) -> GlowResult<bool> {
        let changed = self.palettes.select(index)?;
        if changed {
            self.canvas.set_palette(self.palettes.current());
        }
        Ok(changed)
    }

    /// Change the idea filter.
    pub fn select_tone(&mut self, filter: ToneFilter) {
        self.board.select(filter);
    }

    /// Resize (or detach, with `None`) the container.
    pub fn resize(&mut self, size: Option<Size>, device_pixel_ratio: f64) -> GlowResult<()> {
        self.host.set_container(size);
        self.host.set_device_pixel_ratio(device_pixel_ratio);
        self.canvas.handle_resize(&self.host)
    }

    /// Active palette.
    pub fn palette(&self) -> Palette {
        self.palettes.current()
    }

    /// Palette store.
    pub fn palettes(&self) -> &PaletteStore {
        &self.palettes
    }

    /// The particle canvas.
    pub fn canvas(&self) -> &GenerativeCanvas {
        &self.canvas
    }

    /// Visible idea cards, accented with the active palette.
    pub fn ideas(&self) -> Vec<IdeaCard> {
        self.board.cards(&self.palettes.current())
    }

    /// Run up to `frames` loop iterations, streaming every painted frame into `sink`.
    #[tracing::instrument(level = "debug", skip(self, driver, sink))]
    pub fn run(
        &mut self,
        frames: u64,
        driver: &mut dyn RefreshDriver,
        sink: &mut dyn FrameSink,
    ) -> GlowResult<RunStats> {
        let (width, height) = match self.host.surface_size() {
            Some(s) => (s.pixel_width()?, s.pixel_height()?),
            None => (0, 0),
        };
        sink.begin(SinkConfig {
            width,
            height,
            frames,
        })?;

        let mut stats = RunStats {
            frames_requested: frames,
            ..RunStats::default()
        };
        for _ in 0..frames {
            driver.wait_for_refresh();
            match self.canvas.step(&self.host)? {
                StepOutcome::Rendered(idx) => {
                    if let Some(frame) = self.canvas.frame() {
                        sink.push_frame(idx, &frame)?;
                        stats.frames_rendered += 1;
                    }
                }
                StepOutcome::Idle | StepOutcome::Stopped => {
                    stats.stopped_early = true;
                    break;
                }
            }
        }
        sink.end()?;

        tracing::debug!(?stats, "run finished");
        Ok(stats)
    }

    /// Step the loop until a frame with index `>= idx` is painted and return it.
    ///
    /// The simulation has no closed form, so the cost is linear in `idx`; indices above
    /// [`MAX_SEEK_FRAME`] are rejected.
    pub fn render_frame(&mut self, idx: FrameIndex) -> GlowResult<FrameRGBA> {
        if idx.0 > MAX_SEEK_FRAME {
            return Err(GlowError::validation(format!(
                "frame {} is beyond the seek limit of {MAX_SEEK_FRAME}",
                idx.0
            )));
        }
        loop {
            match self.canvas.step(&self.host)? {
                StepOutcome::Rendered(done) if done >= idx => break,
                StepOutcome::Rendered(_) => {}
                StepOutcome::Idle | StepOutcome::Stopped => {
                    return Err(GlowError::evaluation(
                        "animation loop is not running (is the canvas mounted?)",
                    ));
                }
            }
        }
        self.canvas
            .frame()
            .ok_or_else(|| GlowError::evaluation("surface has no pixels"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playground.rs"]
mod tests;
