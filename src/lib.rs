//! glowfield is a small generative playground: palette presets, a drifting swarm of glowing
//! particles rasterized on the CPU, and a filterable board of idea prompts.
//!
//! # Pieces
//!
//! 1. **Palette store**: one of four fixed four-color presets ([`PaletteStore`]).
//! 2. **Particle field**: 64 particles seeded inside the surface bounds, advanced one frame at a
//!    time with toroidal wraparound ([`ParticleField`]).
//! 3. **Generative canvas**: binds the field to a [`SurfaceHost`], a [`RenderBackend`] and a
//!    [`FrameLoop`] with mount/resize/palette/unmount lifecycle ([`GenerativeCanvas`]).
//! 4. **Idea catalog**: four static records filtered by [`Tone`] ([`IdeaCatalog`], [`IdeaBoard`]).
//! 5. **Playground**: owns all of the above and streams frames into a [`FrameSink`].
//!
//! Velocity is expressed in pixels per frame, so motion speed follows the refresh rate.
//! Missing containers and zero-area surfaces are silent no-ops rather than errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod canvas;
mod config;
mod encode;
mod field;
mod foundation;
mod ideas;
mod palette;
mod render;
mod session;

pub use animation::frame_loop::{FrameLoop, FrameRequest};
pub use animation::refresh::{FixedRefresh, RefreshDriver, Unpaced};
pub use canvas::component::{GenerativeCanvas, StepOutcome};
pub use canvas::host::{FixedHost, SurfaceHost};
pub use config::settings::{PlaygroundConfig, SurfaceConfig};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use field::particle::Particle;
pub use field::sim::{PARTICLE_COUNT, ParticleField, RADIUS_RANGE, SPEED_RANGE};
pub use foundation::core::{
    Affine, FrameIndex, Point, Rect, Rgba8Premul, Size, SurfaceSize, Vec2,
};
pub use foundation::error::{GlowError, GlowResult};
pub use ideas::catalog::{Idea, IdeaBoard, IdeaCard, IdeaCatalog, Tone, ToneFilter};
pub use palette::color::Rgb8;
pub use palette::store::{PALETTE_LEN, PRESETS, Palette, PaletteStore};
pub use render::backend::{
    BackendKind, FrameRGBA, GlowStyle, RenderBackend, RenderSettings, RenderStats, create_backend,
};
pub use render::cpu::CpuBackend;
pub use session::playground::{MAX_SEEK_FRAME, Playground, RunStats};
