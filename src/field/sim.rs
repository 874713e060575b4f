use crate::field::particle::Particle;
use crate::foundation::core::{Point, Size, Vec2};
use crate::palette::store::Palette;
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::Range;

/// Particles created per seed.
pub const PARTICLE_COUNT: usize = 64;
/// Speed range in pixels per frame.
pub const SPEED_RANGE: Range<f64> = 0.15..0.5;
/// Glow radius range in logical pixels.
pub const RADIUS_RANGE: Range<f64> = 18.0..60.0;

/// The particle swarm.
///
/// Owned by a single canvas component and only mutated through its methods.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current particles in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Return `true` when no particles exist.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace the whole batch with [`PARTICLE_COUNT`] fresh particles inside `bounds`.
    ///
    /// Bounds without area produce an empty field.
    #[tracing::instrument(level = "debug", skip(self, palette, rng))]
    pub fn seed<R: Rng + ?Sized>(&mut self, bounds: Size, palette: &Palette, rng: &mut R) {
        self.particles.clear();
        if !(bounds.width > 0.0 && bounds.height > 0.0) {
            tracing::debug!("bounds have no area; field left empty");
            return;
        }

        self.particles.reserve(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(SPEED_RANGE);
            self.particles.push(Particle {
                pos: Point::new(
                    rng.gen_range(0.0..bounds.width),
                    rng.gen_range(0.0..bounds.height),
                ),
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
                radius: rng.gen_range(RADIUS_RANGE),
                color: palette.random_color(rng),
            });
        }
    }

    /// Advance every particle by one frame inside `bounds`.
    pub fn advance(&mut self, bounds: Size) {
        for p in &mut self.particles {
            p.advance(bounds);
        }
    }

    /// Give every particle a new random color from `palette`, keeping its motion and size.
    pub fn recolor<R: Rng + ?Sized>(&mut self, palette: &Palette, rng: &mut R) {
        for p in &mut self.particles {
            p.color = palette.random_color(rng);
        }
    }

    /// Drop all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/sim.rs"]
mod tests;
