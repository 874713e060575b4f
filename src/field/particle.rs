use crate::foundation::core::{Point, Size, Vec2};
use crate::palette::color::Rgb8;

/// One drifting glow disc. Coordinates are logical pixels; velocity is pixels per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center.
    pub pos: Point,
    /// Displacement applied every frame.
    pub vel: Vec2,
    /// Outer radius of the glow.
    pub radius: f64,
    /// Glow color.
    pub color: Rgb8,
}

impl Particle {
    /// Move by one frame of velocity, then wrap around `bounds`.
    pub fn advance(&mut self, bounds: Size) {
        self.pos += self.vel;
        self.wrap(bounds);
    }

    /// Teleport to the opposite edge once fully outside `bounds` by more than the radius.
    ///
    /// Axes are handled independently, x before y.
    pub fn wrap(&mut self, bounds: Size) {
        let r = self.radius;
        if self.pos.x < -r {
            self.pos.x = bounds.width + r;
        }
        if self.pos.x > bounds.width + r {
            self.pos.x = -r;
        }
        if self.pos.y < -r {
            self.pos.y = bounds.height + r;
        }
        if self.pos.y > bounds.height + r {
            self.pos.y = -r;
        }
    }
}
