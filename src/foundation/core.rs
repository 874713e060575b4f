use crate::foundation::error::{GlowError, GlowResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Monotonic 0-based index of an animation frame since the loop was first started.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The next frame index (saturating).
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Drawing-surface dimensions: the container's logical size plus the device pixel ratio.
///
/// The pixel buffer is `logical * device_pixel_ratio`, truncated to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Container width in logical (CSS) pixels.
    pub width: f64,
    /// Container height in logical (CSS) pixels.
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    /// Build a surface size. A missing or nonsensical pixel ratio falls back to `1.0`, and
    /// negative or non-finite dimensions collapse to zero.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        fn dim(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: dim(width),
            height: dim(height),
            device_pixel_ratio: ratio,
        }
    }

    /// Logical size used by the simulation for bounds and wraparound.
    pub fn logical(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel-buffer width. Errors when it does not fit in `u32`.
    pub fn pixel_width(self) -> GlowResult<u32> {
        to_pixels(self.width * self.device_pixel_ratio, "surface width")
    }

    /// Pixel-buffer height. Errors when it does not fit in `u32`.
    pub fn pixel_height(self) -> GlowResult<u32> {
        to_pixels(self.height * self.device_pixel_ratio, "surface height")
    }

    /// Return `true` when the pixel buffer would have no pixels.
    pub fn is_empty(self) -> bool {
        let ratio = self.device_pixel_ratio;
        self.width * ratio < 1.0 || self.height * ratio < 1.0
    }
}

fn to_pixels(v: f64, what: &str) -> GlowResult<u32> {
    let px = v.floor();
    if px > f64::from(u32::MAX) {
        return Err(GlowError::evaluation(format!("{what} of {px} px exceeds u32")));
    }
    Ok(px as u32)
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Convert back to straight alpha (used when writing PNG files).
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = u16::from(self.a);
        let unpremul = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
