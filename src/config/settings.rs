use crate::animation::refresh::refresh_interval;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{GlowError, GlowResult};
use crate::ideas::catalog::ToneFilter;
use crate::palette::store::PRESETS;
use crate::render::backend::GlowStyle;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Container size and pixel density for offscreen runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Container width in logical pixels.
    pub width: f64,
    /// Container height in logical pixels.
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 360.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl SurfaceConfig {
    /// As a [`SurfaceSize`].
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height, self.device_pixel_ratio)
    }
}

/// Everything a playground run needs. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Drawing surface.
    pub surface: SurfaceConfig,
    /// Index into the palette presets.
    pub palette: usize,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Frames rendered by `render`.
    pub frames: u64,
    /// Display refresh rate used for real-time pacing.
    pub refresh_hz: Option<f64>,
    /// Initial idea filter.
    pub tone: ToneFilter,
    /// Glow appearance.
    pub glow: GlowStyle,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            palette: 0,
            seed: None,
            frames: 120,
            refresh_hz: Some(60.0),
            tone: ToneFilter::All,
            glow: GlowStyle::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> GlowResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| GlowError::serde(format!("parse playground config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(s: &str) -> GlowResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse from a JSON file on disk and validate.
    pub fn from_path(path: impl AsRef<Path>) -> GlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlowError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field range.
    pub fn validate(&self) -> GlowResult<()> {
        let s = &self.surface;
        if !(s.width.is_finite() && s.width >= 0.0 && s.height.is_finite() && s.height >= 0.0) {
            return Err(GlowError::validation(
                "surface width/height must be finite and >= 0",
            ));
        }
        if !(s.device_pixel_ratio.is_finite() && s.device_pixel_ratio > 0.0) {
            return Err(GlowError::validation(
                "surface device_pixel_ratio must be > 0",
            ));
        }
        if self.palette >= PRESETS.len() {
            return Err(GlowError::validation(format!(
                "palette must be < {}",
                PRESETS.len()
            )));
        }
        if let Some(hz) = self.refresh_hz {
            refresh_interval(hz)?;
        }
        self.glow.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
