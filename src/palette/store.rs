use crate::foundation::error::{GlowError, GlowResult};
use crate::palette::color::Rgb8;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of colors in every palette.
pub const PALETTE_LEN: usize = 4;

/// An ordered set of exactly four colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [Rgb8; PALETTE_LEN]);

impl Palette {
    /// Colors in palette order.
    pub fn colors(&self) -> &[Rgb8; PALETTE_LEN] {
        &self.0
    }

    /// Color at `i`, if any.
    pub fn get(&self, i: usize) -> Option<Rgb8> {
        self.0.get(i).copied()
    }

    /// Return `true` when `c` is one of this palette's colors.
    pub fn contains(&self, c: Rgb8) -> bool {
        self.0.contains(&c)
    }

    /// Pick one of the four colors uniformly at random.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb8 {
        self.0[rng.gen_range(0..PALETTE_LEN)]
    }
}

/// Built-in palettes, in picker order.
pub const PRESETS: [Palette; 4] = [
    Palette([
        Rgb8::from_u32(0x0E0B16),
        Rgb8::from_u32(0x4717F6),
        Rgb8::from_u32(0xA239CA),
        Rgb8::from_u32(0xFFFDFF),
    ]),
    Palette([
        Rgb8::from_u32(0x001514),
        Rgb8::from_u32(0xFBFFFE),
        Rgb8::from_u32(0xACFCD9),
        Rgb8::from_u32(0x76E7CD),
    ]),
    Palette([
        Rgb8::from_u32(0x202020),
        Rgb8::from_u32(0xF46036),
        Rgb8::from_u32(0x2E294E),
        Rgb8::from_u32(0x1B998B),
    ]),
    Palette([
        Rgb8::from_u32(0x011627),
        Rgb8::from_u32(0xFDFFFC),
        Rgb8::from_u32(0x2EC4B6),
        Rgb8::from_u32(0xE71D36),
    ]),
];

/// Holds the active preset. The selected index is always a valid index into [`PRESETS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteStore {
    index: usize,
}

impl PaletteStore {
    /// Store with preset 0 selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with preset `index` selected.
    pub fn with_index(index: usize) -> GlowResult<Self> {
        let mut store = Self::new();
        store.select(index)?;
        Ok(store)
    }

    /// All presets.
    pub fn presets(&self) -> &'static [Palette] {
        &PRESETS
    }

    /// Index of the active preset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active palette.
    pub fn current(&self) -> Palette {
        PRESETS[self.index]
    }

    /// Select preset `index`.
    ///
    /// Returns `Ok(true)` when the selection changed. Out-of-range indices are rejected and
    /// leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> GlowResult<bool> {
        if index >= PRESETS.len() {
            return Err(GlowError::validation(format!(
                "palette index {index} out of range (0..{})",
                PRESETS.len()
            )));
        }
        let changed = self.index != index;
        self.index = index;
        Ok(changed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/store.rs"]
mod tests;
