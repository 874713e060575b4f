use crate::foundation::error::{GlowError, GlowResult};
use crate::palette::color::Rgb8;
use crate::palette::store::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood tag used to filter ideas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Soft, drifting moods.
    Dreamy,
    /// Motion-heavy, energetic pieces.
    Kinetic,
    /// Toy-like, remixable pieces.
    Playful,
    /// Reduced, quiet pieces.
    Minimal,
}

impl Tone {
    /// Tones in filter-button order.
    pub const ALL: [Tone; 4] = [Tone::Dreamy, Tone::Kinetic, Tone::Playful, Tone::Minimal];

    /// Machine name (`dreamy`, `kinetic`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Dreamy => "dreamy",
            Tone::Kinetic => "kinetic",
            Tone::Playful => "playful",
            Tone::Minimal => "minimal",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Dreamy => "Dreamy",
            Tone::Kinetic => "Kinetic",
            Tone::Playful => "Playful",
            Tone::Minimal => "Minimalist",
        }
    }
}

/// Either every idea or one tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToneFilter {
    /// No filtering.
    #[default]
    All,
    /// Only ideas with this tone.
    Only(Tone),
}

impl ToneFilter {
    /// Filters in button order: `All` first, then each tone.
    pub fn choices() -> [ToneFilter; 5] {
        [
            ToneFilter::All,
            ToneFilter::Only(Tone::Dreamy),
            ToneFilter::Only(Tone::Kinetic),
            ToneFilter::Only(Tone::Playful),
            ToneFilter::Only(Tone::Minimal),
        ]
    }

    /// Return `true` when `tone` passes this filter.
    pub fn matches(self, tone: Tone) -> bool {
        match self {
            ToneFilter::All => true,
            ToneFilter::Only(t) => t == tone,
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ToneFilter::All => "All",
            ToneFilter::Only(t) => t.label(),
        }
    }
}

impl fmt::Display for ToneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneFilter::All => f.write_str("all"),
            ToneFilter::Only(t) => f.write_str(t.as_str()),
        }
    }
}

impl FromStr for ToneFilter {
    type Err = GlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(ToneFilter::All);
        }
        Tone::ALL
            .into_iter()
            .find(|t| s.eq_ignore_ascii_case(t.as_str()))
            .map(ToneFilter::Only)
            .ok_or_else(|| {
                GlowError::validation(format!(
                    "unknown tone \"{s}\" (expected all|dreamy|kinetic|playful|minimal)"
                ))
            })
    }
}

impl Serialize for ToneFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ToneFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A static prompt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Idea {
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Call-to-action button text.
    pub cta: &'static str,
    /// Filter tag.
    pub tone: Tone,
}

const BASE_IDEAS: [Idea; 4] = [
    Idea {
        title: "Pulse Atlas",
        description: "Map ambient energy across a city and turn live data into harmonic waves that dance with every passerby.",
        cta: "Prototype the soundscape",
        tone: Tone::Kinetic,
    },
    Idea {
        title: "Fragment Stories",
        description: "Collect micro-moments from strangers and weave them into shimmering narrative tapestries in real time.",
        cta: "Spin the next tale",
        tone: Tone::Dreamy,
    },
    Idea {
        title: "Echo Garden",
        description: "Plant voice notes like seeds, let them grow into interactive blooms that visitors can remix and re-seed.",
        cta: "Plant a whisper",
        tone: Tone::Playful,
    },
    Idea {
        title: "Signal Loom",
        description: "Translate the hidden rhythms of APIs into living textiles that shift with server mood swings.",
        cta: "Weave the fabric",
        tone: Tone::Minimal,
    },
];

/// The fixed list of ideas.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdeaCatalog;

impl IdeaCatalog {
    /// Every record in catalog order.
    pub fn all(&self) -> &'static [Idea] {
        &BASE_IDEAS
    }

    /// Records passing `filter`, in catalog order.
    pub fn filter(&self, filter: ToneFilter) -> Vec<&'static Idea> {
        BASE_IDEAS
            .iter()
            .filter(|idea| filter.matches(idea.tone))
            .collect()
    }
}

/// An idea plus the palette accents it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdeaCard {
    /// The record.
    pub idea: &'static Idea,
    /// First palette color.
    pub accent: Rgb8,
    /// Second palette color.
    pub accent_soft: Rgb8,
}

/// Filter selection over the catalog.
#[derive(Clone, Debug, Default)]
pub struct IdeaBoard {
    catalog: IdeaCatalog,
    selected: ToneFilter,
}

impl IdeaBoard {
    /// Board showing every idea.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter.
    pub fn selected(&self) -> ToneFilter {
        self.selected
    }

    /// Change the active filter.
    pub fn select(&mut self, filter: ToneFilter) {
        tracing::debug!(%filter, "idea filter selected");
        self.selected = filter;
    }

    /// Ideas visible under the active filter.
    pub fn visible(&self) -> Vec<&'static Idea> {
        self.catalog.filter(self.selected)
    }

    /// Visible ideas with accents taken from `palette`.
    pub fn cards(&self, palette: &Palette) -> Vec<IdeaCard> {
        let [accent, accent_soft, ..] = *palette.colors();
        self.visible()
            .into_iter()
            .map(|idea| IdeaCard {
                idea,
                accent,
                accent_soft,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ideas/catalog.rs"]
mod tests;
