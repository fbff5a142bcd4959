//! Playback event vocabulary
//!
//! Everything observable during playback (rendering, cache activity, base
//! processing and feature effects) is reported as a [`PlaybackEvent`] and
//! delivered to an [`EventSink`]. The console prints them; tests record them.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Origin kind of a media source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// File on local storage
    Local,
    /// HTTP Live Streaming URL
    Hls,
    /// Remote API endpoint
    Api,
}

impl SourceKind {
    /// Parse the menu keyword (`local`, `hls`, `api`), ignoring case and surrounding whitespace
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Some(SourceKind::Local),
            "hls" => Some(SourceKind::Hls),
            "api" => Some(SourceKind::Api),
            _ => None,
        }
    }

    /// Menu keyword for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Hls => "hls",
            SourceKind::Api => "api",
        }
    }

    /// Whether content comes over the network (and may be proxy-cached)
    pub fn is_remote(&self) -> bool {
        !matches!(self, SourceKind::Local)
    }

    /// Get all source kinds in menu order
    pub fn all_variants() -> &'static [SourceKind] {
        &[SourceKind::Local, SourceKind::Hls, SourceKind::Api]
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional processing feature layered over a base processing step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Subtitles,
    Equalizer,
    Watermark,
}

impl Feature {
    /// Get all features in attachment order
    ///
    /// The control loop asks about (and attaches) features in exactly this order.
    pub fn all_variants() -> &'static [Feature] {
        &[Feature::Subtitles, Feature::Equalizer, Feature::Watermark]
    }

    /// Short effect tag
    pub fn tag(&self) -> &'static str {
        match self {
            Feature::Subtitles => "subtitles rendered",
            Feature::Equalizer => "equalizer applied",
            Feature::Watermark => "watermark added",
        }
    }

    /// Console line printed when the feature takes effect
    pub fn effect_line(&self) -> &'static str {
        match self {
            Feature::Subtitles => "Rendering subtitles.",
            Feature::Equalizer => "Applying audio equalizer.",
            Feature::Watermark => "Adding watermark.",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Subtitles => write!(f, "subtitles"),
            Feature::Equalizer => write!(f, "equalizer"),
            Feature::Watermark => write!(f, "watermark"),
        }
    }
}

/// Rendering backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    Hardware,
    Software,
}

impl RendererKind {
    /// Parse renderer name (`hardware`/`hw`, `software`/`sw`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hardware" | "hw" => Some(RendererKind::Hardware),
            "software" | "sw" => Some(RendererKind::Software),
            _ => None,
        }
    }

    /// The other backend
    pub fn toggled(&self) -> Self {
        match self {
            RendererKind::Hardware => RendererKind::Software,
            RendererKind::Software => RendererKind::Hardware,
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RendererKind::Hardware => "Hardware",
            RendererKind::Software => "Software",
        }
    }
}

impl std::fmt::Display for RendererKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Observable playback effect
///
/// Serialized with an internal `type` tag for the JSON output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaybackEvent {
    /// Renderer invoked for a play request
    Rendered {
        renderer: RendererKind,
        content: String,
    },

    /// First fetch through a caching proxy stored the content
    DataCached { origin: String },

    /// Caching proxy answered from its stored content
    CacheHit { origin: String },

    /// Base processing step consumed fetched content
    Processed { content: String },

    /// Feature wrapper took effect
    FeatureApplied { feature: Feature },
}

impl PlaybackEvent {
    /// Short effect tag (stable, independent of output format)
    pub fn tag(&self) -> &'static str {
        match self {
            PlaybackEvent::Rendered { .. } => "rendered",
            PlaybackEvent::DataCached { .. } => "data cached",
            PlaybackEvent::CacheHit { .. } => "using cached data",
            PlaybackEvent::Processed { .. } => "processed",
            PlaybackEvent::FeatureApplied { feature } => feature.tag(),
        }
    }
}

impl std::fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackEvent::Rendered { renderer, content } => {
                write!(f, "{} rendering: {}", renderer, content)
            }
            PlaybackEvent::DataCached { .. } => write!(f, "Caching remote data."),
            PlaybackEvent::CacheHit { .. } => write!(f, "Using cached data."),
            PlaybackEvent::Processed { content } => write!(f, "Processing: {}", content),
            PlaybackEvent::FeatureApplied { feature } => write!(f, "{}", feature.effect_line()),
        }
    }
}

/// Destination for playback events
///
/// Emission is fallible: a sink backed by a writer reports I/O failures,
/// which abort the play request in progress.
pub trait EventSink {
    fn emit(&mut self, event: PlaybackEvent) -> Result<()>;
}

/// In-memory recording sink
impl EventSink for Vec<PlaybackEvent> {
    fn emit(&mut self, event: PlaybackEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}
