//! # Modular Media Player Library (mmp-player)
//!
//! Builds playable media items by composition and plays them.
//!
//! **Purpose:** Assemble a leaf from a source, an optional caching proxy and
//! optional processing features; collect leaves into (nested) playlists; play
//! any item tree through a switchable renderer.
//!
//! **Architecture:** Closed sum types at every layer:
//! `Source` → `Provider` (direct or cached) → `ProcessingStep` chain →
//! `PlayableItem` tree, with all effects reported as `PlaybackEvent`s.

pub mod cache;
pub mod console;
pub mod error;
pub mod item;
pub mod player;
pub mod processing;
pub mod renderer;
pub mod request;
pub mod session;
pub mod source;

pub use cache::{CachedSource, Provider};
pub use error::{Error, Result};
pub use item::{Group, Leaf, Playable, PlayableItem};
pub use player::Player;
pub use processing::{FeatureSet, ProcessingStep};
pub use renderer::Renderer;
pub use request::ItemRequest;
pub use session::Session;
pub use source::{Content, Source};
