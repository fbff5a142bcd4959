//! # MMP Common Library
//!
//! Shared code for the Modular Media Player including:
//! - Playback event vocabulary (PlaybackEvent, EventSink)
//! - Source, feature and renderer kinds
//! - Configuration loading
//! - Utility functions

pub mod config;
pub mod error;
pub mod events;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use events::{EventSink, Feature, PlaybackEvent, RendererKind, SourceKind};
