//! Rendering backends
//!
//! The renderer is chosen per session and invoked by the player once per play
//! request. Items never hold a renderer, so switching affects only later plays.

use mmp_common::{EventSink, PlaybackEvent};

pub use mmp_common::RendererKind as Renderer;

use crate::error::Result;

/// Render content through the given backend
pub fn render(renderer: Renderer, content: &str, sink: &mut dyn EventSink) -> Result<()> {
    sink.emit(PlaybackEvent::Rendered {
        renderer,
        content: content.to_string(),
    })?;
    Ok(())
}
