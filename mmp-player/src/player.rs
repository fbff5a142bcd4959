//! Player: renderer selection plus playback of item trees

use mmp_common::EventSink;
use tracing::{debug, info};

use crate::error::Result;
use crate::item::Playable;
use crate::renderer::{self, Renderer};

/// Content tag handed to the renderer for each play request
pub const RENDER_CONTENT: &str = "Media data";

/// Plays items through the current renderer
#[derive(Debug, Clone)]
pub struct Player {
    renderer: Renderer,
    plays_completed: u64,
}

impl Player {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            plays_completed: 0,
        }
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Replace the renderer used by subsequent play calls
    pub fn set_renderer(&mut self, renderer: Renderer) {
        if renderer != self.renderer {
            info!("Renderer switched: {} -> {}", self.renderer, renderer);
        }
        self.renderer = renderer;
    }

    /// Swap hardware/software and return the new renderer
    pub fn toggle_renderer(&mut self) -> Renderer {
        self.set_renderer(self.renderer.toggled());
        self.renderer
    }

    /// Number of play requests that ran to completion
    pub fn plays_completed(&self) -> u64 {
        self.plays_completed
    }

    /// Render once, then play the whole item tree
    pub fn play(&mut self, item: &mut dyn Playable, sink: &mut dyn EventSink) -> Result<()> {
        debug!(
            "Play request: {} leaf item(s), renderer {}",
            item.leaf_count(),
            self.renderer
        );
        renderer::render(self.renderer, RENDER_CONTENT, sink)?;
        item.play(sink)?;
        self.plays_completed += 1;
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Renderer::default())
    }
}
