//! Interactive control loop
//!
//! Text protocol over any `BufRead`/`Write` pair: a four-option menu, the
//! "add item" prompt sequence, playback and renderer switching. Session state
//! (playlist and player) lives here and nowhere else.

use std::io::{BufRead, Write};

use mmp_common::config::OutputFormat;
use mmp_common::{Feature, SourceKind};
use tracing::{debug, info, warn};

use crate::console::ConsoleSink;
use crate::error::{Error, Result};
use crate::item::{Group, Playable};
use crate::player::Player;
use crate::processing::FeatureSet;
use crate::renderer::Renderer;
use crate::request::ItemRequest;
use crate::source;

/// Name of the top-level playlist
pub const MAIN_PLAYLIST: &str = "Main Playlist";

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    Play,
    SwitchRenderer,
    Exit,
    /// Numeric but not on the menu
    Unknown(i64),
}

impl MenuChoice {
    /// Parse the main prompt answer; non-numeric input is an error
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidMenuChoice(trimmed.to_string()))?;
        Ok(match number {
            1 => MenuChoice::AddItem,
            2 => MenuChoice::Play,
            3 => MenuChoice::SwitchRenderer,
            4 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        })
    }
}

/// Whether the loop keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    playlist: Group,
    player: Player,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            playlist: Group::new(MAIN_PLAYLIST),
            player: Player::new(renderer),
            format,
        }
    }

    pub fn playlist(&self) -> &Group {
        &self.playlist
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Consume the session, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks "Exit"
    pub fn run(&mut self) -> Result<()> {
        info!("Session started (renderer: {})", self.player.renderer());
        loop {
            if self.step()? == Flow::Exit {
                break;
            }
        }
        info!(
            "Session finished: {} item(s), {} play request(s)",
            self.playlist.leaf_count(),
            self.player.plays_completed()
        );
        Ok(())
    }

    /// Show the menu, read one choice and carry it out
    pub fn step(&mut self) -> Result<Flow> {
        self.show_menu()?;
        let choice = MenuChoice::parse(&self.read_menu_line()?)?;
        debug!("Menu choice: {:?}", choice);

        let outcome = match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::Play => self.play(),
            MenuChoice::SwitchRenderer => self.switch_renderer(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting Modular Media Player. Goodbye!")?;
                self.output.flush()?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Unknown(n) => {
                debug!("Unknown menu option {}", n);
                writeln!(self.output, "Invalid option. Please choose between 1 and 4.")?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => self.report(&e)?,
            Err(e) => return Err(e),
        }
        self.output.flush()?;
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, " === Modular Media Player Menu === ")?;
        writeln!(self.output, "1. Add a new media item to playlist")?;
        writeln!(self.output, "2. Play current playlist")?;
        writeln!(
            self.output,
            "3. Switch renderer (Current: {})",
            self.player.renderer()
        )?;
        writeln!(self.output, "4. Exit")?;
        self.prompt("Choose an option (1-4): ")
    }

    /// Read the main prompt answer, skipping blank lines
    fn read_menu_line(&mut self) -> Result<String> {
        loop {
            let line = self.read_line()?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }

    /// Prompt sequence for a new leaf; appends it to the playlist
    fn add_item(&mut self) -> Result<()> {
        self.prompt("Enter media source type (local/hls/api): ")?;
        let kind = ItemRequest::parse_kind(&self.read_line()?)?;

        self.prompt(origin_prompt(kind))?;
        let origin = self.read_line()?;
        // Fail before the remaining questions are asked
        source::validate_origin(kind, &origin)?;

        let cache = kind.is_remote() && self.confirm("Enable proxy caching for this source?")?;

        let mut features = FeatureSet::none();
        for feature in Feature::all_variants() {
            let enabled = self.confirm(feature_question(*feature))?;
            features.set(*feature, enabled);
        }

        let leaf = ItemRequest::new(kind, origin)
            .cached(cache)
            .with_features(features)
            .build()?;
        self.playlist.add(leaf);

        writeln!(self.output, "Media item added successfully!")?;
        Ok(())
    }

    /// Play the whole playlist; a failure aborts only this request
    fn play(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(Error::EmptyPlaylist);
        }

        let mut sink = ConsoleSink::new(&mut self.output, self.format);
        let result = self.player.play(&mut self.playlist, &mut sink);
        if let Err(e) = result {
            warn!("Play request aborted after {} event(s): {}", sink.written(), e);
            writeln!(self.output, "Playback aborted: {}", e)?;
        }
        Ok(())
    }

    fn switch_renderer(&mut self) -> Result<()> {
        let renderer = self.player.toggle_renderer();
        writeln!(self.output, "Switched to {} renderer.", renderer)?;
        Ok(())
    }

    /// Tell the user about a recoverable error
    fn report(&mut self, err: &Error) -> Result<()> {
        debug!("Recovered: {}", err);
        match err {
            Error::InvalidSourceKind(_) => writeln!(self.output, "Invalid source type.")?,
            Error::EmptyPlaylist => {
                writeln!(self.output, "Playlist is empty. Please add media first.")?
            }
            other => writeln!(self.output, "{}", other)?,
        }
        Ok(())
    }

    /// Ask a y/n question; anything starting with "y" is yes
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompt(&format!("{} (y/n): ", question))?;
        let answer = self.read_line()?;
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

fn origin_prompt(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Local => "Enter file name: ",
        SourceKind::Hls => "Enter stream URL: ",
        SourceKind::Api => "Enter API endpoint: ",
    }
}

fn feature_question(feature: Feature) -> &'static str {
    match feature {
        Feature::Subtitles => "Add subtitles feature?",
        Feature::Equalizer => "Add audio equalizer feature?",
        Feature::Watermark => "Add watermark feature?",
    }
}
