//! Configuration loading and settings resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument or its environment variable (handled by the binary)
//! 2. TOML config file
//! 3. Compiled default
//!
//! The config file itself is located by: explicit path, then the `MMP_CONFIG`
//! environment variable, then `<config dir>/mmp/config.toml`. A missing default
//! file is normal; a malformed file is ignored and reported in
//! [`Settings::warnings`], since resolution runs before logging is set up.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::events::RendererKind;
use crate::{Error, Result};

/// Environment variable naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "MMP_CONFIG";

/// How playback events are written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per event
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `[logging]` table of the config file
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Config file contents; every key is optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub renderer: Option<RendererKind>,
    pub output_format: Option<OutputFormat>,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Compiled defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub renderer: RendererKind,
    pub output_format: OutputFormat,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            renderer: RendererKind::Hardware,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/// Values supplied on the command line (or through their environment variables)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub renderer: Option<RendererKind>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

/// Fully resolved settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub renderer: RendererKind,
    pub output_format: OutputFormat,
    pub log_level: String,
    /// Config file that contributed values, if any
    pub config_file: Option<PathBuf>,
    /// Problems found while resolving, for the caller to log
    pub warnings: Vec<String>,
}

/// Locates the config file and merges it with overrides and defaults
pub struct SettingsResolver {
    explicit_path: Option<PathBuf>,
}

impl SettingsResolver {
    /// Create a resolver; `explicit_path` comes from `--config`
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }

    /// Config file location, or None when no candidate exists
    ///
    /// An explicitly named file (argument or `MMP_CONFIG`) must exist.
    pub fn config_path(&self) -> Result<Option<PathBuf>> {
        let named = self
            .explicit_path
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        if let Some(path) = named {
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        Ok(default_config_path().filter(|p| p.exists()))
    }

    /// Resolve settings: overrides > config file > compiled defaults
    pub fn resolve(&self, overrides: Overrides) -> Result<Settings> {
        let defaults = CompiledDefaults::default();
        let path = self.config_path()?;
        let mut warnings = Vec::new();

        let file = match &path {
            Some(p) => match TomlConfig::load(p) {
                Ok(config) => {
                    debug!("Loaded config file {}", p.display());
                    Some(config)
                }
                Err(e) => {
                    let message = format!("Ignoring config file {}: {}", p.display(), e);
                    warn!("{}", message);
                    warnings.push(message);
                    None
                }
            },
            None => {
                debug!("No config file found, using defaults");
                None
            }
        };
        let config_file = file.as_ref().and(path);
        let file = file.unwrap_or_default();

        Ok(Settings {
            renderer: overrides
                .renderer
                .or(file.renderer)
                .unwrap_or(defaults.renderer),
            output_format: overrides
                .output_format
                .or(file.output_format)
                .unwrap_or(defaults.output_format),
            log_level: overrides
                .log_level
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            config_file,
            warnings,
        })
    }
}

/// Platform config file location: `<config dir>/mmp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mmp").join("config.toml"))
}
