//! Media sources
//!
//! A source produces descriptive [`Content`] for its origin. Nothing is read
//! from disk or the network; fetching always succeeds once the source exists.

use mmp_common::SourceKind;

use crate::error::{Error, Result};

/// Content produced by a fetch, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub kind: SourceKind,
    pub origin: String,
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SourceKind::Local => write!(f, "Data from local file: {}", self.origin),
            SourceKind::Hls => write!(f, "Streamed data from HLS: {}", self.origin),
            SourceKind::Api => write!(f, "Data from remote API: {}", self.origin),
        }
    }
}

/// Media source, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// File on local storage
    Local { path: String },
    /// HLS stream
    Stream { url: String },
    /// Remote API endpoint
    RemoteEndpoint { address: String },
}

impl Source {
    /// Create a source of the given kind
    ///
    /// The origin is trimmed; an empty result is rejected with `InvalidSource`.
    pub fn new(kind: SourceKind, origin: &str) -> Result<Self> {
        let origin = validate_origin(kind, origin)?.to_string();
        Ok(match kind {
            SourceKind::Local => Source::Local { path: origin },
            SourceKind::Hls => Source::Stream { url: origin },
            SourceKind::Api => Source::RemoteEndpoint { address: origin },
        })
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Local { .. } => SourceKind::Local,
            Source::Stream { .. } => SourceKind::Hls,
            Source::RemoteEndpoint { .. } => SourceKind::Api,
        }
    }

    /// Origin descriptor (path, URL or address)
    pub fn origin(&self) -> &str {
        match self {
            Source::Local { path } => path,
            Source::Stream { url } => url,
            Source::RemoteEndpoint { address } => address,
        }
    }

    /// Produce content for this origin
    pub fn fetch(&self) -> Content {
        Content {
            kind: self.kind(),
            origin: self.origin().to_string(),
        }
    }
}

/// Trimmed origin, or `InvalidSource` when nothing is left
pub fn validate_origin(kind: SourceKind, origin: &str) -> Result<&str> {
    let origin = origin.trim();
    if origin.is_empty() {
        return Err(Error::InvalidSource(format!(
            "{} origin must not be empty",
            kind
        )));
    }
    Ok(origin)
}
