//! Caching proxy for media sources
//!
//! [`CachedSource`] fetches from its inner source once and answers every later
//! fetch from the stored content. No expiry, no invalidation.
//!
//! Fetching needs `&mut self`; sharing one proxy between threads requires an
//! external lock around the whole fetch.

use mmp_common::{EventSink, PlaybackEvent};
use tracing::debug;

use crate::error::Result;
use crate::source::{Content, Source};

/// Source wrapper memoizing the first fetch
#[derive(Debug, Clone)]
pub struct CachedSource {
    inner: Source,
    cached: Option<Content>,
}

impl CachedSource {
    pub fn new(inner: Source) -> Self {
        Self {
            inner,
            cached: None,
        }
    }

    pub fn inner(&self) -> &Source {
        &self.inner
    }

    /// Whether the first fetch has happened
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Fetch content, hitting the inner source only on the first call
    ///
    /// Emits `DataCached` on the first call and `CacheHit` afterwards. The
    /// slot is filled before `DataCached` is emitted, so the inner source is
    /// hit at most once even when that emit fails; the lost `DataCached` is
    /// not replayed and later calls report `CacheHit`.
    pub fn fetch(&mut self, sink: &mut dyn EventSink) -> Result<Content> {
        let origin = self.inner.origin().to_string();

        if let Some(content) = &self.cached {
            debug!("Cache hit for {}", origin);
            sink.emit(PlaybackEvent::CacheHit { origin })?;
            return Ok(content.clone());
        }

        let content = self.inner.fetch();
        self.cached = Some(content.clone());
        debug!("Cached content for {}", origin);
        sink.emit(PlaybackEvent::DataCached { origin })?;
        Ok(content)
    }
}

/// What a base processing step pulls content from
#[derive(Debug, Clone)]
pub enum Provider {
    /// Fetch straight from the source every time
    Direct(Source),
    /// Fetch through a caching proxy
    Cached(CachedSource),
}

impl Provider {
    /// Wrap a source, optionally behind a caching proxy
    pub fn new(source: Source, cache: bool) -> Self {
        if cache {
            Provider::Cached(CachedSource::new(source))
        } else {
            Provider::Direct(source)
        }
    }

    pub fn source(&self) -> &Source {
        match self {
            Provider::Direct(source) => source,
            Provider::Cached(cached) => cached.inner(),
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Provider::Cached(_))
    }

    pub fn fetch(&mut self, sink: &mut dyn EventSink) -> Result<Content> {
        match self {
            Provider::Direct(source) => Ok(source.fetch()),
            Provider::Cached(cached) => cached.fetch(sink),
        }
    }
}
