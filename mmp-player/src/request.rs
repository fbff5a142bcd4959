//! Item construction requests
//!
//! Collects the answers to the "add item" prompts and assembles the leaf:
//! source, optional caching proxy, base step, features.

use mmp_common::SourceKind;
use tracing::{debug, info};

use crate::cache::Provider;
use crate::error::{Error, Result};
use crate::item::Leaf;
use crate::processing::{FeatureSet, ProcessingStep};
use crate::source::Source;

/// Everything needed to build one playlist leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub kind: SourceKind,
    pub origin: String,
    /// Put a caching proxy in front of the source (ignored for local files)
    pub cache: bool,
    pub features: FeatureSet,
}

impl ItemRequest {
    pub fn new(kind: SourceKind, origin: impl Into<String>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            cache: false,
            features: FeatureSet::none(),
        }
    }

    pub fn cached(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    /// Parse a source kind keyword, rejecting anything but local/hls/api
    pub fn parse_kind(input: &str) -> Result<SourceKind> {
        SourceKind::from_str(input).ok_or_else(|| Error::InvalidSourceKind(input.trim().to_string()))
    }

    /// Assemble the leaf
    pub fn build(&self) -> Result<Leaf> {
        let source = Source::new(self.kind, &self.origin)?;

        let cache = self.cache && self.kind.is_remote();
        if self.cache && !cache {
            debug!("Caching not applicable to local source {}", source.origin());
        }

        let step = self
            .features
            .attach(ProcessingStep::base(Provider::new(source, cache)));

        let leaf = Leaf::new(step);
        info!(
            "Built {} item '{}' (cached: {}, features: {:?})",
            self.kind,
            leaf.label(),
            cache,
            leaf.step().features()
        );
        Ok(leaf)
    }
}
