//! Processing pipeline
//!
//! A [`ProcessingStep`] is a chain: one base step pulling content from a
//! [`Provider`], wrapped by zero or more feature steps. Applying the chain runs
//! the innermost (base) step first, so effects are reported in attachment order.

use mmp_common::{EventSink, Feature, PlaybackEvent};

use crate::cache::Provider;
use crate::error::Result;

/// One link of a processing chain
#[derive(Debug, Clone)]
pub enum ProcessingStep {
    /// Fetch content and process it
    Base(Provider),
    /// Run the inner step, then apply a feature
    Feature {
        feature: Feature,
        inner: Box<ProcessingStep>,
    },
}

impl ProcessingStep {
    pub fn base(provider: Provider) -> Self {
        ProcessingStep::Base(provider)
    }

    /// Wrap this step with a feature; the feature's effect follows all existing ones
    pub fn with(self, feature: Feature) -> Self {
        ProcessingStep::Feature {
            feature,
            inner: Box::new(self),
        }
    }

    /// Chain length: 1 + number of features
    pub fn depth(&self) -> usize {
        match self {
            ProcessingStep::Base(_) => 1,
            ProcessingStep::Feature { inner, .. } => 1 + inner.depth(),
        }
    }

    /// Attached features, innermost first (the order their effects are emitted)
    pub fn features(&self) -> Vec<Feature> {
        let mut features = Vec::new();
        let mut step = self;
        while let ProcessingStep::Feature { feature, inner } = step {
            features.push(*feature);
            step = inner.as_ref();
        }
        features.reverse();
        features
    }

    /// Provider at the bottom of the chain
    pub fn provider(&self) -> &Provider {
        match self {
            ProcessingStep::Base(provider) => provider,
            ProcessingStep::Feature { inner, .. } => inner.provider(),
        }
    }

    /// Run the chain, emitting the base effect then each feature effect
    pub fn apply(&mut self, sink: &mut dyn EventSink) -> Result<()> {
        match self {
            ProcessingStep::Base(provider) => {
                let content = provider.fetch(sink)?;
                sink.emit(PlaybackEvent::Processed {
                    content: content.to_string(),
                })?;
            }
            ProcessingStep::Feature { feature, inner } => {
                inner.apply(sink)?;
                sink.emit(PlaybackEvent::FeatureApplied { feature: *feature })?;
            }
        }
        Ok(())
    }
}

/// Which optional features to attach
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub subtitles: bool,
    pub equalizer: bool,
    pub watermark: bool,
}

impl FeatureSet {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            subtitles: true,
            equalizer: true,
            watermark: true,
        }
    }

    pub fn contains(&self, feature: Feature) -> bool {
        match feature {
            Feature::Subtitles => self.subtitles,
            Feature::Equalizer => self.equalizer,
            Feature::Watermark => self.watermark,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::Subtitles => self.subtitles = enabled,
            Feature::Equalizer => self.equalizer = enabled,
            Feature::Watermark => self.watermark = enabled,
        }
    }

    /// Selected features in fixed attachment order: subtitles, equalizer, watermark
    pub fn selected(&self) -> Vec<Feature> {
        Feature::all_variants()
            .iter()
            .copied()
            .filter(|f| self.contains(*f))
            .collect()
    }

    /// Wrap a base step with the selected features
    pub fn attach(&self, base: ProcessingStep) -> ProcessingStep {
        self.selected()
            .into_iter()
            .fold(base, |step, feature| step.with(feature))
    }
}
