//! Playable item tree
//!
//! A playlist is a [`Group`] of [`PlayableItem`]s, each either a single leaf
//! (one processing chain) or a nested group. Items are only appended, so the
//! tree has exclusive ownership and no cycles.

use mmp_common::{uuid_utils, EventSink};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::processing::ProcessingStep;

/// Anything that plays into an event sink: a leaf, a group or either
pub trait Playable {
    /// Emit this item's effects in order
    fn play(&mut self, sink: &mut dyn EventSink) -> Result<()>;

    /// Number of leaves at any depth
    fn leaf_count(&self) -> usize;
}

/// Single playable unit wrapping one processing chain
#[derive(Debug, Clone)]
pub struct Leaf {
    id: Uuid,
    label: String,
    step: ProcessingStep,
}

impl Leaf {
    /// Create a leaf labelled with its source origin
    pub fn new(step: ProcessingStep) -> Self {
        let label = step.provider().source().origin().to_string();
        Self {
            id: uuid_utils::generate(),
            label,
            step,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn step(&self) -> &ProcessingStep {
        &self.step
    }
}

impl Playable for Leaf {
    fn play(&mut self, sink: &mut dyn EventSink) -> Result<()> {
        debug!("Playing leaf {} ({})", uuid_utils::short(&self.id), self.label);
        self.step.apply(sink)
    }

    fn leaf_count(&self) -> usize {
        1
    }
}

/// Ordered collection of playable items, itself playable
#[derive(Debug, Clone)]
pub struct Group {
    id: Uuid,
    name: String,
    children: Vec<PlayableItem>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid_utils::generate(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item at the end
    pub fn add(&mut self, item: impl Into<PlayableItem>) {
        self.children.push(item.into());
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &PlayableItem> {
        self.children.iter()
    }

    /// Nesting depth; an empty or flat group has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|child| match child {
                PlayableItem::Leaf(_) => 0,
                PlayableItem::Group(group) => group.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

impl Playable for Group {
    /// Play every child in insertion order, depth-first
    ///
    /// The first error stops the traversal; the tree itself is left unchanged.
    fn play(&mut self, sink: &mut dyn EventSink) -> Result<()> {
        debug!(
            "Playing group '{}' with {} item(s)",
            self.name,
            self.children.len()
        );
        for child in &mut self.children {
            child.play(sink)?;
        }
        Ok(())
    }

    /// Number of leaves at any depth
    fn leaf_count(&self) -> usize {
        self.children().map(Playable::leaf_count).sum()
    }
}

/// Leaf or group
#[derive(Debug, Clone)]
pub enum PlayableItem {
    Leaf(Leaf),
    Group(Group),
}

impl PlayableItem {
    pub fn id(&self) -> Uuid {
        match self {
            PlayableItem::Leaf(leaf) => leaf.id(),
            PlayableItem::Group(group) => group.id(),
        }
    }
}

impl Playable for PlayableItem {
    fn play(&mut self, sink: &mut dyn EventSink) -> Result<()> {
        match self {
            PlayableItem::Leaf(leaf) => leaf.play(sink),
            PlayableItem::Group(group) => group.play(sink),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            PlayableItem::Leaf(leaf) => leaf.leaf_count(),
            PlayableItem::Group(group) => group.leaf_count(),
        }
    }
}

impl From<Leaf> for PlayableItem {
    fn from(leaf: Leaf) -> Self {
        PlayableItem::Leaf(leaf)
    }
}

impl From<Group> for PlayableItem {
    fn from(group: Group) -> Self {
        PlayableItem::Group(group)
    }
}
