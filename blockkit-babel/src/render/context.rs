//! Render context threaded down the recursion.
//!
//! A context is passed by value: every child render gets its own copy derived
//! from its parent's. A node therefore only ever observes the tags of its real
//! ancestors, never those of earlier siblings, and an error half-way down a
//! subtree cannot leave anything behind for the next sibling.

use crate::blocks::Surface;
use crate::format::FormatOptions;
use std::rc::Rc;

/// How string-bearing nodes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Structural output; inline tags are not allowed here
    #[default]
    Normal,
    /// Plain label text, tags reduce to their text
    PlainText,
    /// Inline tags are serialized through the tag table
    Html,
}

/// Persistent list of enclosing inline tags, nearest first.
///
/// Pushing shares the tail with the parent list, so deriving a child context is
/// cheap and never mutates what the parent holds.
#[derive(Debug, Clone, Default)]
pub struct Ancestry(Option<Rc<Frame>>);

#[derive(Debug)]
struct Frame {
    tag: String,
    parent: Ancestry,
}

impl Ancestry {
    pub fn new() -> Self {
        Self(None)
    }

    /// A new list with `tag` as the nearest ancestor.
    pub fn push(&self, tag: &str) -> Self {
        Self(Some(Rc::new(Frame {
            tag: tag.to_string(),
            parent: self.clone(),
        })))
    }

    /// The nearest ancestor.
    pub fn parent(&self) -> Option<&str> {
        self.0.as_deref().map(|frame| frame.tag.as_str())
    }

    /// Iterate from the nearest ancestor outwards.
    pub fn iter(&self) -> AncestryIter<'_> {
        AncestryIter {
            next: self.0.as_deref(),
        }
    }

    /// Whether the nearest ancestor is one of `tags`.
    pub fn is_child_of(&self, tags: &[&str]) -> bool {
        self.parent().is_some_and(|parent| tags.contains(&parent))
    }

    /// Whether any ancestor is one of `tags`.
    pub fn is_descendant_of(&self, tags: &[&str]) -> bool {
        self.iter().any(|tag| tags.contains(&tag))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn depth(&self) -> usize {
        self.iter().count()
    }
}

pub struct AncestryIter<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for AncestryIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.parent.0.as_deref();
        Some(frame.tag.as_str())
    }
}

/// Everything a node needs to know about where it is being rendered.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    pub ancestry: Ancestry,
    pub mode: Mode,
    /// Innermost block container enclosing the node
    pub surface: Surface,
    pub options: FormatOptions,
}

impl ParseContext {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Context for the children of inline element `tag`.
    pub fn enter(&self, tag: &str) -> Self {
        Self {
            ancestry: self.ancestry.push(tag),
            ..self.clone()
        }
    }

    pub fn within(&self, surface: Surface) -> Self {
        Self {
            surface,
            ..self.clone()
        }
    }
}
