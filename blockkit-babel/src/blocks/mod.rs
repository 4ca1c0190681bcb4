//! Block containers and the checks run once they are built.
//!
//! A container (`blocks`, `modal`, `home`) accepts a different set of block
//! types depending on where the payload will be published. The builders in
//! [`builders`] tag container and context nodes with a [`PostBuild`] hook; the
//! render engine reports those back as [`Deferred`] entries and
//! [`validate::run_deferred`] checks them against the
//! [`registry::CompatibilityRegistry`].

pub mod builders;
pub mod registry;
pub mod validate;

use serde_json::Value;
use std::fmt;

/// Where a block payload is published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Surface {
    #[default]
    Message,
    Modal,
    Home,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Message => "message",
            Surface::Modal => "modal",
            Surface::Home => "home",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check attached to a node, run against its output after the tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBuild {
    /// The node's output is the block list of a container on this surface.
    Container(Surface),
    /// The node's output is a context block.
    ContextElements,
}

/// A post-build check scheduled during rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred {
    pub hook: PostBuild,
    /// Rendered output of the node that carried the hook
    pub output: Value,
    /// Innermost container the node was rendered in
    pub surface: Surface,
}
