//! Error types for render operations

use crate::blocks::Surface;
use thiserror::Error;

/// Errors that can occur while rendering a node tree.
///
/// Every variant is fatal for the render call that raised it: there is no
/// partial output. Construction errors point at a bug in the code that built
/// the tree, compatibility errors at a block that does not fit its container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Inline tag that has no entry in the tag table
    #[error("Unknown HTML-like element: <{0}>")]
    UnknownElement(String),

    /// Inline tag rendered outside of a text field
    #[error("<{0}> must be placed inside a text field")]
    UnexpectedElement(String),

    /// `<time>` with a `datetime` that is neither a timestamp nor a date
    #[error("Invalid datetime for <time>: {0}")]
    InvalidDatetime(String),

    /// Inline tag placed directly in a block container
    #[error("{surface} container allows only layout blocks, found <{tag}>")]
    NotABlock { surface: Surface, tag: String },

    /// A single node was required
    #[error("Expected a single node child, got {count} children")]
    ExpectedSingleChild { count: usize },

    /// Block output that has no string `type` field
    #[error("Malformed block: {0}")]
    MalformedBlock(String),

    /// Block kind not permitted in the surrounding container
    #[error("{surface} container does not allow \"{kind}\" block")]
    IncompatibleBlock { surface: Surface, kind: String },

    /// Element kind not permitted inside an `actions` block of the container
    #[error("actions block has an incompatible \"{kind}\" element with {surface} container")]
    IncompatibleAction { surface: Surface, kind: String },

    /// Accessory kind not permitted inside a `section` block of the container
    #[error("section block has an incompatible \"{kind}\" accessory with {surface} container")]
    IncompatibleAccessory { surface: Surface, kind: String },

    /// Element kind not permitted inside a `context` block on this surface
    #[error("context block has an incompatible \"{kind}\" element with {surface} container")]
    IncompatibleContextElement { surface: Surface, kind: String },

    /// Context block that produced more elements than allowed
    #[error("The number of elements generated by context is {count}. It's going over the limit. ({limit})")]
    TooManyElements { count: usize, limit: usize },
}
