//! Node tree model.
//!
//! This module defines the tree handed to the renderer: [`nodes::Node`] values
//! built by builder calls, and the normalization applied to their children.

pub mod children;
pub mod nodes;
pub mod normalize;
