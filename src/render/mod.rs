//! Retained SVG node tree every renderer draws into.

pub mod node;

pub use node::{Element, Fragment, Node};
