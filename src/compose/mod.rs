//! Card composition: layout metrics, text flow, and the layered render.
//!
//! [`render`] is pure. Equal `(record, template, view)` inputs produce an identical
//! [`Composition`], and serializing it with [`Composition::to_svg`] is byte-stable.

/// Layer stacking, field placement and hit-testing.
pub mod engine;
/// Canvas size, scale, padding and vertical flow.
pub mod layout;
/// Text splitting and width estimates.
pub mod text;

pub use engine::{Composition, Layer, LayerRole, PlacedField, ViewState, render};
pub use layout::{CARD_HEIGHT, CARD_HEIGHT_TALL, CARD_WIDTH, LayoutMetrics};
