//! Cardsmith composes wedding invitation cards.
//!
//! A [`DataRecord`] (text, per-field styles, photo, overlay layers, palette) is laid out on
//! a catalog [`Template`] by the composition engine into a layered SVG tree. The
//! [`Editor`] session is the single mutation path: text edits, template swaps, drag and
//! resize gestures, undo/redo and drafts all go through it. Exports are payment-gated and
//! produce a PNG raster or a single-page PDF.
//!
//! - Build an [`Editor`] (or call [`render`] directly on a record and template)
//! - Mutate through the editor; re-render with [`Editor::render`]
//! - Export with [`SvgCapture`] + [`PdfPackager`] behind a [`PaymentGate`]
#![forbid(unsafe_code)]

/// Photo embedding as `data:` URIs.
pub mod assets;
/// Template and palette catalogs.
pub mod catalog;
/// Layout and layered composition of a card.
pub mod compose;
/// Decoration, border and texture lookup tables.
pub mod decor;
/// Capture, packaging and the payment-gated export flow.
pub mod export;
pub mod foundation;
/// Gesture, history and floating preview controllers.
pub mod interact;
pub mod model;
/// Versioned draft storage.
pub mod persist;
/// SVG node tree.
pub mod render;
/// The editing session.
pub mod session;

pub use crate::catalog::palettes::{NamedPalette, PALETTES, find_palette};
pub use crate::catalog::templates::{
    Category, LayoutVariant, Template, catalog, default_template, find as find_template,
};
pub use crate::compose::{Composition, LayerRole, ViewState, render};
pub use crate::export::{
    CaptureService, DocumentPackager, ExportAction, ExportArtifact, ExportPorts, PaymentGate,
    PaymentOutcome, PdfPackager, RasterImage, SvgCapture, encode_png,
};
pub use crate::foundation::config::EditorConfig;
pub use crate::foundation::core::{Color, Point, Vec2};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::model::record::{DataRecord, Language};
pub use crate::model::style::{CentralSymbol, FieldId, FieldStyle, LayerConfig, Palette};
pub use crate::persist::{DraftSlot, FileSlot, MemorySlot};
pub use crate::session::{Editor, LayerSlot, Nudge};
