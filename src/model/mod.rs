//! The editable invitation: field styles, overlay layers, palette and the record itself.

/// Data record, language presets and record-level edits.
pub mod record;
/// Per-field style, photo placement, layer and palette types.
pub mod style;
