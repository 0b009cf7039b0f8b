//! Static design catalogs: templates and color palettes.

/// Named five-color palettes.
pub mod palettes;
/// Template catalog and lookup.
pub mod templates;
